use std::rc::Rc;

use gloo::console;
use medtrack_proto::constants::uri;
use medtrack_proto::{MedicineId, MedicineList, MedicineRecord};
use medtrack_web_ui_shared::constants::{CSS_BTN_DELETE, CSS_BTN_EDIT};
use medtrack_web_ui_shared::interaction::{
    BrowserNavigator, BrowserPrompt, PageNavigator, UserPrompt,
};
use medtrack_web_ui_shared::utils::document;
use wasm_bindgen::JsValue;
use web_sys::Element;
use yew::prelude::*;

use crate::actions::{
    delete_medicine, edit_medicine, DeleteOutcome, HttpMedicineBackend, MedicineBackend,
};

/// What a single table row shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicineRow {
    pub id: MedicineId,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub notes: String,
    pub edit_url: String,
}

impl From<&MedicineRecord> for MedicineRow {
    fn from(record: &MedicineRecord) -> Self {
        MedicineRow {
            id: record.id,
            name: record.name.clone(),
            dosage: record.dosage.clone(),
            frequency: record.frequency.clone(),
            notes: record.display_notes().to_string(),
            edit_url: uri::edit_medicine(record.id),
        }
    }
}

/// One row per record, in the order they were given.
pub fn medicine_rows(records: &[MedicineRecord]) -> Vec<MedicineRow> {
    records.iter().map(MedicineRow::from).collect()
}

/// The browser capabilities a row's controls act through.
#[derive(Clone)]
pub struct RowActions {
    pub prompt: Rc<dyn UserPrompt>,
    pub navigator: Rc<dyn PageNavigator>,
    pub backend: Rc<dyn MedicineBackend>,
}

impl RowActions {
    /// Real dialogs, `window.location` and the backend that served the page.
    pub fn browser() -> Self {
        RowActions {
            prompt: Rc::new(BrowserPrompt),
            navigator: Rc::new(BrowserNavigator),
            backend: Rc::new(HttpMedicineBackend),
        }
    }
}

impl PartialEq for RowActions {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.prompt, &other.prompt)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
            && Rc::ptr_eq(&self.backend, &other.backend)
    }
}

pub enum Msg {
    Edit,
    Delete,
    DeleteComplete(DeleteOutcome),
}

#[derive(Properties, PartialEq)]
pub struct MedicineRowProps {
    pub row: MedicineRow,
    pub actions: RowActions,
}

/// The cells of one medicine's row. Mounted into a `tr` the table body already owns.
pub struct MedicineRowView {}

impl Component for MedicineRowView {
    type Message = Msg;
    type Properties = MedicineRowProps;

    fn create(_ctx: &Context<Self>) -> Self {
        #[cfg(debug_assertions)]
        console::debug!(format!("medicine row::create -> {}", _ctx.props().row.id).as_str());
        MedicineRowView {}
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let id = ctx.props().row.id;
        match msg {
            Msg::Edit => {
                if let Err(e) = edit_medicine(id, &*ctx.props().actions.navigator) {
                    console::error!(format!("unable to edit medicine {} -> {}", id, e).as_str());
                }
            }
            Msg::Delete => {
                let actions = ctx.props().actions.clone();
                ctx.link().send_future(async move {
                    let outcome = delete_medicine(
                        id,
                        &*actions.prompt,
                        &*actions.backend,
                        &*actions.navigator,
                    )
                    .await;
                    Msg::DeleteComplete(outcome)
                });
            }
            Msg::DeleteComplete(outcome) => match outcome {
                DeleteOutcome::Cancelled => {
                    #[cfg(debug_assertions)]
                    console::debug!(format!("delete of medicine {} cancelled", id).as_str());
                }
                DeleteOutcome::Deleted => {
                    #[cfg(debug_assertions)]
                    console::debug!(format!("medicine {} deleted, reloading", id).as_str());
                }
                DeleteOutcome::ReloadFailed { emsg } => {
                    console::error!(
                        format!("medicine {} deleted but reload failed -> {}", id, emsg).as_str()
                    );
                }
                DeleteOutcome::Rejected { status } => {
                    console::error!(
                        format!("backend refused to delete medicine {} -> {}", id, status).as_str()
                    );
                }
                DeleteOutcome::Unreachable { emsg } => {
                    console::error!(
                        format!("unable to reach backend to delete medicine {} -> {}", id, emsg)
                            .as_str()
                    );
                }
            },
        }
        // rows only change when the page is reloaded
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let row = &ctx.props().row;
        html! {
            <>
                <td>{ row.name.clone() }</td>
                <td>{ row.dosage.clone() }</td>
                <td>{ row.frequency.clone() }</td>
                <td>{ row.notes.clone() }</td>
                <td>
                    <button type="button" class={CSS_BTN_EDIT} data-href={ row.edit_url.clone() }
                        onclick={ ctx.link().callback(|_| Msg::Edit) }
                    >
                        { "Edit" }
                    </button>
                    { " " }
                    <button type="button" class={CSS_BTN_DELETE}
                        onclick={ ctx.link().callback(|_| Msg::Delete) }
                    >
                        { "Delete" }
                    </button>
                </td>
            </>
        }
    }
}

/// Appends one row per medicine to `container`, after whatever it already holds.
///
/// Each row is its own `tr` host, so yew never clears the container itself.
pub fn render_medicines(
    container: &Element,
    medicines: &MedicineList,
    actions: &RowActions,
) -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console::debug!(format!("rendering {} medicines", medicines.len()).as_str());
    let document = document();
    for row in medicine_rows(medicines.as_slice()) {
        let tr = document.create_element("tr")?;
        container.append_child(&tr)?;
        yew::Renderer::<MedicineRowView>::with_root_and_props(
            tr,
            MedicineRowProps {
                row,
                actions: actions.clone(),
            },
        )
        .render();
    }
    Ok(())
}
