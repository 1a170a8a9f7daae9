//! Test harnesses for the medicines table.
//!
//! Run this with a real browser, for example:
//!
//! ```shell
//! wasm-pack test --firefox --headless web_ui/medicines
//! ```
#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use gloo::timers::future::TimeoutFuture;
use medtrack_proto::{DataError, MedicineId};
use medtrack_web_ui_medicines::actions::MedicineBackend;
use medtrack_web_ui_medicines::table::{render_medicines, RowActions};
use medtrack_web_ui_medicines::{decode_medicines, run_medicines_table};
use medtrack_web_ui_shared::error::{FetchError, NavigationError};
use medtrack_web_ui_shared::interaction::{PageNavigator, UserPrompt};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const MEDICINES: &str = r#"[
    {"id": 3, "name": "Paracetamol", "dosage": "500mg", "frequency": "Twice a day", "notes": "With food"},
    {"id": 1, "name": "<b>Ibuprofen</b>", "dosage": "200mg", "frequency": "Once a day"},
    {"id": 2, "name": "Cetirizine", "dosage": "10mg", "frequency": "As needed", "notes": null}
]"#;

struct AgreeingPrompt;

impl UserPrompt for AgreeingPrompt {
    fn confirm(&self, _message: &str) -> bool {
        true
    }

    fn alert(&self, _message: &str) {}
}

#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
    reloads: Cell<usize>,
}

impl PageNavigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn reload(&self) -> Result<(), NavigationError> {
        self.reloads.set(self.reloads.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingBackend {
    deleted: RefCell<Vec<MedicineId>>,
}

#[async_trait(?Send)]
impl MedicineBackend for RecordingBackend {
    async fn delete_medicine(&self, id: MedicineId) -> Result<u16, FetchError> {
        self.deleted.borrow_mut().push(id);
        Ok(200)
    }
}

struct Recorded {
    actions: RowActions,
    navigator: Rc<RecordingNavigator>,
    backend: Rc<RecordingBackend>,
}

fn recorded_actions() -> Recorded {
    let navigator = Rc::new(RecordingNavigator::default());
    let backend = Rc::new(RecordingBackend::default());
    Recorded {
        actions: RowActions {
            prompt: Rc::new(AgreeingPrompt),
            navigator: navigator.clone(),
            backend: backend.clone(),
        },
        navigator,
        backend,
    }
}

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("no document")
}

fn medicines_js() -> JsValue {
    js_sys::JSON::parse(MEDICINES).expect("invalid test json")
}

fn table_body(id: &str) -> Element {
    let document = document();
    let table = document.create_element("table").expect("create table");
    let tbody = document.create_element("tbody").expect("create tbody");
    tbody.set_id(id);
    table.append_child(&tbody).expect("append tbody");
    document
        .body()
        .expect("no body")
        .append_child(&table)
        .expect("append table");
    tbody
}

fn cell_texts(tbody: &Element) -> Vec<Vec<String>> {
    let rows = tbody.children();
    (0..rows.length())
        .filter_map(|i| rows.item(i))
        .map(|row| {
            let cells = row.children();
            (0..cells.length())
                .filter_map(|i| cells.item(i))
                .map(|cell| cell.text_content().unwrap_or_default())
                .collect()
        })
        .collect()
}

// yew renders on its own scheduler, give it a moment
async fn settle() {
    TimeoutFuture::new(20).await;
}

#[wasm_bindgen_test]
async fn renders_a_row_per_medicine_in_order() {
    let tbody = table_body("medicines-tbody-order");
    let medicines = decode_medicines(medicines_js()).expect("failed to decode");
    render_medicines(&tbody, &medicines, &recorded_actions().actions).expect("render failed");
    settle().await;

    let rows = cell_texts(&tbody);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][..4], ["Paracetamol", "500mg", "Twice a day", "With food"]);
    assert_eq!(rows[1][3], "N/A");
    assert_eq!(rows[2][0], "Cetirizine");
    assert_eq!(rows[2][3], "N/A");
}

#[wasm_bindgen_test]
async fn names_are_text_not_markup() {
    let tbody = table_body("medicines-tbody-markup");
    let medicines = decode_medicines(medicines_js()).expect("failed to decode");
    render_medicines(&tbody, &medicines, &recorded_actions().actions).expect("render failed");
    settle().await;

    let cell = tbody
        .query_selector("tr:nth-child(2) td")
        .expect("query")
        .expect("no cell");
    assert_eq!(cell.children().length(), 0);
    assert_eq!(cell.text_content().as_deref(), Some("<b>Ibuprofen</b>"));
}

#[wasm_bindgen_test]
async fn rows_carry_edit_and_delete_controls() {
    let tbody = table_body("medicines-tbody-controls");
    let medicines = decode_medicines(medicines_js()).expect("failed to decode");
    render_medicines(&tbody, &medicines, &recorded_actions().actions).expect("render failed");
    settle().await;

    let buttons = tbody
        .query_selector_all("tr:first-child button")
        .expect("query");
    assert_eq!(buttons.length(), 2);

    let edit = tbody
        .query_selector("tr:first-child button.btn-primary")
        .expect("query")
        .expect("no edit button");
    assert_eq!(
        edit.get_attribute("data-href").as_deref(),
        Some("/medicines/edit_medicine/3")
    );
    // no inline handlers
    assert!(edit.get_attribute("onclick").is_none());
}

fn button(tbody: &Element, selector: &str) -> HtmlElement {
    tbody
        .query_selector(selector)
        .expect("query")
        .expect("no button")
        .dyn_into()
        .expect("not an html element")
}

#[wasm_bindgen_test]
async fn edit_button_navigates_to_its_medicine() {
    let tbody = table_body("medicines-tbody-edit-click");
    let medicines = decode_medicines(medicines_js()).expect("failed to decode");
    let recorded = recorded_actions();
    render_medicines(&tbody, &medicines, &recorded.actions).expect("render failed");
    settle().await;

    button(&tbody, "tr:nth-child(2) button.btn-primary").click();
    settle().await;

    assert_eq!(
        *recorded.navigator.visited.borrow(),
        vec!["/medicines/edit_medicine/1".to_string()]
    );
    assert!(recorded.backend.deleted.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn delete_button_deletes_its_medicine() {
    let tbody = table_body("medicines-tbody-delete-click");
    let medicines = decode_medicines(medicines_js()).expect("failed to decode");
    let recorded = recorded_actions();
    render_medicines(&tbody, &medicines, &recorded.actions).expect("render failed");
    settle().await;

    button(&tbody, "tr:nth-child(3) button.btn-danger").click();
    settle().await;

    assert_eq!(*recorded.backend.deleted.borrow(), vec![MedicineId(2)]);
    assert_eq!(recorded.navigator.reloads.get(), 1);
    assert!(recorded.navigator.visited.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn rows_are_appended_after_existing_content() {
    let tbody = table_body("medicines-tbody-existing");
    tbody.set_inner_html("<tr><td>Loading medicines</td></tr>");
    let medicines = decode_medicines(medicines_js()).expect("failed to decode");
    render_medicines(&tbody, &medicines, &recorded_actions().actions).expect("render failed");
    settle().await;

    let rows = cell_texts(&tbody);
    assert_eq!(rows.len(), 1 + 3);
    assert_eq!(rows[0], vec!["Loading medicines".to_string()]);
    assert_eq!(rows[1][0], "Paracetamol");
    assert_eq!(rows[3][0], "Cetirizine");
}

#[wasm_bindgen_test]
fn non_lists_are_rejected() {
    for value in [
        JsValue::UNDEFINED,
        JsValue::NULL,
        js_sys::Object::new().into(),
    ] {
        assert!(matches!(
            decode_medicines(value),
            Err(DataError::NotAList { .. })
        ));
    }
}

#[wasm_bindgen_test]
async fn bad_data_renders_nothing() {
    let tbody = table_body("medicines-tbody-missing");
    run_medicines_table(JsValue::UNDEFINED, Some("medicines-tbody-missing".to_string()))
        .expect("entry point failed");
    settle().await;
    assert_eq!(tbody.children().length(), 0);
}

#[wasm_bindgen_test]
async fn entry_point_renders_into_named_body() {
    let tbody = table_body("medicines-tbody-entry");
    run_medicines_table(medicines_js(), Some("medicines-tbody-entry".to_string()))
        .expect("entry point failed");
    settle().await;
    assert_eq!(tbody.children().length(), 3);
}
