//! The "My Medicines" page: the medicines table and its row actions, and the guard on
//! the add/edit medicine form.

#![recursion_limit = "256"]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod actions;
pub mod table;

use gloo::console;
use medtrack_proto::{DataError, MedicineList};
use medtrack_web_ui_shared::constants::{
    ID_MEDICINES_TBODY, ID_MEDICINE_FORM, MSG_BAD_MEDICINES_DATA,
};
use medtrack_web_ui_shared::forms::{run_form_guard, FormGuard};
use medtrack_web_ui_shared::interaction::BrowserPrompt;
use medtrack_web_ui_shared::utils::{get_element_by_id, on_page_ready};
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::table::{render_medicines, RowActions};

/// Pull whatever the page handed us into a list of medicines.
pub fn decode_medicines(medicines: JsValue) -> Result<MedicineList, DataError> {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(medicines).map_err(|_| DataError::NotAList {
            found: "an unreadable value",
        })?;
    MedicineList::try_from(value)
}

/// This is the entry point for the medicines table.
///
/// The page passes in its medicines (`run_medicines_table(medicines)`), and once the DOM is
/// ready a row per medicine is appended to the table body. Bad data is logged and the
/// table is left alone.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_medicines_table(medicines: JsValue, tbody_id: Option<String>) -> Result<(), JsValue> {
    let tbody_id = tbody_id.unwrap_or_else(|| ID_MEDICINES_TBODY.to_string());

    on_page_ready(move || {
        let medicines = match decode_medicines(medicines) {
            Ok(medicines) => medicines,
            Err(e) => {
                console::error!(MSG_BAD_MEDICINES_DATA, e.to_string());
                return;
            }
        };

        match get_element_by_id::<Element>(&tbody_id) {
            Some(container) => {
                if let Err(e) = render_medicines(&container, &medicines, &RowActions::browser()) {
                    console::error!("unable to render medicines table", e);
                }
            }
            None => console::error!(
                format!("unable to find medicines table body with id '{}'", tbody_id).as_str()
            ),
        }
    });
    Ok(())
}

/// Entry point for the add/edit medicine pages, blocks submission until the name, dosage
/// and frequency are filled in.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_medicine_form_guard(form_id: Option<String>) -> Result<(), JsValue> {
    run_form_guard(
        form_id.unwrap_or_else(|| ID_MEDICINE_FORM.to_string()),
        FormGuard::medicine(),
        BrowserPrompt,
    );
    Ok(())
}
