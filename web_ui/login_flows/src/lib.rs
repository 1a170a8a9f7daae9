//! This handles the client side of the login page, and is designed to be smol and snappy
//! so it loads fast.
//!
//! - /auth/login

#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]

use medtrack_web_ui_shared::constants::ID_LOGIN_FORM;
use medtrack_web_ui_shared::forms::{run_form_guard, FormGuard};
use medtrack_web_ui_shared::interaction::BrowserPrompt;
#[allow(unused_imports)] // because it's needed to compile wasm things
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

/// This is the entry point of the login page.
///
/// Once the DOM is ready, submitting the login form with an empty email or password is
/// blocked and the user is told both are needed.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn run_login_guard(form_id: Option<String>) -> Result<(), JsValue> {
    run_form_guard(
        form_id.unwrap_or_else(|| ID_LOGIN_FORM.to_string()),
        FormGuard::login(),
        BrowserPrompt,
    );
    Ok(())
}
