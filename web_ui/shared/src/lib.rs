//! Bits and pieces every medtrack page script needs: talking to the backend, finding
//! things in the DOM, and the seams used to keep browser dialogs out of the logic.

#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::trivially_copy_pass_by_ref)]

use std::fmt;

use constants::CONTENT_TYPE;
use error::FetchError;
#[cfg(debug_assertions)]
use gloo::console;
use medtrack_proto::constants::APPLICATION_JSON;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

pub mod constants;
pub mod error;
pub mod forms;
pub mod interaction;
pub mod utils;

/// Build and send a bodyless request to the backend with the standard headers, and pull
/// back (status, json). The json is `JsValue::NULL` when the response isn't json.
pub async fn do_request(uri: &str, method: RequestMethod) -> Result<(u16, JsValue), FetchError> {
    let opts = RequestInit::new();
    opts.set_method(&method.to_string());
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_credentials(RequestCredentials::SameOrigin);

    let request = Request::new_with_str_and_init(uri, &opts)?;
    request.headers().set(CONTENT_TYPE, APPLICATION_JSON)?;

    let window = utils::window();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    let status = resp.status();

    let is_json = resp
        .headers()
        .get(CONTENT_TYPE)
        .ok()
        .flatten()
        .map(|ct| ct.starts_with(APPLICATION_JSON))
        .unwrap_or(false);

    let body = if is_json {
        match resp.json() {
            Ok(json_future) => JsFuture::from(json_future).await.unwrap_or_else(|_e| {
                #[cfg(debug_assertions)]
                console::debug!(format!("future json error -> {:?}", _e).as_str());
                JsValue::NULL
            }),
            Err(_e) => {
                #[cfg(debug_assertions)]
                console::debug!(format!("response json error -> {:?}", _e).as_str());
                JsValue::NULL
            }
        }
    } else {
        JsValue::NULL
    };

    Ok((status, body))
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RequestMethod {
    DELETE,
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMethod::DELETE => f.write_str("DELETE"),
        }
    }
}

/// Anything in 200..=299, the same as `Response.ok`.
pub fn status_is_success(status: u16) -> bool {
    (200..300).contains(&status)
}
