use std::error::Error;
use std::fmt;

use wasm_bindgen::JsValue;

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// A failed call out to `fetch`, or a response we couldn't make sense of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    emsg: String,
}

impl FetchError {
    pub fn new(emsg: impl Into<String>) -> Self {
        FetchError { emsg: emsg.into() }
    }

    pub fn as_string(&self) -> String {
        self.emsg.clone()
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fetch failed -> {}", self.emsg)
    }
}

impl Error for FetchError {}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self {
            emsg: describe(&value),
        }
    }
}

/// The browser refused to move to, or reload, a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationError {
    emsg: String,
}

impl NavigationError {
    pub fn new(emsg: impl Into<String>) -> Self {
        NavigationError { emsg: emsg.into() }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "navigation failed -> {}", self.emsg)
    }
}

impl Error for NavigationError {}

impl From<JsValue> for NavigationError {
    fn from(value: JsValue) -> Self {
        Self {
            emsg: describe(&value),
        }
    }
}
