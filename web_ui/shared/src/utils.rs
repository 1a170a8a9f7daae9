use gloo::events::EventListener;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Document, Window};

/// Gets the equivalent of `window()` in javascript
pub fn window() -> Window {
    web_sys::window().expect_throw("Unable to retrieve window")
}

/// Gets the equivalent of `window().document()` in javascript
pub fn document() -> Document {
    window()
        .document()
        .expect_throw("Unable to retrieve document")
}

/// Looks up an element by id, and casts it to the type the caller is after.
pub fn get_element_by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Runs `f` once the DOM is parsed. If that's already happened, it runs straight away.
pub fn on_page_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let doc = document();
    if doc.ready_state() == "loading" {
        EventListener::once(&doc, "DOMContentLoaded", move |_| f()).forget();
    } else {
        f();
    }
}
