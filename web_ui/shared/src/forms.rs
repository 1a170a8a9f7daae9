//! Presence checks for server-rendered forms.
//!
//! The backend does the real validation, this only stops obviously empty submissions
//! from making the round trip.

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::constants::{
    LOGIN_REQUIRED_FIELDS, MEDICINE_REQUIRED_FIELDS, MSG_LOGIN_REQUIRED, MSG_MEDICINE_REQUIRED,
};
use crate::interaction::UserPrompt;
use crate::utils::{get_element_by_id, on_page_ready};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCheck {
    Allow,
    Block {
        missing: Vec<&'static str>,
        message: &'static str,
    },
}

impl FormCheck {
    pub fn is_blocked(&self) -> bool {
        matches!(self, FormCheck::Block { .. })
    }
}

/// A set of fields which must be non-empty, and what to tell the user when they aren't.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormGuard {
    required: &'static [&'static str],
    message: &'static str,
}

impl FormGuard {
    pub const fn new(required: &'static [&'static str], message: &'static str) -> Self {
        FormGuard { required, message }
    }

    /// `email` and `password`
    pub const fn login() -> Self {
        Self::new(LOGIN_REQUIRED_FIELDS, MSG_LOGIN_REQUIRED)
    }

    /// `name`, `dosage` and `frequency`, notes are optional
    pub const fn medicine() -> Self {
        Self::new(MEDICINE_REQUIRED_FIELDS, MSG_MEDICINE_REQUIRED)
    }

    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    /// Decide on a single submission. A field the lookup can't find counts as empty.
    pub fn check<F>(&self, lookup: F) -> FormCheck
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&'static str> = self
            .required
            .iter()
            .copied()
            .filter(|name| lookup(*name).map(|v| v.is_empty()).unwrap_or(true))
            .collect();

        if missing.is_empty() {
            FormCheck::Allow
        } else {
            FormCheck::Block {
                missing,
                message: self.message,
            }
        }
    }
}

/// The current value of the named control in a form, whatever kind of control it is.
pub fn form_field_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    let element = form
        .query_selector(&format!("[name=\"{}\"]", name))
        .ok()
        .flatten()?;

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        element
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|textarea| textarea.value())
    }
}

/// Registers the guard against the form's `submit` event. The listener lives as long as
/// the returned handle does.
pub fn bind_form_guard<P>(form: &HtmlFormElement, guard: FormGuard, prompt: P) -> EventListener
where
    P: UserPrompt + 'static,
{
    let form_c = form.clone();
    // submit listeners default to passive, which would make prevent_default a no-op
    EventListener::new_with_options(
        form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let check = guard.check(|name| form_field_value(&form_c, name));
            #[cfg(debug_assertions)]
            console::debug!(format!("form guard -> {:?}", check).as_str());

            if let FormCheck::Block { message, .. } = check {
                event.prevent_default();
                prompt.alert(message);
            }
        },
    )
}

/// Once the page is ready, find the form by id and guard it for the life of the page.
pub fn run_form_guard<P>(form_id: String, guard: FormGuard, prompt: P)
where
    P: UserPrompt + 'static,
{
    on_page_ready(move || match get_element_by_id::<HtmlFormElement>(&form_id) {
        Some(form) => bind_form_guard(&form, guard, prompt).forget(),
        None => {
            console::error!(format!("unable to find form with id '{}' to guard", form_id).as_str())
        }
    });
}
