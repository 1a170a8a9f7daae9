//! Constants

// the HTML element id of the table body the medicines get rendered into
pub const ID_MEDICINES_TBODY: &str = "medicines-tbody";
// the HTML element id of the login form
pub const ID_LOGIN_FORM: &str = "login-form";
// the HTML element id of the add/edit medicine form
pub const ID_MEDICINE_FORM: &str = "medicine-form";

pub const CSS_BTN_EDIT: &str = "btn btn-primary";
pub const CSS_BTN_DELETE: &str = "btn btn-danger";

pub const CONTENT_TYPE: &str = "content-type";

pub const LOGIN_REQUIRED_FIELDS: &[&str] = &["email", "password"];
pub const MEDICINE_REQUIRED_FIELDS: &[&str] = &["name", "dosage", "frequency"];

pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this medicine?";
pub const MSG_DELETE_FAILED: &str = "Failed to delete medicine";
pub const MSG_LOGIN_REQUIRED: &str = "Please fill in both the email and password fields.";
pub const MSG_MEDICINE_REQUIRED: &str =
    "Please fill in the medicine name, dosage and frequency fields.";
pub const MSG_BAD_MEDICINES_DATA: &str =
    "Medicines data is not in the expected format or is missing";
