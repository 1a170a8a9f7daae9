//! Backend URIs
//!
//! These are owned by the backend, if they change there they must change here.

pub const DELETE_MEDICINE: &str = "/delete_medicine";
pub const EDIT_MEDICINE: &str = "/medicines/edit_medicine";

use crate::models::MedicineId;

/// `DELETE` target for a single medicine
pub fn delete_medicine(id: MedicineId) -> String {
    format!("{}/{}", DELETE_MEDICINE, id)
}

/// Page that edits a single medicine
pub fn edit_medicine(id: MedicineId) -> String {
    format!("{}/{}", EDIT_MEDICINE, id)
}
