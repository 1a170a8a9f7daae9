//! What the row controls do.

use async_trait::async_trait;
use medtrack_proto::constants::uri;
use medtrack_proto::MedicineId;
use medtrack_web_ui_shared::constants::{MSG_CONFIRM_DELETE, MSG_DELETE_FAILED};
use medtrack_web_ui_shared::error::{FetchError, NavigationError};
use medtrack_web_ui_shared::interaction::{PageNavigator, UserPrompt};
use medtrack_web_ui_shared::{do_request, status_is_success, RequestMethod};

/// The backend's medicine endpoints.
#[async_trait(?Send)]
pub trait MedicineBackend {
    /// Returns the http status the backend answered with.
    async fn delete_medicine(&self, id: MedicineId) -> Result<u16, FetchError>;
}

/// Talks to the backend that served the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpMedicineBackend;

#[async_trait(?Send)]
impl MedicineBackend for HttpMedicineBackend {
    async fn delete_medicine(&self, id: MedicineId) -> Result<u16, FetchError> {
        let (status, _) = do_request(&uri::delete_medicine(id), RequestMethod::DELETE).await?;
        Ok(status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user said no, nothing was sent.
    Cancelled,
    /// Deleted, and the page is reloading.
    Deleted,
    /// Deleted, but the reload didn't happen.
    ReloadFailed { emsg: String },
    /// The backend answered with a non-success status.
    Rejected { status: u16 },
    /// The request never got an answer.
    Unreachable { emsg: String },
}

/// Confirm with the user, ask the backend to delete the medicine, then reload so the
/// table is rebuilt from fresh data. Both kinds of failure get the same alert.
pub async fn delete_medicine<P, B, N>(
    id: MedicineId,
    prompt: &P,
    backend: &B,
    navigator: &N,
) -> DeleteOutcome
where
    P: UserPrompt + ?Sized,
    B: MedicineBackend + ?Sized,
    N: PageNavigator + ?Sized,
{
    if !prompt.confirm(MSG_CONFIRM_DELETE) {
        return DeleteOutcome::Cancelled;
    }

    match backend.delete_medicine(id).await {
        Ok(status) if status_is_success(status) => match navigator.reload() {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => DeleteOutcome::ReloadFailed {
                emsg: e.to_string(),
            },
        },
        Ok(status) => {
            prompt.alert(MSG_DELETE_FAILED);
            DeleteOutcome::Rejected { status }
        }
        Err(e) => {
            prompt.alert(MSG_DELETE_FAILED);
            DeleteOutcome::Unreachable {
                emsg: e.as_string(),
            }
        }
    }
}

/// Send the browser to the medicine's edit page.
pub fn edit_medicine<N>(id: MedicineId, navigator: &N) -> Result<(), NavigationError>
where
    N: PageNavigator + ?Sized,
{
    navigator.navigate(&uri::edit_medicine(id))
}
