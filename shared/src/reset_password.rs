use async_trait::async_trait;

use crate::store::{Action, Notice};
use crate::validation::EmailError;
use crate::{ApiError, LoginForm, ResetPasswordRequest};

/// Anything that can deliver a password reset request.
///
/// Returns the raw response body on success.
#[async_trait(?Send)]
pub trait PasswordResetService {
    async fn request_password_reset(&self, request: &ResetPasswordRequest) -> Result<String, ApiError>;
}

/// Result of one submit of the reset-password form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected(EmailError),
    Sent { email: String, response: String },
    Failed { email: String, error: ApiError },
}

impl SubmitOutcome {
    /// Store actions the form should dispatch, in order.
    ///
    /// `modal_id` is the modal the form was submitted from. It closes after
    /// every request that was actually sent, unless the user already moved
    /// on to another modal, and the notice tells the user whether it went
    /// through.
    pub fn actions(&self, modal_id: u64) -> Vec<Action> {
        match self {
            SubmitOutcome::Rejected(_) => Vec::new(),
            SubmitOutcome::Sent { email, .. } => vec![
                Action::CloseModalIf(modal_id),
                Action::ShowNotice(Notice::success(format!(
                    "If an account exists for {email}, a password reset link is on its way."
                ))),
            ],
            SubmitOutcome::Failed { error, .. } => vec![
                Action::CloseModalIf(modal_id),
                Action::ShowNotice(Notice::error(format!(
                    "Password reset failed: {}",
                    error.user_message()
                ))),
            ],
        }
    }
}

/// Validate the form, send it once, and reset it once the request settles.
///
/// An invalid form is left untouched so the user can correct it.
pub async fn submit_reset_password<S>(form: &mut LoginForm, service: &S) -> SubmitOutcome
where
    S: PasswordResetService + ?Sized,
{
    if let Err(error) = form.validate() {
        return SubmitOutcome::Rejected(error);
    }

    let request = ResetPasswordRequest {
        values: form.clone(),
    };
    let result = service.request_password_reset(&request).await;
    form.reset();

    let email = request.values.email;
    match result {
        Ok(response) => SubmitOutcome::Sent { email, response },
        Err(error) => SubmitOutcome::Failed { email, error },
    }
}
