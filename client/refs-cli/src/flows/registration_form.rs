use log::{info, warn};
use refs_api::{ApiClient, ApiResult, FailureKind, RegistrationResponse};

pub const EMPTY_EMAIL_MESSAGE: &str = "Please enter your email address.";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed";
pub const REGISTRATION_NETWORK_MESSAGE: &str = "Something went wrong. Please try again.";

/// View state of the landing page's pre-registration form.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    pub email: String,
    submitting: bool,
    success: bool,
    error: Option<String>,
    server_message: Option<String>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// A request is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submit_enabled(&self) -> bool {
        !self.submitting
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Confirmation text from the server, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        self.server_message.as_deref()
    }

    /// Start an attempt. Returns the email to send, or `None` when a request
    /// is already in flight or the input is blank.
    ///
    /// Every accepted attempt starts from a clean slate: previous success and
    /// error are dropped.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }

        self.success = false;
        self.error = None;
        self.server_message = None;

        let email = self.email.trim();
        if email.is_empty() {
            self.error = Some(EMPTY_EMAIL_MESSAGE.to_string());
            return None;
        }

        self.submitting = true;
        Some(email.to_string())
    }

    /// Apply the backend's answer to an attempt started with `begin_submit`.
    pub fn complete(&mut self, result: ApiResult<RegistrationResponse>) {
        self.submitting = false;

        match result {
            Ok(response) => {
                info!("Pre-registration accepted");
                self.success = true;
                self.error = None;
                self.server_message = response.message;
                self.email.clear();
            }
            Err(e) => {
                warn!("Pre-registration failed: {e}");
                let message = match e.kind() {
                    FailureKind::Network => REGISTRATION_NETWORK_MESSAGE,
                    FailureKind::Rejected | FailureKind::Decode => e
                        .server_message()
                        .unwrap_or(REGISTRATION_FAILED_MESSAGE),
                };
                self.error = Some(message.to_string());
            }
        }
    }

    /// Validate, POST, and apply the result. Returns whether it succeeded.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        let Some(email) = self.begin_submit() else {
            return false;
        };

        let result = api.preregister(&email).await;
        self.complete(result);
        self.success
    }
}
