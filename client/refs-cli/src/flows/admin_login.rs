use log::{info, warn};
use refs_api::{ApiClient, ApiResult, FailureKind};
use refs_core::{Route, SessionCredential, SessionStore};
use serde_json::Value;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Username and password are required.";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const CONNECTION_FAILED_MESSAGE: &str = "Connection failed. Please try again.";

/// View state of the admin login form.
#[derive(Debug, Default)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
    submitting: bool,
    error: Option<String>,
}

/// Input captured when an attempt starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub username: String,
    pub password: String,
}

impl AdminLogin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
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

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start an attempt, or `None` when one is in flight or a field is empty.
    pub fn begin_submit(&mut self) -> Option<LoginAttempt> {
        if self.submitting {
            return None;
        }

        self.error = None;

        if self.username.is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS_MESSAGE.to_string());
            return None;
        }

        self.submitting = true;
        Some(LoginAttempt {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply the login answer. On success the credential is persisted and
    /// the listing route returned; nothing is stored on any failure.
    pub fn complete(
        &mut self,
        attempt: &LoginAttempt,
        result: ApiResult<Value>,
        store: &dyn SessionStore,
    ) -> Option<Route> {
        self.submitting = false;

        if let Err(e) = result {
            warn!("Admin login failed: {e}");
            let message = match e.kind() {
                FailureKind::Network => CONNECTION_FAILED_MESSAGE,
                FailureKind::Rejected | FailureKind::Decode => {
                    e.server_message().unwrap_or(LOGIN_FAILED_MESSAGE)
                }
            };
            self.error = Some(message.to_string());
            return None;
        }

        let credential = SessionCredential::from_login(&attempt.username, &attempt.password);
        if let Err(e) = store.write(&credential) {
            warn!("Could not persist admin session: {e}");
            self.error = Some(format!("Could not save session: {e}"));
            return None;
        }

        info!("Admin '{}' logged in", attempt.username);
        self.password.clear();
        Some(Route::AdminDashboard)
    }

    /// Validate, POST, persist on success. Returns where to navigate next.
    pub async fn submit(&mut self, api: &ApiClient, store: &dyn SessionStore) -> Option<Route> {
        let attempt = self.begin_submit()?;

        let result = api.admin_login(&attempt.username, &attempt.password).await;
        self.complete(&attempt, result, store)
    }
}
