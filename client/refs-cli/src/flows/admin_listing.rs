use log::{debug, info, warn};
use refs_api::{ApiClient, ApiResult, FailureKind};
use refs_core::{CoreResult, CsvExport, RegistrationRecord, Route, SessionCredential, SessionStore};

pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please log in again.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from server.";

/// Lifecycle of the admin table.
///
/// Starts `Unauthenticated`; a stored credential moves it to `Loading`, and
/// the fetch settles it in `Loaded`, back in `Unauthenticated { expired: true }`
/// when the server refuses the credential, or in `Failed` when the request
/// never got an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingState {
    Unauthenticated { expired: bool },
    Loading,
    Loaded(Vec<RegistrationRecord>),
    Failed,
}

/// What `begin_mount` decided.
#[derive(Debug, PartialEq, Eq)]
pub enum MountStep {
    /// No session: go here without fetching anything.
    Redirect(Route),
    /// Fetch the listing with this credential.
    Fetch(SessionCredential),
}

#[derive(Debug)]
pub struct AdminListing {
    state: ListingState,
    notice: Option<String>,
    date_format: String,
}

impl AdminListing {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            state: ListingState::Unauthenticated { expired: false },
            notice: None,
            date_format: date_format.into(),
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Transient message for the user (expiry, network trouble).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Loaded records, empty in every other state.
    pub fn records(&self) -> &[RegistrationRecord] {
        match &self.state {
            ListingState::Loaded(records) => records,
            _ => &[],
        }
    }

    /// Check for a stored credential. Storage that cannot be read counts as
    /// no session; it is not cleared.
    pub fn begin_mount(&mut self, store: &dyn SessionStore) -> MountStep {
        self.notice = None;

        let credential = match store.read() {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Could not read admin session: {e}");
                None
            }
        };

        match credential {
            Some(credential) => {
                self.state = ListingState::Loading;
                MountStep::Fetch(credential)
            }
            None => {
                debug!("No admin session, redirecting to login");
                self.state = ListingState::Unauthenticated { expired: false };
                MountStep::Redirect(Route::AdminLogin)
            }
        }
    }

    /// Apply the listing answer. Only a server rejection clears the session.
    pub fn complete_mount(
        &mut self,
        result: ApiResult<Vec<RegistrationRecord>>,
        store: &dyn SessionStore,
    ) -> Option<Route> {
        match result {
            Ok(records) => {
                info!("Loaded {} registrations", records.len());
                self.state = ListingState::Loaded(records);
                None
            }
            Err(e) => match e.kind() {
                FailureKind::Rejected => {
                    warn!("Admin session rejected: {e}");
                    if let Err(clear_err) = store.clear() {
                        warn!("Could not clear rejected session: {clear_err}");
                    }
                    self.state = ListingState::Unauthenticated { expired: true };
                    self.notice = Some(SESSION_EXPIRED_MESSAGE.to_string());
                    Some(Route::AdminLogin)
                }
                FailureKind::Network => {
                    warn!("Listing fetch failed: {e}");
                    self.state = ListingState::Failed;
                    self.notice = Some(NETWORK_ERROR_MESSAGE.to_string());
                    None
                }
                FailureKind::Decode => {
                    warn!("Listing response malformed: {e}");
                    self.state = ListingState::Failed;
                    self.notice = Some(UNEXPECTED_RESPONSE_MESSAGE.to_string());
                    None
                }
            },
        }
    }

    /// Enter the view. Returns a redirect when the user must log in.
    pub async fn mount(&mut self, api: &ApiClient, store: &dyn SessionStore) -> Option<Route> {
        match self.begin_mount(store) {
            MountStep::Redirect(route) => Some(route),
            MountStep::Fetch(credential) => {
                let result = api.list_registrations(&credential).await;
                self.complete_mount(result, store)
            }
        }
    }

    /// Drop the session regardless of state and head back to login.
    pub fn logout(&mut self, store: &dyn SessionStore) -> CoreResult<Route> {
        store.clear()?;
        info!("Admin logged out");

        self.state = ListingState::Unauthenticated { expired: false };
        self.notice = None;
        Ok(Route::AdminLogin)
    }

    /// CSV of the loaded records, `None` when there is nothing to export.
    pub fn export(&self) -> Option<CsvExport> {
        CsvExport::build(self.records(), |record| {
            record.format_created_at(&self.date_format)
        })
    }
}
