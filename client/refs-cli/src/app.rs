//! Routing shell.
//!
//! Resolves a path to a destination, builds that destination's view, and
//! follows redirects raised by the listing flow. The dashboard is never
//! shown without a fetch that the server accepted.

use crate::flows::{AdminListing, AdminLogin, ListingState, RegistrationForm};

use std::path::{Path, PathBuf};

use log::{debug, warn};
use refs_api::ApiClient;
use refs_config::Config;
use refs_core::{CoreResult, Route, SessionStore};

/// Redirects followed before giving up on a destination.
const MAX_REDIRECTS: usize = 4;

/// The view a destination renders.
#[derive(Debug)]
pub enum View {
    Landing(RegistrationForm),
    AdminLogin(AdminLogin),
    AdminDashboard(AdminListing),
}

/// Where navigation settled, with notices raised along the way.
#[derive(Debug)]
pub struct Screen {
    pub route: Route,
    pub view: View,
    pub notices: Vec<String>,
}

impl Screen {
    fn new(route: Route, view: View, notices: Vec<String>) -> Self {
        Self {
            route,
            view,
            notices,
        }
    }

    /// No error on the form, no redirect notice, and a dashboard that
    /// actually loaded.
    pub fn succeeded(&self) -> bool {
        if !self.notices.is_empty() {
            return false;
        }

        match &self.view {
            View::Landing(form) => form.error().is_none(),
            View::AdminLogin(form) => form.error().is_none(),
            View::AdminDashboard(listing) => {
                matches!(listing.state(), ListingState::Loaded(_))
            }
        }
    }
}

pub struct App<S> {
    api: ApiClient,
    store: S,
    date_format: String,
}

impl<S: SessionStore> App<S> {
    pub fn new(api: ApiClient, store: S, date_format: impl Into<String>) -> Self {
        Self {
            api,
            store,
            date_format: date_format.into(),
        }
    }

    pub fn from_config(config: &Config, store: S) -> Self {
        Self::new(
            ApiClient::from_config(config),
            store,
            config.display.date_format.clone(),
        )
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Navigate to a path. Unknown paths land on the landing page.
    pub async fn open(&self, path: &str) -> Screen {
        let resolved = Route::resolve(path);
        if resolved.redirected {
            debug!("Unknown path '{path}', redirecting to {}", Route::Landing.path());
        }

        self.enter(resolved.route).await
    }

    /// Enter a destination and follow any redirect it raises.
    pub async fn enter(&self, route: Route) -> Screen {
        let mut route = route;
        let mut notices = Vec::new();
        let mut hops = 0;

        loop {
            if hops > MAX_REDIRECTS {
                warn!("Too many redirects, settling on {}", Route::AdminLogin.path());
                return Screen::new(
                    Route::AdminLogin,
                    View::AdminLogin(AdminLogin::new()),
                    notices,
                );
            }

            match route {
                Route::Landing => {
                    return Screen::new(route, View::Landing(RegistrationForm::new()), notices);
                }
                Route::AdminLogin => {
                    return Screen::new(route, View::AdminLogin(AdminLogin::new()), notices);
                }
                Route::AdminDashboard => {
                    let mut listing = AdminListing::new(self.date_format.as_str());

                    match listing.mount(&self.api, &self.store).await {
                        Some(next) => {
                            debug!("Dashboard redirected to {}", next.path());
                            notices.extend(listing.notice().map(String::from));
                            route = next;
                            hops += 1;
                        }
                        None => {
                            return Screen::new(route, View::AdminDashboard(listing), notices);
                        }
                    }
                }
            }
        }
    }

    /// Submit the landing page form.
    pub async fn register(&self, email: &str) -> Screen {
        let mut form = RegistrationForm::with_email(email);
        form.submit(&self.api).await;

        Screen::new(Route::Landing, View::Landing(form), Vec::new())
    }

    /// Submit the login form; on success continue to the dashboard.
    pub async fn login(&self, username: &str, password: &str) -> Screen {
        let mut form = AdminLogin::with_credentials(username, password);

        match form.submit(&self.api, &self.store).await {
            Some(next) => self.enter(next).await,
            None => Screen::new(Route::AdminLogin, View::AdminLogin(form), Vec::new()),
        }
    }

    /// Clear the session and show the login page.
    pub async fn logout(&self) -> CoreResult<Screen> {
        let mut listing = AdminListing::new(self.date_format.as_str());
        let next = listing.logout(&self.store)?;

        Ok(self.enter(next).await)
    }

    /// Load the dashboard and write `registrations.csv` into `out_dir`.
    ///
    /// The path is `None` when the dashboard did not load or had no rows.
    pub async fn export(&self, out_dir: &Path) -> CoreResult<(Screen, Option<PathBuf>)> {
        let screen = self.enter(Route::AdminDashboard).await;

        let export = match &screen.view {
            View::AdminDashboard(listing) => listing.export(),
            _ => None,
        };

        let written = match export {
            Some(export) => Some(export.write_to_dir(out_dir)?),
            None => None,
        };

        Ok((screen, written))
    }
}
