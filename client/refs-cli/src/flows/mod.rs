//! The three user-facing flows. Each keeps its own view state and talks to
//! the backend through [`refs_api::ApiClient`]; the admin flows also take the
//! session store they should use.

pub mod admin_listing;
pub mod admin_login;
pub mod registration_form;

pub use admin_listing::{AdminListing, ListingState, MountStep};
pub use admin_login::{AdminLogin, LoginAttempt};
pub use registration_form::RegistrationForm;
