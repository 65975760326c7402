//! refs-api
//!
//! HTTP client for the pre-registration backend. Every call returns a
//! tagged result: the success payload, or a [`ClientError`] whose
//! [`FailureKind`] tells network trouble apart from a server rejection.

pub(crate) mod client;
pub(crate) mod models;


pub use client::{ADMIN_LOGIN_PATH, ADMIN_REGISTRATIONS_PATH, ApiClient};
pub use client::{ApiResult, ClientError, FailureKind};
pub use models::login_request::LoginRequest;
pub use models::registration_request::RegistrationRequest;
pub use models::registration_response::RegistrationResponse;
