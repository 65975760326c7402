pub(crate) mod api_client;
pub(crate) mod error;

pub use api_client::{ADMIN_LOGIN_PATH, ADMIN_REGISTRATIONS_PATH, ApiClient};
pub use error::{ClientError, FailureKind, Result as ApiResult};
