pub(crate) mod login_request;
pub(crate) mod registration_request;
pub(crate) mod registration_response;
