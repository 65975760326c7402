pub mod registration_record;
pub mod session_credential;
