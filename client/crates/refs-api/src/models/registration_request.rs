use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegistrationRequest<'a> {
    pub email: &'a str,
}
