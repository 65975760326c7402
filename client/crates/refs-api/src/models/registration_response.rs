use serde::Deserialize;

/// Body of a successful registration. Both fields are optional on the wire;
/// a 2xx with an empty or non-JSON body decodes to the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: Option<String>,
}
