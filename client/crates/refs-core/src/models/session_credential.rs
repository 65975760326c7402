use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Client-held proof of admin identity for the protected listing endpoint.
///
/// The value is `base64("username:password")`, sent verbatim as a basic-auth
/// header. Holding one does not mean it is still accepted by the server.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    /// Encode login input into a credential.
    pub fn from_login(username: &str, password: &str) -> Self {
        Self(STANDARD.encode(format!("{username}:{password}")))
    }

    /// Wrap a value previously read back from storage.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        format!("Basic {}", self.0)
    }
}

// Never print the encoded secret.
impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionCredential")
            .field(&"<redacted>")
            .finish()
    }
}
