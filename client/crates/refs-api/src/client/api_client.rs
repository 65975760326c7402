use crate::{
    ApiResult, ClientError, LoginRequest, RegistrationRequest, RegistrationResponse,
};

use log::debug;
use refs_core::{RegistrationRecord, SessionCredential};
use reqwest::{Client as ReqwestClient, Method, header::AUTHORIZATION};
use serde_json::Value;

pub const ADMIN_LOGIN_PATH: &str = "/api/admin/login";
pub const ADMIN_REGISTRATIONS_PATH: &str = "/api/admin/registrations";

/// HTTP client for the pre-registration backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub base_url: String,
    pub registration_path: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8080")
    /// * `registration_path` - Registration endpoint relative to `base_url`
    pub fn new(base_url: &str, registration_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            registration_path: registration_path.to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &refs_config::Config) -> Self {
        Self::new(&config.api.base_url, &config.api.registration_path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        self.client.request(method, &url)
    }

    /// Send and return the raw body of a 2xx response.
    ///
    /// Non-2xx becomes `Rejected` carrying the body's `message` when there is
    /// one; bodies that are empty or not JSON just leave it unset.
    async fn execute(&self, req: reqwest::RequestBuilder) -> ApiResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("Request rejected with status {status}");
            return Err(ClientError::rejected(
                status.as_u16(),
                extract_message(&body),
            ));
        }

        Ok(body)
    }

    // =========================================================================
    // Public Operations
    // =========================================================================

    /// Submit an email for pre-registration
    pub async fn preregister(&self, email: &str) -> ApiResult<RegistrationResponse> {
        let body = RegistrationRequest { email };
        let req = self
            .request(Method::POST, &self.registration_path)
            .json(&body);
        let text = self.execute(req).await?;

        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    /// Check admin credentials. The success body is opaque.
    pub async fn admin_login(&self, username: &str, password: &str) -> ApiResult<Value> {
        let body = LoginRequest { username, password };
        let req = self.request(Method::POST, ADMIN_LOGIN_PATH).json(&body);
        let text = self.execute(req).await?;

        Ok(serde_json::from_str(&text).unwrap_or(Value::Null))
    }

    /// List every registration, in server order
    pub async fn list_registrations(
        &self,
        credential: &SessionCredential,
    ) -> ApiResult<Vec<RegistrationRecord>> {
        let req = self
            .request(Method::GET, ADMIN_REGISTRATIONS_PATH)
            .header(AUTHORIZATION, credential.authorization_header());
        let text = self.execute(req).await?;

        Ok(serde_json::from_str(&text)?)
    }
}

/// Pull `message` (or `error.message`) out of an error body.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    value
        .get("message")
        .or_else(|| value.get("error").and_then(|e| e.get("message")))
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
}
