// ============================================================================
// API CLIENT - HTTP ONLY (stateless)
// ============================================================================
// No business logic here. The session token travels with every call instead
// of living in a shared default header.
// ============================================================================

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::error::{ApiError, RequestFailure};
use crate::models::{
    CheckSessionResponse, Credentials, Product, ProductsResponse, SessionToken, SignInGrant,
    SignInResponse,
};

const AUTHORIZATION: &str = "Authorization";

/// Operations the console needs from the product-management API
pub trait ProductApi {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInGrant, ApiError>;

    /// `Ok(false)` means the server answered but does not recognise the token
    async fn check_session(&self, token: &SessionToken) -> Result<bool, ApiError>;

    async fn list_products(&self, token: &SessionToken) -> Result<Vec<Product>, ApiError>;
}

/// Endpoint URLs derived from the configured origin and API path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    api_path: String,
}

impl Endpoints {
    pub fn new(base_url: &str, api_path: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_path: api_path.trim_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.base_url, &config.api_path)
    }

    pub fn sign_in(&self) -> String {
        format!("{}/v2/admin/signin", self.base_url)
    }

    pub fn check_session(&self) -> String {
        format!("{}/v2/api/user/check", self.base_url)
    }

    pub fn admin_products(&self) -> String {
        format!("{}/v2/api/{}/admin/products", self.base_url, self.api_path)
    }
}

/// API client over `gloo-net` (browser fetch)
#[derive(Clone, Debug)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoints: Endpoints::from_config(config),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&crate::config::CONFIG)
    }
}

impl ProductApi for ApiClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<SignInGrant, ApiError> {
        let url = self.endpoints.sign_in();
        log::info!("🔐 [API] Signing in as {}", credentials.username);

        let response = Request::post(&url)
            .json(credentials)
            .map_err(|e| ApiError::Auth(RequestFailure::Parse(e.to_string())))?
            .send()
            .await
            .map_err(|e| ApiError::Auth(RequestFailure::Network(e.to_string())))?;

        let body: SignInResponse = read_json(response).await.map_err(ApiError::Auth)?;
        log::info!("✅ [API] Sign-in accepted");
        Ok(body.into_grant())
    }

    async fn check_session(&self, token: &SessionToken) -> Result<bool, ApiError> {
        let url = self.endpoints.check_session();

        let response = Request::post(&url)
            .header(AUTHORIZATION, &token.value)
            .send()
            .await
            .map_err(|e| ApiError::Session(RequestFailure::Network(e.to_string())))?;

        let body: CheckSessionResponse = read_json(response).await.map_err(ApiError::Session)?;
        log::info!("🔎 [API] Session check: success={}", body.success);
        Ok(body.success)
    }

    async fn list_products(&self, token: &SessionToken) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoints.admin_products();

        let response = Request::get(&url)
            .header(AUTHORIZATION, &token.value)
            .send()
            .await
            .map_err(|e| ApiError::Fetch(RequestFailure::Network(e.to_string())))?;

        let body: ProductsResponse = read_json(response).await.map_err(ApiError::Fetch)?;
        log::info!("📦 [API] {} products received", body.products.len());
        Ok(body.products)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestFailure> {
    if !response.ok() {
        return Err(RequestFailure::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| RequestFailure::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_follow_api_layout() {
        let endpoints = Endpoints::new("https://api.example.com/", "/shop-path/");

        assert_eq!(endpoints.sign_in(), "https://api.example.com/v2/admin/signin");
        assert_eq!(endpoints.check_session(), "https://api.example.com/v2/api/user/check");
        assert_eq!(
            endpoints.admin_products(),
            "https://api.example.com/v2/api/shop-path/admin/products"
        );
    }

    #[test]
    fn client_uses_configured_origin() {
        let config = AppConfig {
            base_url: "http://localhost:3000".to_string(),
            api_path: "demo".to_string(),
            ..AppConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(
            client.endpoints().admin_products(),
            "http://localhost:3000/v2/api/demo/admin/products"
        );
    }
}
