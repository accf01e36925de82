// ============================================================================
// API CLIENT - HTTP communication only (stateless)
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};

use crate::config::CONFIG;
use crate::models::{Load, LoadData, LoadsResponse};

use super::{ApiError, AuthStore};

/// Single integration surface to the load backend.
///
/// Owns the base URL and the auth capability; everything else about the
/// transport is hidden from the views.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    auth: AuthStore,
}

impl ApiClient {
    pub fn new(auth: AuthStore) -> Self {
        Self::with_base_url(CONFIG.api_base_url.clone(), auth)
    }

    pub fn with_base_url(base_url: impl Into<String>, auth: AuthStore) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
        }
    }

    /// Attach `Authorization: Bearer <token>` when a token is stored.
    /// No token means the request goes out bare; a 401 then surfaces as an
    /// ordinary server error.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.auth.token() {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Fetch one page of loads. `page` is 1-indexed at this boundary.
    pub async fn list_loads(&self, page: u32, size: u32) -> Result<LoadsResponse, ApiError> {
        let url = format!("{}/loads?page={}&size={}", self.base_url, page, size);

        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(ApiError::Server { status, message });
        }

        response
            .json::<LoadsResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch a single load. A 404 is reported as [`ApiError::NotFound`].
    pub async fn get_load_by_id(&self, id: &str) -> Result<Load, ApiError> {
        let url = format!("{}/loads/{}", self.base_url, id);

        let response = self
            .authorize(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if response.status() == 404 {
            return Err(ApiError::NotFound);
        }

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(ApiError::Server { status, message });
        }

        response
            .json::<Load>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Submit a draft. The body is the draft as-is (no client-side schema
    /// validation); the server answers with the full record including the
    /// assigned id and timestamps.
    pub async fn create_load(&self, draft: &LoadData) -> Result<Load, ApiError> {
        let url = format!("{}/loads", self.base_url);

        log::info!("📦 Creating load (freight id: {})", draft.freight_load_id);

        let response = self
            .authorize(Request::post(&url))
            .json(draft)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| response.status_text());
            return Err(ApiError::Server { status, message });
        }

        let created = response
            .json::<Load>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        log::info!("✅ Load created: {}", created.id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_keeps_the_configured_base_url() {
        let client = ApiClient::with_base_url("https://api.example.test", AuthStore::new());
        assert_eq!(client.base_url, "https://api.example.test");
    }
}
