//! Join endpoint over `fetch`

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_signup::{SignupApi, SignupError};
use shared::{JoinAirdropRequest, JoinAirdropResponse};

/// Posts join requests with gloo-net.
pub struct BrowserApi {
    join_url: String,
}

impl BrowserApi {
    pub fn new(join_url: impl Into<String>) -> Self {
        Self {
            join_url: join_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl SignupApi for BrowserApi {
    async fn join_airdrop(&self, request: &JoinAirdropRequest) -> lib_signup::Result<JoinAirdropResponse> {
        let response = Request::post(&self.join_url)
            .json(request)
            .map_err(|e| SignupError::Api(format!("Failed to encode request: {}", e)))?
            .send()
            .await
            .map_err(|e| SignupError::Api(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SignupError::Api(format!("Failed to read response: {}", e)))?;

        // Declined joins may come back with any status; the body decides.
        let parsed: JoinAirdropResponse = serde_json::from_str(&body)?;
        log::debug!("Join response: status={} success={}", status, parsed.success);
        Ok(parsed)
    }
}
