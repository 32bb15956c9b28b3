//! # API Client
//!
//! HTTP client for the airdrop API.

use async_trait::async_trait;
use reqwest::Client;
use shared::{JoinAirdropRequest, JoinAirdropResponse};

use crate::config::SignupConfig;
use crate::error::{Result, SignupError};
use crate::services::SignupApi;

/// HTTP client for the airdrop API.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    join_path: String,
}

impl ApiClient {
    /// Create a client for `config.api_base`.
    ///
    /// Fails when the base URL is empty: outside a browser there is no page
    /// origin to resolve relative paths against.
    pub fn new(config: &SignupConfig) -> Result<Self> {
        if config.api_base.is_empty() {
            return Err(SignupError::Config(
                "api_base must be an absolute URL for the HTTP client".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| SignupError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base.clone(),
            join_path: config.join_path.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn join_path(&self) -> &str {
        &self.join_path
    }
}

#[async_trait(?Send)]
impl SignupApi for ApiClient {
    async fn join_airdrop(&self, request: &JoinAirdropRequest) -> Result<JoinAirdropResponse> {
        crate::api::signup::join_airdrop(self, request).await
    }
}
