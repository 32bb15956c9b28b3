//! # Join Endpoint
//!
//! `POST /join-airdrop`.

use shared::{truncate_address, JoinAirdropRequest, JoinAirdropResponse};

use super::client::ApiClient;
use crate::error::{Result, SignupError};

/// Submit a join request.
///
/// The body is parsed whatever the status code: the endpoint reports refusals
/// in-band as `success: false`.
#[tracing::instrument(skip_all, fields(wallet = %truncate_address(&request.wallet_address)))]
pub async fn join_airdrop(client: &ApiClient, request: &JoinAirdropRequest) -> Result<JoinAirdropResponse> {
    let start = std::time::Instant::now();
    let url = client.url(client.join_path());

    let response = client
        .client
        .post(&url)
        .json(request)
        .send()
        .await
        .inspect_err(|e| tracing::error!(error = %e, url = %url, "Join network error"))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        tracing::error!(status = status.as_u16(), error = %e, "Join response read error");
        SignupError::Api(format!("Failed to read response: {}", e))
    })?;

    let result = serde_json::from_str::<JoinAirdropResponse>(&body).map_err(|e| {
        tracing::error!(status = status.as_u16(), error = %e, "Join response parse error");
        SignupError::Api(format!("Failed to parse response: {}", e))
    })?;

    tracing::info!(
        status = status.as_u16(),
        success = result.success,
        duration_ms = start.elapsed().as_millis() as u64,
        "Join response received"
    );
    Ok(result)
}
