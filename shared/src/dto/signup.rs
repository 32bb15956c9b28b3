//! # Signup Data Transfer Objects
//!
//! Request and response bodies of the `/join-airdrop` endpoint.

use serde::{Deserialize, Serialize};

/// Join-airdrop request body.
///
/// Every field is a plain string; empty strings are sent as-is for the
/// optional inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinAirdropRequest {
    pub wallet_address: String,
    pub email: String,
    pub twitter_handle: String,
    pub referral_code: String,
}

/// Join-airdrop response body.
///
/// Failures are reported in-band with `success: false`, usually with a
/// 200 status code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JoinAirdropResponse {
    pub success: bool,
    /// Absent on some successful answers; the outcome rests on `success` alone
    #[serde(default)]
    pub message: String,
    /// Referral code assigned to the newly registered wallet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

impl JoinAirdropResponse {
    pub fn joined(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            referral_code: None,
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            referral_code: None,
        }
    }
}
