//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged between the signup front ends and the airdrop API.
//!
//! ## Module Organization
//!
//! - [`signup`] - Join-airdrop request and response bodies
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional response fields**: default to `None` when the server omits them
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /join-airdrop
//! Content-Type: application/json
//!
//! {
//!   "wallet_address": "0x1234567890123456789012345678901234567890",
//!   "email": "alice@example.com",
//!   "twitter_handle": "@alice",
//!   "referral_code": ""
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "message": "Successfully joined airdrop! Redirecting to tasks...",
//!   "referral_code": "K3J9QZ2M"
//! }
//! ```

pub mod signup;

pub use signup::*;
