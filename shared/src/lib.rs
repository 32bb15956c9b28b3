//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the signup front ends (browser and
//! CLI) and the airdrop API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::signup`]**: Join-airdrop request and response
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::signup::{JoinAirdropRequest, JoinAirdropResponse};
//! use shared::utils::truncate_address;
//!
//! let request = JoinAirdropRequest {
//!     wallet_address: "0x1234567890123456789012345678901234567890".to_string(),
//!     ..Default::default()
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("\"wallet_address\""));
//!
//! let response: JoinAirdropResponse =
//!     serde_json::from_str(r#"{"success": true, "message": "Welcome"}"#).unwrap();
//! assert!(response.success);
//!
//! assert_eq!(truncate_address(&request.wallet_address), "0x1234...7890");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
