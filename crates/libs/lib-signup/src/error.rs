//! # Signup Error Types
//!
//! [`SignupError`] covers every failure the signup flow can observe. None of
//! them is fatal to the page: the controller turns each one into a status
//! message and returns to an idle state.
//!
//! ## Error Categories
//!
//! - **Validation**: the wallet address failed the local shape check
//! - **Api**: network failure, unreadable body, or a body that is not a join response
//! - **Storage**: the local key/value store refused a write
//! - **Navigation**: the follow-up page could not be opened
//! - **Config**: missing or invalid configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use lib_signup::error::{Result, SignupError};
//!
//! fn require_base(base: &str) -> Result<&str> {
//!     if base.is_empty() {
//!         return Err(SignupError::Config("api_base is empty".to_string()));
//!     }
//!     Ok(base)
//! }
//!
//! assert!(require_base("").is_err());
//! ```

use lib_utils::WalletAddressError;
use thiserror::Error;

/// Convenience type alias for `Result<T, SignupError>`.
pub type Result<T> = std::result::Result<T, SignupError>;

/// Error type for the signup flow.
#[derive(Debug, Error)]
pub enum SignupError {
    /// Local wallet-address validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] WalletAddressError),

    /// Join request failed or its response could not be read.
    #[error("API error: {0}")]
    Api(String),

    /// Writing to the local key/value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Navigating to the follow-up page failed.
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SignupError {
    fn from(err: serde_json::Error) -> Self {
        SignupError::Api(format!("JSON error: {}", err))
    }
}

impl From<lib_utils::envs::Error> for SignupError {
    fn from(err: lib_utils::envs::Error) -> Self {
        SignupError::Config(err.to_string())
    }
}

#[cfg(feature = "http-client")]
impl From<reqwest::Error> for SignupError {
    fn from(err: reqwest::Error) -> Self {
        SignupError::Api(format!("Network error: {}", err))
    }
}
