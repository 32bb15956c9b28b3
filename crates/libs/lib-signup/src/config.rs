//! # Signup Configuration
//!
//! Endpoint paths, the storage key and the two deferred-action delays.
//!
//! [`SignupConfig::default()`] carries the values the signup page has always
//! used and an empty `api_base`, which keeps every URL relative to the page's
//! own origin. Native front ends call [`SignupConfig::from_env()`] instead.
//!
//! ## Environment Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `SIGNUP_API_BASE` | `http://127.0.0.1:5000` |
//! | `SIGNUP_REDIRECT_DELAY_MS` | `2000` |
//! | `SIGNUP_SUCCESS_CLEAR_MS` | `5000` |
//! | `SIGNUP_REQUEST_TIMEOUT_SECS` | `10` |

use std::time::Duration;

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::error::{Result, SignupError};

/// Base URL used by native front ends when `SIGNUP_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

pub const DEFAULT_JOIN_PATH: &str = "/join-airdrop";
pub const DEFAULT_TASKS_PATH: &str = "/tasks";
pub const DEFAULT_STORAGE_KEY: &str = "walletAddress";

pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 2000;
pub const DEFAULT_SUCCESS_CLEAR_MS: u64 = 5000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Signup flow configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupConfig {
    /// Origin of the airdrop API, without trailing slash. Empty means same-origin.
    pub api_base: String,

    /// Path of the join endpoint
    pub join_path: String,

    /// Path of the follow-up page
    pub tasks_path: String,

    /// Local storage key holding the accepted wallet address
    pub storage_key: String,

    /// Delay between a successful join and the navigation to the tasks page
    pub redirect_delay: Duration,

    /// Lifetime of a success status message
    pub success_clear_delay: Duration,

    /// Per-request timeout of the native HTTP client
    pub request_timeout: Duration,
}

impl Default for SignupConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            join_path: DEFAULT_JOIN_PATH.to_string(),
            tasks_path: DEFAULT_TASKS_PATH.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            redirect_delay: Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
            success_clear_delay: Duration::from_millis(DEFAULT_SUCCESS_CLEAR_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SignupConfig {
    /// Load configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self> {
        let api_base = get_env_or("SIGNUP_API_BASE", DEFAULT_API_BASE)
            .trim()
            .trim_end_matches('/')
            .to_string();

        let redirect_ms = get_env_parse_or("SIGNUP_REDIRECT_DELAY_MS", DEFAULT_REDIRECT_DELAY_MS)?;
        let clear_ms = get_env_parse_or("SIGNUP_SUCCESS_CLEAR_MS", DEFAULT_SUCCESS_CLEAR_MS)?;
        let timeout_secs = get_env_parse_or("SIGNUP_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        let config = Self {
            api_base,
            redirect_delay: Duration::from_millis(redirect_ms),
            success_clear_delay: Duration::from_millis(clear_ms),
            request_timeout: Duration::from_secs(timeout_secs),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Check paths, the storage key and the API base.
    pub fn validate(&self) -> Result<()> {
        if !self.api_base.is_empty()
            && !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://"))
        {
            return Err(SignupError::Config(format!(
                "api_base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }

        for (name, path) in [("join_path", &self.join_path), ("tasks_path", &self.tasks_path)] {
            if !path.starts_with('/') {
                return Err(SignupError::Config(format!("{} must start with '/'", name)));
            }
        }

        if self.storage_key.trim().is_empty() {
            return Err(SignupError::Config("storage_key cannot be empty".to_string()));
        }

        if self.request_timeout.is_zero() {
            return Err(SignupError::Config("request timeout must be greater than zero".to_string()));
        }

        Ok(())
    }

    /// Full URL of the join endpoint.
    pub fn join_url(&self) -> String {
        format!("{}{}", self.api_base, self.join_path)
    }

    /// Follow-up page for `wallet_address`, with the address URL-encoded.
    ///
    /// Always relative: navigation happens within the page's origin.
    pub fn tasks_url(&self, wallet_address: &str) -> String {
        format!("{}?wallet={}", self.tasks_path, urlencoding::encode(wallet_address))
    }
}
