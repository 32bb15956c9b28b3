//! # Validation Utilities
//!
//! Wallet-address shape checks shared by the submit gate and the live
//! per-keystroke feedback.
//!
//! The rule is deliberately loose: an address is accepted when it starts with
//! `0x` and is exactly [`WALLET_ADDRESS_LEN`] characters long. The character
//! set after the prefix is not inspected.

/// Required prefix of a wallet address.
pub const WALLET_ADDRESS_PREFIX: &str = "0x";

/// Total length of a wallet address, prefix included (`0x` + 40 hex digits).
pub const WALLET_ADDRESS_LEN: usize = 42;

/// Why a wallet address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletAddressError {
    /// Nothing was entered.
    Empty,
    /// Wrong prefix or wrong length.
    Malformed,
}

impl std::fmt::Display for WalletAddressError {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WalletAddressError::Empty => write!(fmt, "Wallet address is required"),
            WalletAddressError::Malformed => write!(
                fmt,
                "Invalid wallet address format. Must start with 0x and be 42 characters."
            ),
        }
    }
}

impl std::error::Error for WalletAddressError {}

/// Whether `address` is shaped like a wallet address.
///
/// ```rust
/// use lib_utils::validation::is_wallet_address_shape;
///
/// assert!(is_wallet_address_shape("0x1234567890123456789012345678901234567890"));
/// assert!(!is_wallet_address_shape("1x1234567890123456789012345678901234567890"));
/// assert!(!is_wallet_address_shape("0x123"));
/// ```
pub fn is_wallet_address_shape(address: &str) -> bool {
    address.starts_with(WALLET_ADDRESS_PREFIX) && address.chars().count() == WALLET_ADDRESS_LEN
}

/// Validate an already trimmed wallet address for submission.
pub fn validate_wallet_address(address: &str) -> Result<(), WalletAddressError> {
    if address.is_empty() {
        return Err(WalletAddressError::Empty);
    }
    if !is_wallet_address_shape(address) {
        return Err(WalletAddressError::Malformed);
    }
    Ok(())
}
