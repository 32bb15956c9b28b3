//! # Shared Utility Functions
//!
//! Helpers used by the signup library and both front ends.
//!
//! ## Address Formatting
//!
//! Wallet addresses are long hex strings; log lines and compact UI labels show
//! a shortened form:
//! - [`format_address`] - Keep the first N and last M characters
//! - [`truncate_address`] - `0x` plus four characters on each side
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xAbCdEf0123456789aBcDeF0123456789AbCdEf01";
//! assert_eq!(format_address(address, 6, 4), "0xAbCd...Ef01");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
/// Lengths count characters, so arbitrary user input never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x1234567890123456789012345678901234567890";
/// assert_eq!(format_address(addr, 6, 4), "0x1234...7890");
/// assert_eq!(format_address(addr, 2, 2), "0x...90");
/// assert_eq!(format_address("0xabc", 4, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address keeping the `0x` prefix plus four characters on each side.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x1234567890123456789012345678901234567890";
/// assert_eq!(truncate_address(addr), "0x1234...7890");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
