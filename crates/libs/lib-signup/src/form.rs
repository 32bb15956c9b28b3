//! # Signup Form
//!
//! The four inputs of the signup form and the live feedback on the wallet field.

use lib_utils::is_wallet_address_shape;
use shared::JoinAirdropRequest;

/// Raw values of the form inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub wallet_address: String,
    pub email: String,
    pub twitter_handle: String,
    pub referral_code: String,
}

impl FormSnapshot {
    /// Build the join payload with every field trimmed.
    pub fn to_request(&self) -> JoinAirdropRequest {
        JoinAirdropRequest {
            wallet_address: self.wallet_address.trim().to_string(),
            email: self.email.trim().to_string(),
            twitter_handle: self.twitter_handle.trim().to_string(),
            referral_code: self.referral_code.trim().to_string(),
        }
    }
}

/// Visual state of the wallet input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Neutral,
    Invalid,
}

impl FieldState {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldState::Invalid)
    }
}

/// Feedback for the wallet input while typing.
///
/// Uses the raw value: surrounding whitespace counts against the length, as it
/// would be visible in the field. An empty field is never flagged.
pub fn wallet_field_state(raw: &str) -> FieldState {
    if !raw.is_empty() && !is_wallet_address_shape(raw) {
        FieldState::Invalid
    } else {
        FieldState::Neutral
    }
}

/// Form bound to the controller.
pub trait SignupForm {
    /// Current values of all inputs.
    fn snapshot(&self) -> FormSnapshot;

    /// Clear every input.
    fn reset(&self);

    /// Apply the wallet input's visual state.
    fn mark_wallet_field(&self, state: FieldState);
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "0x1234567890123456789012345678901234567890";

    #[test]
    fn test_wallet_field_state() {
        assert_eq!(wallet_field_state(""), FieldState::Neutral);
        assert_eq!(wallet_field_state("0x12"), FieldState::Invalid);
        assert_eq!(wallet_field_state("hello"), FieldState::Invalid);
        assert_eq!(wallet_field_state(VALID), FieldState::Neutral);
    }

    #[test]
    fn test_wallet_field_state_untrimmed() {
        assert_eq!(wallet_field_state(&format!(" {VALID} ")), FieldState::Invalid);
    }

    #[test]
    fn test_to_request_trims() {
        let snapshot = FormSnapshot {
            wallet_address: format!("  {VALID}\n"),
            email: " alice@example.com ".to_string(),
            twitter_handle: "\t@alice".to_string(),
            referral_code: String::new(),
        };

        let request = snapshot.to_request();
        assert_eq!(request.wallet_address, VALID);
        assert_eq!(request.email, "alice@example.com");
        assert_eq!(request.twitter_handle, "@alice");
        assert_eq!(request.referral_code, "");
    }
}
