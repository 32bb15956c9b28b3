//! Signup form state
//!
//! Reactive mirror of the form inputs, the wallet-field marker and the status
//! line. The controller reads and writes it through [`SignupForm`] and
//! [`StatusSink`]; the page renders from the same signals.

use leptos::prelude::*;
use lib_signup::{FieldState, FormSnapshot, SignupForm, StatusMessage, StatusSink};

#[derive(Clone, Copy)]
pub struct SignupState {
    pub wallet_address: RwSignal<String>,
    pub email: RwSignal<String>,
    pub twitter_handle: RwSignal<String>,
    pub referral_code: RwSignal<String>,
    pub wallet_field: RwSignal<FieldState>,
    pub status: RwSignal<Option<StatusMessage>>,
}

impl SignupState {
    pub fn new() -> Self {
        Self {
            wallet_address: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            twitter_handle: RwSignal::new(String::new()),
            referral_code: RwSignal::new(String::new()),
            wallet_field: RwSignal::new(FieldState::Neutral),
            status: RwSignal::new(None),
        }
    }

    /// CSS class of the status element: the severity tag, or nothing.
    pub fn status_class(&self) -> &'static str {
        self.status
            .with(|status| status.as_ref().map(|m| m.severity.as_str()).unwrap_or(""))
    }

    pub fn status_text(&self) -> String {
        self.status
            .with(|status| status.as_ref().map(|m| m.text.clone()).unwrap_or_default())
    }
}

impl Default for SignupState {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupForm for SignupState {
    fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            wallet_address: self.wallet_address.get_untracked(),
            email: self.email.get_untracked(),
            twitter_handle: self.twitter_handle.get_untracked(),
            referral_code: self.referral_code.get_untracked(),
        }
    }

    fn reset(&self) {
        self.wallet_address.set(String::new());
        self.email.set(String::new());
        self.twitter_handle.set(String::new());
        self.referral_code.set(String::new());
        self.wallet_field.set(FieldState::Neutral);
    }

    fn mark_wallet_field(&self, state: FieldState) {
        self.wallet_field.set(state);
    }
}

impl StatusSink for SignupState {
    fn render(&self, status: Option<&StatusMessage>) {
        self.status.set(status.cloned());
    }
}
