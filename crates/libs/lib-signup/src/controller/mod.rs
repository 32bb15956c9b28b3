//! # Signup Controller
//!
//! Drives one signup attempt from form values to the tasks page:
//!
//! ```text
//! Idle ──invalid wallet──▶ Idle            (error status, no request)
//! Idle ──valid wallet────▶ Submitting      ("Submitting..." info status, POST)
//! Submitting ──success───▶ Succeeded       (success status, store wallet,
//!                                           schedule redirect, reset form)
//! Submitting ──declined──▶ Failed          (server message as error)
//! Submitting ──error─────▶ Failed          (connection error message)
//! ```
//!
//! `Succeeded` and `Failed` behave like `Idle` for the next submit. A submit
//! arriving while a request is in flight is ignored.

use std::cell::Cell;
use std::rc::Rc;

use lib_utils::{validate_wallet_address, WalletAddressError};
use shared::{truncate_address, JoinAirdropRequest, JoinAirdropResponse};

use crate::config::SignupConfig;
use crate::error::SignupError;
use crate::form::{wallet_field_state, FieldState, SignupForm};
use crate::services::{KeyValueStore, Navigator, Scheduler, SignupApi, SignupContext};
use crate::status::{Severity, StatusBoard};


pub const SUBMITTING_MESSAGE: &str = "Submitting...";
pub const CONNECTION_ERROR_MESSAGE: &str =
    "Error connecting to server. Please check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of one call to [`SignupController::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The wallet address failed local validation; nothing was sent.
    Rejected(WalletAddressError),
    /// A previous submission is still in flight; nothing was sent.
    Busy,
    /// The server accepted the signup.
    Joined(JoinAirdropResponse),
    /// The server answered with `success: false`.
    Declined(JoinAirdropResponse),
    /// The request failed or the answer was unreadable.
    Unreachable(SignupError),
}

impl SubmitOutcome {
    pub fn is_joined(&self) -> bool {
        matches!(self, SubmitOutcome::Joined(_))
    }
}

pub struct SignupController<A> {
    api: A,
    form: Rc<dyn SignupForm>,
    storage: Rc<dyn KeyValueStore>,
    navigator: Rc<dyn Navigator>,
    scheduler: Rc<dyn Scheduler>,
    status: StatusBoard,
    config: SignupConfig,
    phase: Cell<SubmitPhase>,
}

impl<A: SignupApi> SignupController<A> {
    pub fn new(api: A, ctx: SignupContext, config: SignupConfig) -> Self {
        let status = StatusBoard::new(ctx.status, Rc::clone(&ctx.scheduler), config.success_clear_delay);
        Self {
            api,
            form: ctx.form,
            storage: ctx.storage,
            navigator: ctx.navigator,
            scheduler: ctx.scheduler,
            status,
            config,
            phase: Cell::new(SubmitPhase::Idle),
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    pub fn config(&self) -> &SignupConfig {
        &self.config
    }

    /// Live feedback for the wallet input; call on every change.
    pub fn on_wallet_input(&self, raw: &str) -> FieldState {
        let state = wallet_field_state(raw);
        self.form.mark_wallet_field(state);
        state
    }

    /// Validate the form, submit it and apply the outcome.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.phase.get() == SubmitPhase::Submitting {
            tracing::warn!("Submit ignored: a join request is already in flight");
            return SubmitOutcome::Busy;
        }

        let request = self.form.snapshot().to_request();

        if let Err(err) = validate_wallet_address(&request.wallet_address) {
            tracing::debug!(error = %err, "Wallet address rejected");
            self.status.show(err.to_string(), Severity::Error);
            self.phase.set(SubmitPhase::Idle);
            return SubmitOutcome::Rejected(err);
        }

        let wallet = truncate_address(&request.wallet_address);
        tracing::info!(wallet = %wallet, "Submitting join request");

        self.status.show(SUBMITTING_MESSAGE, Severity::Info);
        self.phase.set(SubmitPhase::Submitting);

        match self.api.join_airdrop(&request).await {
            Ok(response) if response.success => {
                tracing::info!(
                    wallet = %wallet,
                    referral_code = response.referral_code.as_deref().unwrap_or(""),
                    "Joined airdrop"
                );
                self.status.show(response.message.clone(), Severity::Success);
                self.complete_signup(&request);
                self.phase.set(SubmitPhase::Succeeded);
                SubmitOutcome::Joined(response)
            }
            Ok(response) => {
                tracing::warn!(wallet = %wallet, message = %response.message, "Join declined");
                self.status.show(response.message.clone(), Severity::Error);
                self.phase.set(SubmitPhase::Failed);
                SubmitOutcome::Declined(response)
            }
            Err(err) => {
                tracing::error!(wallet = %wallet, error = %err, "Join request failed");
                self.status.show(CONNECTION_ERROR_MESSAGE, Severity::Error);
                self.phase.set(SubmitPhase::Failed);
                SubmitOutcome::Unreachable(err)
            }
        }
    }

    /// Persist the wallet, schedule the redirect and clear the form.
    fn complete_signup(&self, request: &JoinAirdropRequest) {
        if let Err(err) = self
            .storage
            .set_item(&self.config.storage_key, &request.wallet_address)
        {
            tracing::warn!(error = %err, key = %self.config.storage_key, "Could not persist wallet address");
        }

        let url = self.config.tasks_url(&request.wallet_address);
        let navigator = Rc::clone(&self.navigator);
        self.scheduler.schedule(
            self.config.redirect_delay,
            Box::new(move || {
                if let Err(err) = navigator.navigate(&url) {
                    tracing::error!(error = %err, url = %url, "Redirect to tasks page failed");
                }
            }),
        );

        self.form.reset();
    }
}
