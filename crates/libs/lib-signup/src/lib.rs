//! # Signup Library
//!
//! Platform-neutral core of the airdrop signup flow: wallet validation,
//! submission, status messages, local persistence of the accepted wallet and
//! the deferred hand-off to the tasks page.
//!
//! ## Structure
//!
//! - [`controller`]: The [`SignupController`](controller::SignupController) state machine
//! - [`services`]: Collaborator traits injected through [`SignupContext`](services::SignupContext)
//! - [`status`]: Status messages and the success auto-clear
//! - [`form`]: Form snapshot and live wallet-field feedback
//! - [`config`]: Endpoint paths, storage key and timings
//! - [`error`]: [`SignupError`](error::SignupError)
//! - `api` (feature `http-client`): reqwest implementation of [`SignupApi`](services::SignupApi)
//!
//! Everything here is single-threaded: collaborators are shared through `Rc`
//! and the API trait does not require `Send`, so the same controller runs in
//! the browser and on a tokio current-thread runtime.

#[cfg(feature = "http-client")]
pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod services;
pub mod status;

#[cfg(test)]
pub(crate) mod testing;

pub use config::SignupConfig;
pub use controller::{SignupController, SubmitOutcome, SubmitPhase};
pub use error::{Result, SignupError};
pub use form::{FieldState, FormSnapshot, SignupForm};
pub use services::{KeyValueStore, Navigator, Scheduler, SignupApi, SignupContext};
pub use status::{Severity, StatusBoard, StatusMessage, StatusSink};
