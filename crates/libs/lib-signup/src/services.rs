//! # Service Traits
//!
//! Collaborators of the signup controller, injected so the flow runs the same
//! in the browser, in the CLI and under test.
//!
//! None of the traits require `Send`: the flow is single-threaded and browser
//! handles (fetch futures, storage, timers) are not thread-safe.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use shared::{JoinAirdropRequest, JoinAirdropResponse};

use crate::error::Result;
use crate::form::SignupForm;
use crate::status::StatusSink;

/// Remote join endpoint.
#[async_trait(?Send)]
pub trait SignupApi {
    /// Submit a join request and return the parsed response body.
    ///
    /// A response with `success: false` is `Ok`; only transport and parse
    /// failures are errors.
    async fn join_airdrop(&self, request: &JoinAirdropRequest) -> Result<JoinAirdropResponse>;
}

/// Durable client-local key/value storage.
pub trait KeyValueStore {
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// Full-page navigation.
pub trait Navigator {
    /// Navigate to `url`, relative to the page origin.
    fn navigate(&self, url: &str) -> Result<()>;
}

/// Deferred, fire-and-forget tasks.
pub trait Scheduler {
    /// Run `task` once after `delay`. Scheduled tasks cannot be cancelled.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

/// Everything the controller touches outside itself.
#[derive(Clone)]
pub struct SignupContext {
    pub form: Rc<dyn SignupForm>,
    pub status: Rc<dyn StatusSink>,
    pub storage: Rc<dyn KeyValueStore>,
    pub navigator: Rc<dyn Navigator>,
    pub scheduler: Rc<dyn Scheduler>,
}
