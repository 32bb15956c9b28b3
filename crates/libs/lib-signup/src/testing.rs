//! In-memory collaborators for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use shared::{JoinAirdropRequest, JoinAirdropResponse};
use tokio::sync::Notify;

use crate::error::{Result, SignupError};
use crate::form::{FieldState, FormSnapshot, SignupForm};
use crate::services::{KeyValueStore, Navigator, Scheduler, SignupApi, SignupContext};
use crate::status::{StatusMessage, StatusSink};

pub const VALID_WALLET: &str = "0x1234567890123456789012345678901234567890";

/// Keeps every render; the last entry is what the user sees.
#[derive(Default)]
pub struct RecordingSink {
    history: RefCell<Vec<Option<StatusMessage>>>,
}

impl RecordingSink {
    pub fn current(&self) -> Option<StatusMessage> {
        self.history.borrow().last().cloned().flatten()
    }

    pub fn history(&self) -> Vec<Option<StatusMessage>> {
        self.history.borrow().clone()
    }
}

impl StatusSink for RecordingSink {
    fn render(&self, status: Option<&StatusMessage>) {
        self.history.borrow_mut().push(status.cloned());
    }
}

/// Virtual clock. Tasks run only when [`ManualScheduler::advance`] passes their due time.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<Duration>,
    pending: RefCell<Vec<(Duration, Duration, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Delays of the tasks not yet run, in scheduling order.
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(_, delay, _)| *delay).collect()
    }

    pub fn advance(&self, elapsed: Duration) {
        let now = self.now.get() + elapsed;
        self.now.set(now);

        // Take due tasks out first: a task may schedule another one.
        let due: Vec<_> = {
            let mut pending = self.pending.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(at, _, _)| *at <= now);
            *pending = rest;
            due
        };
        for (_, _, task) in due {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let at = self.now.get() + delay;
        self.pending.borrow_mut().push((at, delay, task));
    }
}

#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    pub fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(SignupError::Storage("quota exceeded".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<()> {
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeForm {
    values: RefCell<FormSnapshot>,
    marks: RefCell<Vec<FieldState>>,
    resets: Cell<usize>,
}

impl FakeForm {
    pub fn fill(&self, snapshot: FormSnapshot) {
        *self.values.borrow_mut() = snapshot;
    }

    pub fn fill_wallet(&self, wallet: &str) {
        self.values.borrow_mut().wallet_address = wallet.to_string();
    }

    pub fn values(&self) -> FormSnapshot {
        self.values.borrow().clone()
    }

    pub fn resets(&self) -> usize {
        self.resets.get()
    }

    pub fn last_mark(&self) -> Option<FieldState> {
        self.marks.borrow().last().copied()
    }
}

impl SignupForm for FakeForm {
    fn snapshot(&self) -> FormSnapshot {
        self.values()
    }

    fn reset(&self) {
        *self.values.borrow_mut() = FormSnapshot::default();
        self.resets.set(self.resets.get() + 1);
    }

    fn mark_wallet_field(&self, state: FieldState) {
        self.marks.borrow_mut().push(state);
    }
}

/// Canned join endpoint. Clones share the call log and reply queue.
#[derive(Clone, Default)]
pub struct FakeApi {
    calls: Rc<RefCell<Vec<JoinAirdropRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<JoinAirdropResponse>>>>,
    gate: Option<Rc<Notify>>,
}

impl FakeApi {
    pub fn replying(reply: Result<JoinAirdropResponse>) -> Self {
        let api = Self::default();
        api.push_reply(reply);
        api
    }

    /// Hold every request until `gate` is notified.
    pub fn gated(mut self, gate: Rc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn push_reply(&self, reply: Result<JoinAirdropResponse>) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn calls(&self) -> Vec<JoinAirdropRequest> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl SignupApi for FakeApi {
    async fn join_airdrop(&self, request: &JoinAirdropRequest) -> Result<JoinAirdropResponse> {
        self.calls.borrow_mut().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SignupError::Api("no reply queued".to_string())))
    }
}

/// One of each collaborator, kept around for assertions.
#[derive(Default)]
pub struct Harness {
    pub form: Rc<FakeForm>,
    pub sink: Rc<RecordingSink>,
    pub store: Rc<MemoryStore>,
    pub navigator: Rc<RecordingNavigator>,
    pub scheduler: Rc<ManualScheduler>,
}

impl Harness {
    pub fn context(&self) -> SignupContext {
        SignupContext {
            form: self.form.clone(),
            status: self.sink.clone(),
            storage: self.store.clone(),
            navigator: self.navigator.clone(),
            scheduler: self.scheduler.clone(),
        }
    }
}
