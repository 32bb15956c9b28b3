//! # Status Messages
//!
//! A single status line under the form. Each write replaces the previous
//! message. Success messages clear themselves after a delay unless a later
//! write superseded them; the pending clear is never cancelled, it just
//! checks whether it is still current when it fires.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::services::Scheduler;

/// Severity tag of a status message. The tag doubles as the CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// Where status messages are rendered. `None` clears text and tag.
pub trait StatusSink {
    fn render(&self, status: Option<&StatusMessage>);
}

/// Writes status messages and schedules the success auto-clear.
pub struct StatusBoard {
    sink: Rc<dyn StatusSink>,
    scheduler: Rc<dyn Scheduler>,
    clear_after: Duration,
    generation: Rc<Cell<u64>>,
}

impl StatusBoard {
    pub fn new(sink: Rc<dyn StatusSink>, scheduler: Rc<dyn Scheduler>, clear_after: Duration) -> Self {
        Self {
            sink,
            scheduler,
            clear_after,
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Replace the current message.
    pub fn show(&self, text: impl Into<String>, severity: Severity) {
        let message = StatusMessage::new(text, severity);
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        self.sink.render(Some(&message));

        if severity == Severity::Success {
            let sink = Rc::clone(&self.sink);
            let current = Rc::clone(&self.generation);
            self.scheduler.schedule(
                self.clear_after,
                Box::new(move || {
                    if current.get() == generation {
                        sink.render(None);
                    }
                }),
            );
        }
    }
}
