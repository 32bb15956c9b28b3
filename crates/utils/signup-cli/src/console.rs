//! Terminal stand-ins for the page: the form, the status line and navigation.

use std::cell::RefCell;

use lib_signup::{FieldState, FormSnapshot, Navigator, SignupError, SignupForm, StatusMessage, StatusSink};

/// Form backed by the command-line arguments.
pub struct CliForm {
    values: RefCell<FormSnapshot>,
}

impl CliForm {
    pub fn new(values: FormSnapshot) -> Self {
        Self {
            values: RefCell::new(values),
        }
    }
}

impl SignupForm for CliForm {
    fn snapshot(&self) -> FormSnapshot {
        self.values.borrow().clone()
    }

    fn reset(&self) {
        *self.values.borrow_mut() = FormSnapshot::default();
    }

    fn mark_wallet_field(&self, state: FieldState) {
        if state.is_invalid() {
            eprintln!("warning: wallet address should start with 0x and be 42 characters");
        }
    }
}

/// Prints each status message on its own line.
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn render(&self, status: Option<&StatusMessage>) {
        match status {
            Some(message) => println!("{}", format_status(message)),
            None => tracing::debug!("Status cleared"),
        }
    }
}

pub fn format_status(message: &StatusMessage) -> String {
    format!("[{}] {}", message.severity, message.text)
}

/// Resolves page-relative URLs against the API origin and hands them to the user.
pub struct UrlNavigator {
    base_url: String,
    open_browser: bool,
}

impl UrlNavigator {
    pub fn new(base_url: &str, open_browser: bool) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            open_browser,
        }
    }

    pub fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url, url)
        }
    }
}

impl Navigator for UrlNavigator {
    fn navigate(&self, url: &str) -> lib_signup::Result<()> {
        let target = self.resolve(url);
        println!("Continue at: {}", target);

        if self.open_browser {
            open::that(&target).map_err(|e| SignupError::Navigation(format!("{}: {}", target, e)))?;
        }
        Ok(())
    }
}
