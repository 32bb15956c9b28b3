//! Local storage, location and timers

use std::time::Duration;

use gloo_timers::callback::Timeout;
use lib_signup::{KeyValueStore, Navigator, Scheduler, SignupError};

fn window() -> lib_signup::Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| SignupError::Navigation("No window available".to_string()))
}

/// `window.localStorage`
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn set_item(&self, key: &str, value: &str) -> lib_signup::Result<()> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| SignupError::Storage("localStorage is unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SignupError::Storage(format!("{:?}", e)))
    }
}

/// Full page navigation through `window.location.href`.
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) -> lib_signup::Result<()> {
        window()?
            .location()
            .set_href(url)
            .map_err(|e| SignupError::Navigation(format!("{:?}", e)))
    }
}

/// `setTimeout` without a handle: scheduled tasks always run.
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
