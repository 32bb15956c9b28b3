//! Browser-backed collaborators for the signup controller

pub mod api;
pub mod browser;

pub use api::BrowserApi;
pub use browser::{LocalStore, LocationNavigator, TimeoutScheduler};
