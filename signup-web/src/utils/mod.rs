//! Browser-independent helpers for the signup page

pub mod constants;
pub mod url;
