//! Page modules

pub mod join;

pub use join::JoinPage;
