//! # API Client
//!
//! reqwest implementation of [`SignupApi`](crate::services::SignupApi) for
//! native front ends. Enabled with the `http-client` feature.

pub mod client;
pub mod signup;

pub use client::ApiClient;
