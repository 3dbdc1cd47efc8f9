//! Shared HTTP client for the stacks backend.
//!
//! Every backend response is wrapped in a `{code, message, data}` envelope;
//! this crate is the single place that envelope is interpreted. Resource
//! clients in the application crate only deal in unwrapped payloads and
//! [`ApiError`] rejections.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, Result};
