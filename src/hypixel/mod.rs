//! Upstream API access: client, error taxonomy, retry policy.

pub mod client;
pub mod error;
pub mod retry;

pub use client::HypixelClient;
pub use error::ApiError;
pub use retry::{CancelToken, RetryPolicy};
