//! Error taxonomy for the upstream API client.

use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced to callers of the client.
///
/// The two not-found cases stay separate variants so a surfaced message
/// always says which lookup stage came up empty. `RateLimited` is its
/// own variant so callers can back off independently of the client's
/// internal retry budget.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("no player found with name `{0}`")]
    NameNotFound(String),

    #[error("player {0} has no Skyblock profiles")]
    NoProfiles(Uuid),

    #[error("upstream API rate limit exceeded")]
    RateLimited,

    #[error("upstream error: {reason}")]
    Upstream { reason: String },

    #[error("request cancelled")]
    Cancelled,
}

/// Internal per-attempt outcome inside the retry loop.
///
/// `Transient` failures (timeouts, connection errors) consume a retry
/// attempt and never escape the loop; on exhaustion they are re-raised
/// as `ApiError::Upstream`. `Fatal` failures short-circuit immediately.
#[derive(Debug)]
pub(crate) enum FetchError {
    Transient(String),
    Fatal(ApiError),
}
