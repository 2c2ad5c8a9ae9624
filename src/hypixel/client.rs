//! HTTP client for the Hypixel and Mojang APIs.
//!
//! Handles retries with deterministic backoff, rate-limit and
//! error-envelope classification, and optional API-key authentication.
//! The underlying agent is the connection pool: cloning the client
//! shares it, dropping the last clone releases it.

use super::error::{ApiError, FetchError};
use super::retry::{with_retries, CancelToken, RetryPolicy};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const HYPIXEL_BASE_URL: &str = "https://api.hypixel.net";
const MOJANG_BASE_URL: &str = "https://api.mojang.com";

/// Per-request timeout; a timed-out request counts as one transient
/// failure and goes through the retry schedule.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Mojang profile response for a name lookup.
#[derive(Deserialize)]
struct MojangProfile {
    id: String,
}

#[derive(Clone)]
pub struct HypixelClient {
    agent: ureq::Agent,
    api_key: Option<String>,
    policy: RetryPolicy,
    hypixel_base: String,
    mojang_base: String,
}

impl HypixelClient {
    /// Builds a client. Without an API key requests run in anonymous
    /// (more tightly rate-limited) mode.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_policy(api_key, RetryPolicy::default())
    }

    pub fn with_policy(api_key: Option<String>, policy: RetryPolicy) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            api_key,
            policy,
            hypixel_base: HYPIXEL_BASE_URL.to_string(),
            mojang_base: MOJANG_BASE_URL.to_string(),
        }
    }

    /// Points the client at different base URLs (local test servers).
    pub fn with_base_urls(
        mut self,
        hypixel_base: impl Into<String>,
        mojang_base: impl Into<String>,
    ) -> Self {
        self.hypixel_base = hypixel_base.into();
        self.mojang_base = mojang_base.into();
        self
    }

    /// Resolves an in-game name to its UUID via the Mojang API.
    pub fn resolve_uuid(&self, ign: &str, cancel: &CancelToken) -> Result<Uuid, ApiError> {
        let url = format!("{}/users/profiles/minecraft/{}", self.mojang_base, ign);
        debug!(ign, "resolving player uuid");

        let profile = with_retries(&self.policy, cancel, "name resolution", || {
            let response = match self.agent.get(&url).call() {
                Ok(r) => r,
                Err(ureq::Error::Status(code, _)) => {
                    return Err(FetchError::Fatal(classify_status(
                        code,
                        ApiError::NameNotFound(ign.to_string()),
                    )))
                }
                Err(ureq::Error::Transport(transport)) => {
                    return Err(FetchError::Transient(transport.to_string()))
                }
            };
            // Mojang historically answered unknown names with an empty 204
            if response.status() == 204 {
                return Err(FetchError::Fatal(ApiError::NameNotFound(ign.to_string())));
            }
            response.into_json::<MojangProfile>().map_err(|e| {
                FetchError::Fatal(ApiError::Upstream {
                    reason: format!("malformed Mojang response: {e}"),
                })
            })
        })?;

        Uuid::parse_str(&profile.id).map_err(|e| ApiError::Upstream {
            reason: format!("Mojang returned invalid uuid `{}`: {e}", profile.id),
        })
    }

    /// Fetches all Skyblock profiles for a player.
    pub fn fetch_profiles(
        &self,
        player_uuid: &Uuid,
        cancel: &CancelToken,
    ) -> Result<Vec<Value>, ApiError> {
        let uuid_param = player_uuid.simple().to_string();
        let body = self.hypixel_get(
            "/v2/skyblock/profiles",
            &[("uuid", uuid_param.as_str())],
            || ApiError::NoProfiles(*player_uuid),
            cancel,
        )?;

        let profiles = body
            .get("profiles")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        if profiles.is_empty() {
            return Err(ApiError::NoProfiles(*player_uuid));
        }
        debug!(player = %player_uuid, count = profiles.len(), "fetched profiles");
        Ok(profiles)
    }

    /// Fetches player-level data (achievements, first login, ...). Not
    /// profile-scoped.
    pub fn fetch_player_meta(
        &self,
        player_uuid: &Uuid,
        cancel: &CancelToken,
    ) -> Result<Value, ApiError> {
        let uuid_param = player_uuid.simple().to_string();
        let body = self.hypixel_get(
            "/v2/player",
            &[("uuid", uuid_param.as_str())],
            || ApiError::Upstream {
                reason: format!("no player data for {player_uuid}"),
            },
            cancel,
        )?;
        Ok(body.get("player").cloned().unwrap_or(body))
    }

    /// GET a Hypixel endpoint with retries, attaching the API key when
    /// configured and validating the success envelope.
    fn hypixel_get(
        &self,
        path: &str,
        params: &[(&str, &str)],
        not_found: impl Fn() -> ApiError,
        cancel: &CancelToken,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.hypixel_base, path);

        with_retries(&self.policy, cancel, path, || {
            let mut request = self.agent.get(&url);
            for (key, value) in params {
                request = request.query(key, value);
            }
            if let Some(api_key) = &self.api_key {
                request = request.query("key", api_key);
            }

            let response = match request.call() {
                Ok(r) => r,
                Err(ureq::Error::Status(code, _)) => {
                    return Err(FetchError::Fatal(classify_status(code, not_found())))
                }
                Err(ureq::Error::Transport(transport)) => {
                    return Err(FetchError::Transient(transport.to_string()))
                }
            };

            let body: Value = response.into_json().map_err(|e| {
                FetchError::Fatal(ApiError::Upstream {
                    reason: format!("malformed response body: {e}"),
                })
            })?;
            check_envelope(&body).map_err(FetchError::Fatal)?;
            Ok(body)
        })
    }
}

/// Maps a non-2xx status to the error taxonomy. 404 is stage-specific,
/// so the caller supplies its not-found error.
fn classify_status(status: u16, not_found: ApiError) -> ApiError {
    match status {
        404 => not_found,
        429 => ApiError::RateLimited,
        s if s >= 500 => ApiError::Upstream {
            reason: format!("server error: {s}"),
        },
        s => ApiError::Upstream {
            reason: format!("unexpected status: {s}"),
        },
    }
}

/// Validates the uniform Hypixel `{"success": bool, "cause": ...}`
/// envelope. A missing flag counts as failure.
fn check_envelope(body: &Value) -> Result<(), ApiError> {
    if body.get("success").and_then(Value::as_bool) == Some(true) {
        return Ok(());
    }
    let reason = body
        .get("cause")
        .and_then(Value::as_str)
        .unwrap_or("unknown error")
        .to_string();
    Err(ApiError::Upstream { reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn not_found() -> ApiError {
        ApiError::NameNotFound("test".to_string())
    }

    #[test]
    fn test_classify_404_uses_stage_error() {
        assert!(matches!(
            classify_status(404, not_found()),
            ApiError::NameNotFound(_)
        ));
    }

    #[test]
    fn test_classify_429_is_rate_limited() {
        assert!(matches!(
            classify_status(429, not_found()),
            ApiError::RateLimited
        ));
    }

    #[test]
    fn test_classify_server_errors_are_upstream() {
        for status in [500, 502, 503] {
            match classify_status(status, not_found()) {
                ApiError::Upstream { reason } => {
                    assert!(reason.contains(&status.to_string()))
                }
                other => panic!("expected Upstream for {status}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_classify_other_statuses_are_upstream() {
        assert!(matches!(
            classify_status(403, not_found()),
            ApiError::Upstream { .. }
        ));
        assert!(matches!(
            classify_status(418, not_found()),
            ApiError::Upstream { .. }
        ));
    }

    #[test]
    fn test_envelope_success_true_passes() {
        assert!(check_envelope(&json!({"success": true, "profiles": []})).is_ok());
    }

    #[test]
    fn test_envelope_failure_carries_cause() {
        let body = json!({"success": false, "cause": "Invalid API key"});
        match check_envelope(&body) {
            Err(ApiError::Upstream { reason }) => assert_eq!(reason, "Invalid API key"),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_missing_flag_fails() {
        match check_envelope(&json!({"profiles": []})) {
            Err(ApiError::Upstream { reason }) => assert_eq!(reason, "unknown error"),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }
}
