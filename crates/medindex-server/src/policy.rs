//! Access policy for the public API.
//!
//! First-party frontends (matched by Origin header) pass freely. Everyone
//! else either presents the configured API key or draws from a per-client
//! rate budget. Both collaborators are injected through [`AppState`]; there
//! is no module-level state.

use std::net::SocketAddr;
use std::num::NonZeroU32;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};

use crate::error::ApiError;
use crate::state::AppState;

/// Outcome of evaluating a request against the access policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Serve without touching the rate budget.
    Allow,
    /// Serve if the client's rate budget permits.
    Throttle,
    /// Reject with 403.
    Deny,
}

/// Configurable access rules: origin exemptions and an optional API key.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    allowed_origins: Vec<String>,
    api_key: Option<String>,
}

impl AccessPolicy {
    pub fn new(allowed_origins: Vec<String>, api_key: Option<String>) -> Self {
        Self {
            allowed_origins,
            api_key,
        }
    }

    /// Evaluates a request's Origin header and `apikey` query parameter.
    ///
    /// A supplied key is only honored when one is configured; a wrong key is
    /// denied outright rather than throttled, so key typos surface instead
    /// of silently degrading.
    pub fn evaluate(&self, origin: Option<&str>, api_key: Option<&str>) -> AccessDecision {
        if let Some(origin) = origin
            && self.allowed_origins.iter().any(|allowed| allowed == origin)
        {
            return AccessDecision::Allow;
        }

        match (&self.api_key, api_key) {
            (Some(expected), Some(supplied)) => {
                if constant_time_eq(expected.as_bytes(), supplied.as_bytes()) {
                    AccessDecision::Allow
                } else {
                    AccessDecision::Deny
                }
            }
            _ => AccessDecision::Throttle,
        }
    }
}

/// Constant-time byte comparison to prevent timing attacks on API key
/// validation.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Per-process token bucket keyed by client IP.
pub struct RateGate {
    limiter: RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>,
}

impl RateGate {
    /// Creates a gate granting `per_minute` requests per minute with the
    /// given burst size. Panics on a zero quota; validated at startup.
    pub fn new(per_minute: u32, burst: u32) -> Self {
        let quota = Quota::per_minute(
            NonZeroU32::new(per_minute).expect("Invalid rate limit configuration"),
        )
        .allow_burst(NonZeroU32::new(burst).expect("Invalid rate limit configuration"));

        Self {
            limiter: RateLimiter::keyed(quota),
        }
    }

    /// Spends one token from the client's budget; `false` when exhausted.
    pub fn try_acquire(&self, client: &str) -> bool {
        self.limiter.check_key(&client.to_string()).is_ok()
    }
}

/// Extracts the `apikey` parameter from a raw query string.
fn api_key_from_query(query: &str) -> Option<&str> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("apikey="))
        .filter(|value| !value.is_empty())
}

/// Middleware enforcing the access policy ahead of every catalog endpoint.
pub async fn enforce_access_policy(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());
    let api_key = request.uri().query().and_then(api_key_from_query);

    match state.policy.evaluate(origin, api_key) {
        AccessDecision::Allow => next.run(request).await,
        AccessDecision::Deny => {
            ApiError::Forbidden("Invalid API key".to_string()).into_response()
        }
        AccessDecision::Throttle => {
            if state.rate_gate.try_acquire(&addr.ip().to_string()) {
                next.run(request).await
            } else {
                ApiError::RateLimitExceeded.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> AccessPolicy {
        AccessPolicy::new(
            vec!["https://example.com".to_string()],
            Some("secret".to_string()),
        )
    }

    #[test]
    fn allowed_origin_passes() {
        assert_eq!(
            policy().evaluate(Some("https://example.com"), None),
            AccessDecision::Allow
        );
    }

    #[test]
    fn unknown_origin_without_key_is_throttled() {
        assert_eq!(
            policy().evaluate(Some("https://elsewhere.example"), None),
            AccessDecision::Throttle
        );
        assert_eq!(policy().evaluate(None, None), AccessDecision::Throttle);
    }

    #[test]
    fn valid_key_passes_and_wrong_key_is_denied() {
        assert_eq!(
            policy().evaluate(None, Some("secret")),
            AccessDecision::Allow
        );
        assert_eq!(
            policy().evaluate(None, Some("wrong")),
            AccessDecision::Deny
        );
    }

    #[test]
    fn keys_are_ignored_when_none_is_configured() {
        let open = AccessPolicy::new(vec![], None);
        assert_eq!(open.evaluate(None, Some("anything")), AccessDecision::Throttle);
    }

    #[test]
    fn rate_gate_enforces_burst_per_client() {
        let gate = RateGate::new(3, 3);
        for _ in 0..3 {
            assert!(gate.try_acquire("10.0.0.1"));
        }
        assert!(!gate.try_acquire("10.0.0.1"), "budget exhausted");
        assert!(gate.try_acquire("10.0.0.2"), "other clients unaffected");
    }

    #[test]
    fn api_key_extraction_from_query() {
        assert_eq!(api_key_from_query("apikey=abc"), Some("abc"));
        assert_eq!(api_key_from_query("page=1&apikey=abc&limit=2"), Some("abc"));
        assert_eq!(api_key_from_query("page=1"), None);
        assert_eq!(api_key_from_query("apikey="), None);
    }
}
