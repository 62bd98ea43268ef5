//! Rate limiting middleware.
//!
//! Write endpoints are limited per client using governor's keyed limiter.
//! The client is the peer address when the server runs with connect info.
//! `X-Forwarded-For` is only honoured when that peer is a configured trusted
//! proxy. Requests with no known peer share one bucket.

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{clock::Clock, DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::{
    net::{IpAddr, SocketAddr},
    num::NonZeroU32,
    sync::{Arc, Weak},
    time::Duration,
};

use crate::app::AppState;
use crate::error::ApiError;

/// Bucket used when no client address is known.
const SHARED_CLIENT_KEY: &str = "shared";

/// How often idle client buckets are dropped.
pub const EVICTION_INTERVAL: Duration = Duration::from_secs(60);

/// Rate limiter state shared across all requests.
pub struct RateLimiterState {
    limiter: DefaultKeyedRateLimiter<String>,
    rate_limit_per_minute: u32,
    trusted_proxies: Vec<IpAddr>,
}

impl RateLimiterState {
    /// Create a limiter allowing `rate_limit_per_minute` requests per client.
    /// Zero is treated as one.
    pub fn new(rate_limit_per_minute: u32, trusted_proxies: Vec<IpAddr>) -> Self {
        let per_minute = NonZeroU32::new(rate_limit_per_minute).unwrap_or(NonZeroU32::MIN);
        Self {
            limiter: RateLimiter::keyed(Quota::per_minute(per_minute)),
            rate_limit_per_minute,
            trusted_proxies,
        }
    }

    /// Returns `Err(retry_after_secs)` when `client` has used up its quota.
    pub fn check(&self, client: &str) -> Result<(), u64> {
        match self.limiter.check_key(&client.to_string()) {
            Ok(()) => Ok(()),
            Err(not_until) => {
                let now = self.limiter.clock().now();
                Err(not_until.wait_time_from(now).as_secs().max(1))
            }
        }
    }

    /// Identifies the client a request is counted against.
    pub fn client_key(&self, req: &Request<Body>) -> String {
        let Some(peer) = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip())
        else {
            return SHARED_CLIENT_KEY.to_string();
        };

        if self.trusted_proxies.contains(&peer) {
            if let Some(client) = forwarded_client(req) {
                return client.to_string();
            }
        }

        peer.to_string()
    }

    /// Number of client buckets currently held.
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    /// Drops buckets whose quota has fully replenished.
    pub fn evict_idle(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Runs [`evict_idle`](Self::evict_idle) every `period` until the limiter
    /// is dropped.
    pub fn spawn_eviction(self: &Arc<Self>, period: Duration) -> tokio::task::JoinHandle<()> {
        let state: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);

            // Skip the first immediate tick
            interval.tick().await;

            loop {
                interval.tick().await;
                let Some(state) = state.upgrade() else {
                    break;
                };
                let before = state.tracked_clients();
                state.evict_idle();
                tracing::debug!(
                    before,
                    after = state.tracked_clients(),
                    "Evicted idle rate limit buckets"
                );
            }
        })
    }
}

impl std::fmt::Debug for RateLimiterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiterState")
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .field("trusted_proxies", &self.trusted_proxies)
            .field("tracked_clients", &self.limiter.len())
            .finish()
    }
}

/// First `X-Forwarded-For` hop, if it is a valid address.
fn forwarded_client(req: &Request<Body>) -> Option<IpAddr> {
    req.headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|hop| hop.trim().parse().ok())
}

/// Middleware that applies the per-client write limit.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if let Some(ref rate_limiter) = state.rate_limiter {
        let client = rate_limiter.client_key(&req);
        if let Err(retry_after_secs) = rate_limiter.check(&client) {
            tracing::warn!(client = %client, retry_after_secs, "Rate limit exceeded");
            return ApiError::RateLimited { retry_after_secs }.into_response();
        }
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROXY: [u8; 4] = [10, 0, 0, 5];

    fn request_from(peer: [u8; 4], forwarded: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/contact");
        if let Some(value) = forwarded {
            builder = builder.header("x-forwarded-for", value);
        }
        let mut req = builder.body(Body::empty()).unwrap();
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from((peer, 51000))));
        req
    }

    fn behind_proxy(rate: u32) -> RateLimiterState {
        RateLimiterState::new(rate, vec![IpAddr::from(PROXY)])
    }

    #[test]
    fn test_rate_limiter_allows_requests() {
        let state = RateLimiterState::new(100, vec![]);
        assert!(state.check("10.0.0.1").is_ok());
    }

    #[test]
    fn test_rate_limiter_exhaustion() {
        let state = RateLimiterState::new(2, vec![]);
        assert!(state.check("10.0.0.1").is_ok());
        assert!(state.check("10.0.0.1").is_ok());

        let retry_after = state.check("10.0.0.1").unwrap_err();
        assert!(retry_after >= 1);
    }

    #[test]
    fn test_rate_limiter_clients_independent() {
        let state = RateLimiterState::new(1, vec![]);
        assert!(state.check("10.0.0.1").is_ok());
        assert!(state.check("10.0.0.2").is_ok());
        assert!(state.check("10.0.0.1").is_err());
        assert!(state.check("10.0.0.2").is_err());
    }

    #[test]
    fn test_zero_limit_is_treated_as_one() {
        let state = RateLimiterState::new(0, vec![]);
        assert!(state.check("client").is_ok());
        assert!(state.check("client").is_err());
    }

    #[test]
    fn test_client_key_uses_peer_address() {
        let state = RateLimiterState::new(10, vec![]);
        let req = request_from([192, 0, 2, 4], None);
        assert_eq!(state.client_key(&req), "192.0.2.4");
    }

    #[test]
    fn test_forwarded_header_ignored_from_untrusted_peer() {
        let state = behind_proxy(10);
        let req = request_from([192, 0, 2, 4], Some("203.0.113.7"));
        assert_eq!(state.client_key(&req), "192.0.2.4");
    }

    #[test]
    fn test_trusted_proxy_forwards_first_hop() {
        let state = behind_proxy(10);
        let req = request_from(PROXY, Some("203.0.113.7, 10.0.0.1"));
        assert_eq!(state.client_key(&req), "203.0.113.7");
    }

    #[test]
    fn test_trusted_proxy_with_bad_header_uses_peer() {
        let state = behind_proxy(10);
        for value in [" ", "not-an-ip", ""] {
            let req = request_from(PROXY, Some(value));
            assert_eq!(state.client_key(&req), "10.0.0.5");
        }
        assert_eq!(state.client_key(&request_from(PROXY, None)), "10.0.0.5");
    }

    #[test]
    fn test_client_key_falls_back_to_shared_bucket() {
        let state = behind_proxy(10);
        let req = Request::builder()
            .uri("/")
            .header("x-forwarded-for", "203.0.113.7")
            .body(Body::empty())
            .unwrap();
        assert_eq!(state.client_key(&req), SHARED_CLIENT_KEY);
    }

    #[test]
    fn test_spoofed_forwarded_headers_share_one_quota() {
        let state = behind_proxy(3);
        let mut allowed = 0;
        for i in 0..1_000u32 {
            let spoofed = format!("198.51.{}.{}", i / 256, i % 256);
            let req = request_from([192, 0, 2, 4], Some(&spoofed));
            if state.check(&state.client_key(&req)).is_ok() {
                allowed += 1;
            }
        }
        assert_eq!(allowed, 3);
        assert_eq!(state.tracked_clients(), 1);
    }

    #[test]
    fn test_evict_idle_keeps_limited_clients() {
        let state = RateLimiterState::new(1, vec![]);
        assert!(state.check("10.0.0.1").is_ok());
        state.evict_idle();

        // Still inside its window, so the bucket survives and stays limited.
        assert_eq!(state.tracked_clients(), 1);
        assert!(state.check("10.0.0.1").is_err());
    }

    #[tokio::test]
    async fn test_eviction_task_stops_with_limiter() {
        let state = Arc::new(RateLimiterState::new(5, vec![]));
        let handle = state.spawn_eviction(Duration::from_millis(5));
        drop(state);

        tokio::time::timeout(Duration::from_secs(2), handle)
            .await
            .unwrap()
            .unwrap();
    }

    #[test]
    fn test_debug_output() {
        let state = behind_proxy(30);
        let debug = format!("{:?}", state);
        assert!(debug.contains("rate_limit_per_minute"));
        assert!(debug.contains("30"));
        assert!(debug.contains("10.0.0.5"));
    }
}
