use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

use crate::config::{upstream_connect_timeout, upstream_http_timeout};

#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    /// Weather backend base URL, no trailing slash.
    pub upstream_base: Arc<str>,
    pub observability: Arc<ObservabilityCounters>,
}

#[derive(Debug, Default)]
pub struct ObservabilityCounters {
    upstream_requests_total: AtomicU64,
    upstream_errors_total: AtomicU64,
    rejected_requests_total: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservabilitySnapshot {
    pub upstream_requests_total: u64,
    pub upstream_errors_total: u64,
    pub rejected_requests_total: u64,
}

impl ObservabilityCounters {
    pub fn snapshot(&self) -> ObservabilitySnapshot {
        ObservabilitySnapshot {
            upstream_requests_total: self.upstream_requests_total.load(Ordering::Relaxed),
            upstream_errors_total: self.upstream_errors_total.load(Ordering::Relaxed),
            rejected_requests_total: self.rejected_requests_total.load(Ordering::Relaxed),
        }
    }

    pub fn record_upstream_request(&self) {
        self.upstream_requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upstream_error(&self) {
        self.upstream_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected_request(&self) {
        self.rejected_requests_total.fetch_add(1, Ordering::Relaxed);
    }
}

impl AppState {
    pub fn new(upstream_base: impl Into<Arc<str>>) -> Result<Self, reqwest::Error> {
        let request_timeout = upstream_http_timeout();
        let connect_timeout = upstream_connect_timeout();
        let http_client = reqwest::Client::builder()
            .user_agent("photospot-map/0.1")
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .or_else(|e| {
                warn!(
                    error = %e,
                    "failed to build configured HTTP client, retrying without custom user-agent"
                );
                reqwest::Client::builder()
                    .timeout(request_timeout)
                    .connect_timeout(connect_timeout)
                    .build()
            })?;
        Ok(Self {
            http_client,
            upstream_base: upstream_base.into(),
            observability: Arc::new(ObservabilityCounters::default()),
        })
    }
}
