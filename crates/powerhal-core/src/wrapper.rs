//! Cached dispatch wrapper around the remote power service.
//!
//! [`HalWrapper`] is the public surface of the access layer. Each call runs
//! the same shape: resolve the capability's support record (probing the
//! service at most once per id), short-circuit on `unsupported` or a failed
//! probe, otherwise issue the invocation and classify its outcome. The
//! result is always one of the three [`HalResult`] values — callers never
//! see an error type and never an unwound stack.
//!
//! One wrapper instance belongs to one bound service connection. The
//! support caches are scoped to the instance, not the process, so tearing
//! down the connection and building a new wrapper starts capability
//! discovery from scratch.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::capability::{Boost, Mode};
use crate::result::HalResult;
use crate::service::PowerService;
use crate::support::{SupportCache, SupportOutcome};

/// Capability-caching dispatcher over a [`PowerService`].
pub struct HalWrapper<S> {
    service: Arc<S>,
    boost_support: SupportCache<Boost>,
    mode_support: SupportCache<Mode>,
}

impl<S: PowerService> HalWrapper<S> {
    /// Wrap a bound service connection.
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            boost_support: SupportCache::new(),
            mode_support: SupportCache::new(),
        }
    }

    /// Request a transient boost for `duration_ms` milliseconds.
    pub async fn set_boost(&self, boost: Boost, duration_ms: i32) -> HalResult {
        let outcome = self
            .boost_support
            .ensure_supported(boost, || self.service.query_boost_supported(boost))
            .await;

        match outcome {
            SupportOutcome::QueryFailed(err) => {
                warn!("Support query for boost {} failed: {}", boost, err);
                HalResult::Failed
            }
            SupportOutcome::Unsupported => {
                debug!("Skipped boost {}: not supported by the power service", boost);
                HalResult::Unsupported
            }
            SupportOutcome::Supported => {
                let result = self.service.invoke_boost(boost, duration_ms).await;
                if let Err(ref err) = result {
                    warn!("Boost {} failed: {}", boost, err);
                }
                HalResult::from_invocation(result)
            }
        }
    }

    /// Toggle a persistent mode on or off.
    pub async fn set_mode(&self, mode: Mode, enabled: bool) -> HalResult {
        let outcome = self
            .mode_support
            .ensure_supported(mode, || self.service.query_mode_supported(mode))
            .await;

        match outcome {
            SupportOutcome::QueryFailed(err) => {
                warn!("Support query for mode {} failed: {}", mode, err);
                HalResult::Failed
            }
            SupportOutcome::Unsupported => {
                debug!("Skipped mode {}: not supported by the power service", mode);
                HalResult::Unsupported
            }
            SupportOutcome::Supported => {
                let result = self.service.invoke_mode(mode, enabled).await;
                if let Err(ref err) = result {
                    warn!("Mode {} failed: {}", mode, err);
                }
                HalResult::from_invocation(result)
            }
        }
    }

    /// The underlying service handle.
    pub fn service(&self) -> &Arc<S> {
        &self.service
    }
}
