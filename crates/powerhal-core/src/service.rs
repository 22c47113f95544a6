//! Remote power service boundary.

use crate::capability::{Boost, Mode};
use crate::Result;
use async_trait::async_trait;

/// Interface to the remote power service.
///
/// Four operations, all crossing an interprocess boundary: the service may
/// be slow, absent, or crash mid-call, so every method can fail with a
/// transport error at any time — the support queries included. A
/// domain-valid "not supported" answer is a *successful* query returning
/// `false`, never an `Err`.
///
/// Implementations must be safe to share across tasks; the wrapper issues
/// calls concurrently without external locking.
#[async_trait]
pub trait PowerService: Send + Sync {
    /// Ask whether the service implements the given boost.
    async fn query_boost_supported(&self, boost: Boost) -> Result<bool>;

    /// Request a transient boost for `duration_ms` milliseconds.
    ///
    /// Zero or negative duration selects the service-defined default burst
    /// length and is passed through untouched.
    async fn invoke_boost(&self, boost: Boost, duration_ms: i32) -> Result<()>;

    /// Ask whether the service implements the given mode.
    async fn query_mode_supported(&self, mode: Mode) -> Result<bool>;

    /// Toggle a persistent mode on or off.
    async fn invoke_mode(&self, mode: Mode, enabled: bool) -> Result<()>;
}
