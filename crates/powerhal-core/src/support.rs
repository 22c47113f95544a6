//! Thread-safe capability support memo with single-flight probing.
//!
//! The remote support query is an expensive IPC round-trip, and capability
//! is a static property of the bound service, so each id is probed at most
//! once per successful resolution. Racing callers for the same id
//! coordinate: one becomes the prober, the rest wait on its cell and
//! observe the same outcome. A failed probe resolves nothing — the record
//! stays unknown and a later call retries, one probe in flight at a time.
//!
//! # Thread Safety
//!
//! Resolved records answer from a shared read lock plus a cell read — no
//! exclusive lock on the hot path, and no lock of any kind is held while a
//! probe is in flight.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use tokio::sync::OnceCell;

use crate::{PowerHalError, Result};

/// Outcome of a support lookup.
#[derive(Debug)]
pub enum SupportOutcome {
    /// The record is resolved: the service implements this capability.
    Supported,
    /// The record is resolved: the service does not implement this
    /// capability. Permanent for the cache's lifetime.
    Unsupported,
    /// The probe itself failed in transport. The record is still unknown.
    QueryFailed(PowerHalError),
}

/// Per-namespace support memo.
///
/// One instance covers one id namespace (boosts or modes). Each key owns a
/// write-once cell: `unknown` while unset, then `supported`/`unsupported`
/// forever after the first successful probe.
pub struct SupportCache<K> {
    slots: RwLock<HashMap<K, Arc<OnceCell<bool>>>>,
}

impl<K> SupportCache<K> {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }
}

impl<K> Default for SupportCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SupportCache<K>
where
    K: Copy + Eq + Hash,
{
    /// Look up the support record for `key`, probing the remote service
    /// through `probe` if the record is still unknown.
    ///
    /// `probe` runs at most once per call, and among racing callers only
    /// the single winner's probe runs at all; everyone else awaits that
    /// probe's outcome.
    pub async fn ensure_supported<F, Fut>(&self, key: K, probe: F) -> SupportOutcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<bool>>,
    {
        let cell = self.slot(key);

        // Hot path: resolved records answer without coordination.
        if let Some(&supported) = cell.get() {
            return resolved(supported);
        }

        match cell.get_or_try_init(probe).await {
            Ok(&supported) => resolved(supported),
            Err(err) => SupportOutcome::QueryFailed(err),
        }
    }

    /// Get or create the cell for `key`.
    fn slot(&self, key: K) -> Arc<OnceCell<bool>> {
        {
            let slots = self.slots.read().unwrap();
            if let Some(cell) = slots.get(&key) {
                return cell.clone();
            }
        }
        let mut slots = self.slots.write().unwrap();
        slots.entry(key).or_default().clone()
    }
}

fn resolved(supported: bool) -> SupportOutcome {
    if supported {
        SupportOutcome::Supported
    } else {
        SupportOutcome::Unsupported
    }
}
