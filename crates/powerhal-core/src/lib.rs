//! Resilient access layer for a remote power service.
//!
//! The power service lives in another process behind an IPC boundary and
//! may be slow, absent, partially capable, or crash mid-call. This crate
//! turns it into a simple, fast, thread-safe local API: every operation
//! resolves to one of three outcomes — successful, failed, or unsupported —
//! and expensive capability probes run at most once per id.
//!
//! Power requests come in two namespaces: *boosts* are transient,
//! time-bounded performance pulses, *modes* are persistent states toggled
//! on and off. Which ids a given service build implements is discovered
//! lazily through support queries and memoized for the wrapper's lifetime.
//!
//! # Example
//!
//! ```rust,ignore
//! use powerhal::{Boost, HalResult, HalWrapper, Mode, RemotePowerClient};
//! use std::sync::Arc;
//!
//! # async fn run(addr: std::net::SocketAddr) -> powerhal::Result<()> {
//! let client = Arc::new(RemotePowerClient::connect(addr).await?);
//! let hal = HalWrapper::new(client);
//!
//! if hal.set_boost(Boost::Interaction, 100).await == HalResult::Unsupported {
//!     // Fall back; this build of the service has no interaction boost.
//! }
//! hal.set_mode(Mode::LowPower, true).await;
//! # Ok(())
//! # }
//! ```

pub mod capability;
pub mod config;
pub mod error;
pub mod ipc;
pub mod result;
pub mod service;
pub mod support;
pub mod wrapper;

// Re-export commonly used types
pub use capability::{Boost, Mode};
pub use error::{PowerHalError, Result};
pub use ipc::RemotePowerClient;
pub use result::HalResult;
pub use service::PowerService;
pub use support::{SupportCache, SupportOutcome};
pub use wrapper::HalWrapper;
