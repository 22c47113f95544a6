//! Centralized configuration constants for the access layer.

use std::time::Duration;

/// IPC transport configuration.
pub struct IpcConfig;

impl IpcConfig {
    /// How long to wait for the initial TCP connect to the power daemon.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
}
