//! Public tri-state result of a power HAL operation.
//!
//! Every public call resolves to exactly one of three values:
//!
//! | support lookup      | remote invocation | result        |
//! |---------------------|-------------------|---------------|
//! | query failed        | not attempted     | `Failed`      |
//! | resolved false      | not attempted     | `Unsupported` |
//! | resolved true       | failed            | `Failed`      |
//! | resolved true       | succeeded         | `Successful`  |
//!
//! No other combination is reachable: the dispatcher never invokes a
//! capability whose support is unresolved or resolved false.

use crate::Result;

/// Outcome of a `set_boost` or `set_mode` call.
///
/// Returned as data — the public surface never propagates an error and
/// never panics, so callers can branch on this without any unwinding story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalResult {
    /// The capability is supported and the invocation went through.
    Successful,
    /// A remote call (support query or invocation) failed in transport.
    Failed,
    /// The service reports the capability is not implemented.
    Unsupported,
}

impl HalResult {
    /// Classify a remote invocation outcome.
    ///
    /// Only reachable once support for the capability has resolved true.
    pub fn from_invocation(result: Result<()>) -> Self {
        match result {
            Ok(()) => HalResult::Successful,
            Err(_) => HalResult::Failed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HalResult::Successful => "SUCCESSFUL",
            HalResult::Failed => "FAILED",
            HalResult::Unsupported => "UNSUPPORTED",
        }
    }
}

impl std::fmt::Display for HalResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
