//! Wire format for the power daemon channel.
//!
//! One JSON object per line in each direction. Requests are a tagged enum
//! carrying exactly the four power operations; replies either answer a
//! support query, acknowledge an invocation, or report a daemon-side
//! fault. There are no request ids: the client serializes its exchanges on
//! one connection, so replies pair with requests by order.

use crate::capability::{Boost, Mode};
use serde::{Deserialize, Serialize};

/// A single power operation, as sent to the daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PowerRequest {
    IsBoostSupported { boost: Boost },
    SetBoost { boost: Boost, duration_ms: i32 },
    IsModeSupported { mode: Mode },
    SetMode { mode: Mode, enabled: bool },
}

/// The daemon's answer to one request.
///
/// `Error` is reserved for genuine faults; "capability not implemented" is
/// a successful `Supported { supported: false }` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reply", rename_all = "snake_case")]
pub enum PowerReply {
    Supported { supported: bool },
    Done,
    Error { message: String },
}
