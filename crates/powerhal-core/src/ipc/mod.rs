//! Line-delimited JSON transport to the power service daemon.
//!
//! The access layer itself only depends on the [`PowerService`](crate::PowerService)
//! trait; this module supplies the concrete client adapter the surrounding
//! system binds it to. The daemon side of the channel belongs to the
//! service process and is not this crate's concern.

pub mod client;
pub mod wire;

pub use client::RemotePowerClient;
pub use wire::{PowerReply, PowerRequest};
