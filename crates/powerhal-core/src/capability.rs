//! Capability identifiers understood by the remote power service.
//!
//! Boosts and modes live in disjoint namespaces: a boost is a transient,
//! time-bounded performance pulse, a mode is a persistent state that stays
//! until explicitly toggled off. Which ids a given service build actually
//! implements is discovered at runtime through support queries and memoized
//! by [`SupportCache`](crate::SupportCache).

use serde::{Deserialize, Serialize};

/// A transient, time-bounded performance hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boost {
    /// User is interacting; bridge latency-sensitive work.
    Interaction,
    /// A display refresh is about to happen.
    DisplayUpdateImminent,
    MlAcc,
    AudioLaunch,
    CameraLaunch,
    CameraShot,
}

impl Boost {
    /// Every boost id, in wire order.
    pub const ALL: [Boost; 6] = [
        Boost::Interaction,
        Boost::DisplayUpdateImminent,
        Boost::MlAcc,
        Boost::AudioLaunch,
        Boost::CameraLaunch,
        Boost::CameraShot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Boost::Interaction => "interaction",
            Boost::DisplayUpdateImminent => "display_update_imminent",
            Boost::MlAcc => "ml_acc",
            Boost::AudioLaunch => "audio_launch",
            Boost::CameraLaunch => "camera_launch",
            Boost::CameraShot => "camera_shot",
        }
    }
}

impl std::fmt::Display for Boost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A persistent, explicitly toggled power-related state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    DoubleTapToWake,
    LowPower,
    SustainedPerformance,
    FixedPerformance,
    VrMode,
    /// An application launch is in progress.
    Launch,
    ExpensiveRendering,
    Interactive,
    DeviceIdle,
    DisplayInactive,
    AudioStreamingLowLatency,
    CameraStreamingSecure,
    CameraStreamingLow,
    CameraStreamingMid,
    CameraStreamingHigh,
}

impl Mode {
    /// Every mode id, in wire order.
    pub const ALL: [Mode; 15] = [
        Mode::DoubleTapToWake,
        Mode::LowPower,
        Mode::SustainedPerformance,
        Mode::FixedPerformance,
        Mode::VrMode,
        Mode::Launch,
        Mode::ExpensiveRendering,
        Mode::Interactive,
        Mode::DeviceIdle,
        Mode::DisplayInactive,
        Mode::AudioStreamingLowLatency,
        Mode::CameraStreamingSecure,
        Mode::CameraStreamingLow,
        Mode::CameraStreamingMid,
        Mode::CameraStreamingHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::DoubleTapToWake => "double_tap_to_wake",
            Mode::LowPower => "low_power",
            Mode::SustainedPerformance => "sustained_performance",
            Mode::FixedPerformance => "fixed_performance",
            Mode::VrMode => "vr_mode",
            Mode::Launch => "launch",
            Mode::ExpensiveRendering => "expensive_rendering",
            Mode::Interactive => "interactive",
            Mode::DeviceIdle => "device_idle",
            Mode::DisplayInactive => "display_inactive",
            Mode::AudioStreamingLowLatency => "audio_streaming_low_latency",
            Mode::CameraStreamingSecure => "camera_streaming_secure",
            Mode::CameraStreamingLow => "camera_streaming_low",
            Mode::CameraStreamingMid => "camera_streaming_mid",
            Mode::CameraStreamingHigh => "camera_streaming_high",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
