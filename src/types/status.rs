use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Label shown while the appliance is unreachable.
pub const OFFLINE_LABEL: &str = "Offline";

/// Operating phase reported by the appliance firmware.
///
/// The numeric codes are the firmware's own table and must not be reordered.
/// Codes the catalog does not know deserialize to [`StateCode::Unknown`]
/// instead of failing the whole status parse.
#[derive(Debug, Clone, Copy, Serialize_repr, Deserialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum StateCode {
    Initializing = 0,
    Idle = 1,
    CatInside = 2,
    WaitingForCycle = 3,
    CyclingStep1 = 4,
    CyclingStep2 = 5,
    // The firmware reports a second, distinct code with the same display
    // text as code 5.
    CyclingStep2b = 6,
    CyclingStep3 = 7,
    CyclingResuming = 8,
    CyclingCatSensor = 9,
    EmptyingStep1 = 10,
    EmptyingWaitingOnUser = 11,
    EmptyingStep2 = 12,
    EmptyingResuming = 13,
    EmptyingCatSensor = 14,
    Disabled = 15,
    #[serde(other)]
    Unknown = 255,
}

impl StateCode {
    /// Human-readable text for the status line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Initializing => "Initializing",
            Self::Idle => "Idle",
            Self::CatInside => "Cat inside",
            Self::WaitingForCycle => "Waiting for cycle",
            Self::CyclingStep1 => "Cycling (step 1)",
            Self::CyclingStep2 | Self::CyclingStep2b => "Cycling (step 2)",
            Self::CyclingStep3 => "Cycling (step 3)",
            Self::CyclingResuming => "Cycling (resuming)",
            Self::CyclingCatSensor => "Cycling (cat sensor triggered)",
            Self::EmptyingStep1 => "Emptying (step 1)",
            Self::EmptyingWaitingOnUser => "Emptying (waiting on user)",
            Self::EmptyingStep2 => "Emptying (step 2)",
            Self::EmptyingResuming => "Emptying (resuming)",
            Self::EmptyingCatSensor => "Emptying (cat sensor triggered)",
            Self::Disabled => "Disabled",
            Self::Unknown => "Unknown",
        }
    }
}

/// One status snapshot from `GET /stats`.
///
/// Field names follow the firmware's wire format, which spells
/// `waitduration` in all lowercase but the overshoot fields in camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceStatus {
    pub state: StateCode,
    #[serde(rename = "waitduration")]
    pub wait_duration: u32,
    #[serde(rename = "cycleOvershoot")]
    pub cycle_overshoot: u32,
    #[serde(rename = "emptyOvershoot")]
    pub empty_overshoot: u32,
}
