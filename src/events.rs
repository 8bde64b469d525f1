use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerOutput;
use crate::types::*;

/// Events that can happen in the app, wrapped by domain
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Sent by the shell once on page load
    Initialize,

    Modal(ModalEvent),
    Polling(PollingEvent),
    Settings(SettingsEvent),
    Power(PowerEvent),
}

/// Dialog lifecycle events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ModalEvent {
    /// A trigger button was pressed; `page` carries the shell's current DOM
    /// measurements for the scrollbar compensation decision.
    Open { modal_id: String, page: PageMetrics },
    /// The close button was pressed.
    Close,
    /// Any document click while a modal is shown; the shell reports whether
    /// it landed inside the dialog's content region.
    DocumentClicked { inside_content: bool },

    // Transition timer completion (internal event, skipped from serialization)
    #[serde(skip)]
    AnimationTimer(TimerOutput),
}

/// Status polling events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum PollingEvent {
    Start,
    Stop,

    // Completions (internal events, skipped from serialization)
    #[serde(skip)]
    StatusResponse {
        epoch: u32,
        result: Result<DeviceStatus, String>,
    },
    #[serde(skip)]
    PollTimer(TimerOutput),
}

/// Settings form events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    FieldChanged { field: SettingsField, value: u32 },
    SaveAndClose,

    #[serde(skip)]
    SaveAcknowledged(Result<(), String>),
}

/// Main switch events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum PowerEvent {
    SetEnabled { enabled: bool },

    #[serde(skip)]
    EnabledResponse(Result<EnabledReply, String>),
    #[serde(skip)]
    SetEnabledAcknowledged(Result<(), String>),
}
