use serde::{Deserialize, Serialize};

use crate::commands::timer::TimerId;
use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Device state
    /// Last status snapshot received this session
    pub device_status: Option<DeviceStatus>,
    /// Text for the status line; None until the first poll settles
    pub status_label: Option<String>,
    /// Main switch position; None while the initial query is outstanding
    pub enabled: Option<bool>,

    // Settings
    /// Editable draft, seeded once per session by hydration
    pub settings_form: Option<SettingsForm>,
    /// Device-reported values backing the read-only display labels
    pub reported_settings: Option<SettingsForm>,

    // Polling session state
    pub session: PollingSession,

    // Modal state
    pub modal: ModalState,

    // UI state
    /// The aria-busy marker on the status line
    pub status_busy: bool,

    /// Source for fresh timer handles
    pub next_timer_id: u32,
}

impl Model {
    /// Mint a timer id no earlier schedule can collide with.
    pub fn next_timer(&mut self) -> TimerId {
        self.next_timer_id = self.next_timer_id.wrapping_add(1);
        TimerId(self.next_timer_id)
    }
}
