use serde::{Deserialize, Serialize};

/// The three user-editable appliance settings.
///
/// Held twice in the model: once as the editable draft and once as the
/// device-reported values backing the read-only display labels next to the
/// inputs. Only hydration writes the reported copy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsForm {
    /// Seconds the appliance waits after the cat leaves before cycling.
    pub wait_duration: u32,
    pub cycle_overshoot: u32,
    pub empty_overshoot: u32,
}

/// Which input field a shell edit event refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SettingsField {
    WaitDuration,
    CycleOvershoot,
    EmptyOvershoot,
}

impl SettingsForm {
    pub fn set(&mut self, field: SettingsField, value: u32) {
        match field {
            SettingsField::WaitDuration => self.wait_duration = value,
            SettingsField::CycleOvershoot => self.cycle_overshoot = value,
            SettingsField::EmptyOvershoot => self.empty_overshoot = value,
        }
    }

    /// Query string for `GET /save_settings`. The firmware spells
    /// `waitDuration` with a capital D here, unlike the `/stats` reply.
    pub fn save_query(&self) -> String {
        format!(
            "waitDuration={}&cycleOvershoot={}&emptyOvershoot={}",
            self.wait_duration, self.cycle_overshoot, self.empty_overshoot
        )
    }
}
