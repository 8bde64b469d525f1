use crux_core::{render::render, Command};

use crate::events::{Event, SettingsEvent};
use crate::http_get_ack;
use crate::http_helpers::build_url;
use crate::model::Model;
use crate::types::{DeviceStatus, SettingsForm};
use crate::update::modal;
use crate::Effect;

/// Seed the editable draft and the read-only display labels from a status
/// snapshot.
///
/// Called from the polling success path under the session's `hydrated`
/// guard, so it runs at most once per session and later polls never clobber
/// the user's edits.
pub fn hydrate(model: &mut Model, status: &DeviceStatus) {
    let reported = SettingsForm {
        wait_duration: status.wait_duration,
        cycle_overshoot: status.cycle_overshoot,
        empty_overshoot: status.empty_overshoot,
    };
    model.settings_form = Some(reported);
    model.reported_settings = Some(reported);
}

/// Handle settings form events
pub fn handle(event: SettingsEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SettingsEvent::FieldChanged { field, value } => match &mut model.settings_form {
            Some(form) => {
                form.set(field, value);
                render()
            }
            None => {
                log::warn!("dropping edit of {field:?} before hydration");
                Command::done()
            }
        },

        SettingsEvent::SaveAndClose => {
            let save = match &model.settings_form {
                Some(form) => {
                    let url = build_url(&format!("/save_settings?{}", form.save_query()));
                    http_get_ack!(Settings, SettingsEvent, &url, SaveAcknowledged, "Save settings")
                }
                None => {
                    // nothing was hydrated this session, so there is nothing
                    // the user could have edited
                    log::warn!("closing without saving: no hydrated settings");
                    Command::done()
                }
            };
            Command::all([save, modal::close(model)])
        }

        SettingsEvent::SaveAcknowledged(result) => {
            match result {
                Ok(()) => log::debug!("settings sent OK"),
                Err(e) => log::warn!("saving settings failed: {e}"),
            }
            Command::done()
        }
    }
}
