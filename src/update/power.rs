use crux_core::{render::render, Command};

use crate::events::{Event, PowerEvent};
use crate::http_helpers::build_url;
use crate::model::Model;
use crate::types::EnabledReply;
use crate::update_field;
use crate::Effect;
use crate::{http_get, http_get_ack};

/// Query the main switch position. Issued once at page load.
pub fn fetch_enabled() -> Command<Effect, Event> {
    http_get!(
        Power,
        PowerEvent,
        &build_url("/isenabled"),
        EnabledResponse,
        EnabledReply
    )
}

/// Handle main switch events
pub fn handle(event: PowerEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        PowerEvent::SetEnabled { enabled } => {
            // reflect the toggle right away; the request is fire-and-forget
            model.enabled = Some(enabled);
            let (endpoint, action) = if enabled {
                ("/enable", "Enable")
            } else {
                ("/disable", "Disable")
            };
            Command::all([
                render(),
                http_get_ack!(
                    Power,
                    PowerEvent,
                    &build_url(endpoint),
                    SetEnabledAcknowledged,
                    action
                ),
            ])
        }

        PowerEvent::EnabledResponse(result) => match result {
            Ok(reply) => update_field!(model.enabled, Some(reply.result)),
            Err(e) => {
                // switch label stays busy; the query is not retried
                log::warn!("querying the main switch failed: {e}");
                Command::done()
            }
        },

        PowerEvent::SetEnabledAcknowledged(result) => {
            if let Err(e) = result {
                log::warn!("toggling the main switch failed: {e}");
            }
            Command::done()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_response_fills_the_switch() {
        let mut model = Model::default();
        assert!(model.enabled.is_none());

        let _ = handle(
            PowerEvent::EnabledResponse(Ok(EnabledReply { result: true })),
            &mut model,
        );

        assert_eq!(model.enabled, Some(true));
    }

    #[test]
    fn failed_query_leaves_the_switch_busy() {
        let mut model = Model::default();

        let _ = handle(
            PowerEvent::EnabledResponse(Err("unreachable".to_string())),
            &mut model,
        );

        assert!(model.enabled.is_none());
    }

    #[test]
    fn toggle_updates_optimistically() {
        let mut model = Model::default();

        let _ = handle(PowerEvent::SetEnabled { enabled: false }, &mut model);
        assert_eq!(model.enabled, Some(false));

        let _ = handle(PowerEvent::SetEnabled { enabled: true }, &mut model);
        assert_eq!(model.enabled, Some(true));
    }

    #[test]
    fn acknowledgements_do_not_touch_the_model() {
        let mut model = Model::default();
        let _ = handle(PowerEvent::SetEnabled { enabled: true }, &mut model);

        let _ = handle(
            PowerEvent::SetEnabledAcknowledged(Err("lost".to_string())),
            &mut model,
        );

        assert_eq!(model.enabled, Some(true));
    }
}
