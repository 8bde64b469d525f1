pub mod commands;
pub mod events;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::timer::{TimerId, TimerOperation, TimerOutput},
    events::Event,
    http_helpers::{
        build_url, check_response_status, extract_error_message, is_response_success,
        parse_json_response, process_json_response, process_status_response, BASE_URL,
    },
    model::Model,
    types::*,
    update::modal::MODAL_ANIMATION_MS,
    update::polling::{
        NOMINAL_POLL_INTERVAL_MS, OFFLINE_POLL_INTERVAL_MS, STATUS_REQUEST_TIMEOUT_MS,
    },
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Timer(TimerOperation),
}

pub type TimerCmd = crate::commands::timer::Timer<Effect, Event>;
pub type HttpCmd = crux_http::command::Http<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
