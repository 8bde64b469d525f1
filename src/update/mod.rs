pub mod modal;
pub mod polling;
pub mod power;
pub mod settings;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => Command::all([render(), power::fetch_enabled()]),

        Event::Modal(event) => modal::handle(event, model),
        Event::Polling(event) => polling::handle(event, model),
        Event::Settings(event) => settings::handle(event, model),
        Event::Power(event) => power::handle(event, model),
    }
}
