use crux_core::{render::render, Command};

use crate::commands::timer::TimerOutput;
use crate::events::{Event, ModalEvent};
use crate::model::Model;
use crate::types::{ModalPhase, PageMetrics};
use crate::update::polling;
use crate::{Effect, TimerCmd};

/// Duration of the CSS open/close transition. Must stay in sync with the
/// stylesheet.
pub const MODAL_ANIMATION_MS: u64 = 400;

/// Handle dialog lifecycle events
pub fn handle(event: ModalEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ModalEvent::Open { modal_id, page } => open(modal_id, page, model),
        ModalEvent::Close => close(model),
        ModalEvent::DocumentClicked { inside_content } => {
            if model.modal.accepts_dismissal() && !inside_content {
                close(model)
            } else {
                Command::done()
            }
        }
        ModalEvent::AnimationTimer(output) => handle_animation_timer(output, model),
    }
}

/// Begin showing a dialog and start the status polling session with it.
fn open(modal_id: String, page: PageMetrics, model: &mut Model) -> Command<Effect, Event> {
    if !matches!(model.modal.phase, ModalPhase::Closed) {
        // the surrounding page never stacks dialogs
        log::warn!("ignoring open request for {modal_id} while a dialog is tracked");
        return Command::done();
    }

    model.modal.phase = ModalPhase::Opening;
    model.modal.modal_id = Some(modal_id);
    model.modal.scrollbar_compensation_px = page
        .needs_scrollbar_compensation()
        .then_some(page.scrollbar_width);

    let animation = arm_animation_timer(model);
    // polling starts as soon as the visual open begins
    let session = polling::start(model);

    Command::all([render(), animation, session])
}

/// Begin hiding the dialog. The phase leaves `Open` right away, so a click
/// landing during the closing animation cannot re-trigger dismissal, and
/// polling stops before the visual close begins.
pub fn close(model: &mut Model) -> Command<Effect, Event> {
    if !matches!(model.modal.phase, ModalPhase::Opening | ModalPhase::Open) {
        return Command::done();
    }

    let session = polling::stop(model);
    model.modal.phase = ModalPhase::Closing;
    let animation = arm_animation_timer(model);

    Command::all([session, render(), animation])
}

fn arm_animation_timer(model: &mut Model) -> Command<Effect, Event> {
    let timer = model.next_timer();
    model.modal.animation_timer = Some(timer);
    TimerCmd::start(timer, MODAL_ANIMATION_MS)
        .build()
        .then_send(|output| Event::Modal(ModalEvent::AnimationTimer(output)))
}

/// Finish the transition the recorded timer belongs to. Re-arming the timer
/// (open interrupted by close) orphans the earlier handle, so a late fire
/// from the interrupted transition is ignored here.
fn handle_animation_timer(output: TimerOutput, model: &mut Model) -> Command<Effect, Event> {
    let TimerOutput::Fired { id } = output else {
        return Command::done();
    };
    if model.modal.animation_timer != Some(id) {
        return Command::done();
    }
    model.modal.animation_timer = None;

    match model.modal.phase {
        ModalPhase::Opening => {
            model.modal.phase = ModalPhase::Open;
            render()
        }
        ModalPhase::Closing => {
            model.modal.phase = ModalPhase::Closed;
            model.modal.modal_id = None;
            model.modal.scrollbar_compensation_px = None;
            render()
        }
        _ => Command::done(),
    }
}
