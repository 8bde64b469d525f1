use crux_core::{render::render, Command};

use crate::commands::timer::TimerOutput;
use crate::events::{Event, PollingEvent};
use crate::http_helpers::{build_url, process_json_response};
use crate::model::Model;
use crate::types::{DeviceStatus, ScheduledPoll, OFFLINE_LABEL};
use crate::update::settings;
use crate::{Effect, HttpCmd, TimerCmd};

/// Delay between polls while the appliance is answering.
pub const NOMINAL_POLL_INTERVAL_MS: u64 = 5_000;

/// Delay between polls while the appliance is unreachable. A single fixed
/// backoff step, repeated - it never escalates further.
pub const OFFLINE_POLL_INTERVAL_MS: u64 = 30_000;

/// Deadline for one status request. Enforced by the shell's fetch wrapper
/// (the wire protocol carries no deadline); the abort arrives here as an
/// error result and takes the offline path.
pub const STATUS_REQUEST_TIMEOUT_MS: u64 = 2_200;

/// Handle status polling events
pub fn handle(event: PollingEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        PollingEvent::Start => start(model),
        PollingEvent::Stop => stop(model),
        PollingEvent::StatusResponse { epoch, result } => {
            handle_status_response(epoch, result, model)
        }
        PollingEvent::PollTimer(output) => handle_poll_timer(output, model),
    }
}

/// Begin a polling session, or reset the running one in place.
///
/// Bumping the epoch orphans every outstanding completion of the previous
/// run, and the pending schedule is cancelled, so exactly one
/// request/schedule chain exists afterwards: the immediate first poll.
pub fn start(model: &mut Model) -> Command<Effect, Event> {
    let cancelled = cancel_pending(model);
    model.session.active = true;
    model.session.hydrated = false;
    model.session.epoch = model.session.epoch.wrapping_add(1);
    model.status_busy = true;

    Command::all([cancelled, render(), issue_poll(model)])
}

/// End the polling session and re-arm the busy marker for the next one.
pub fn stop(model: &mut Model) -> Command<Effect, Event> {
    model.session.active = false;
    model.session.hydrated = false;
    model.status_busy = true;

    Command::all([cancel_pending(model), render()])
}

fn cancel_pending(model: &mut Model) -> Command<Effect, Event> {
    match model.session.pending_poll.take() {
        Some(scheduled) => TimerCmd::cancel(scheduled.timer)
            .build()
            .then_send(|output| Event::Polling(PollingEvent::PollTimer(output))),
        None => Command::done(),
    }
}

fn issue_poll(model: &Model) -> Command<Effect, Event> {
    let epoch = model.session.epoch;
    HttpCmd::get(build_url("/stats")).build().then_send(move |result| {
        let result = process_json_response::<DeviceStatus>("Status poll", result);
        Event::Polling(PollingEvent::StatusResponse { epoch, result })
    })
}

fn schedule_next(model: &mut Model, delay_ms: u64) -> Command<Effect, Event> {
    let timer = model.next_timer();
    model.session.pending_poll = Some(ScheduledPoll { timer, delay_ms });
    TimerCmd::start(timer, delay_ms)
        .build()
        .then_send(|output| Event::Polling(PollingEvent::PollTimer(output)))
}

/// Apply one poll outcome and schedule the next poll.
///
/// Completions carrying a stale epoch - the session was stopped or restarted
/// while the request was in flight - are dropped without rendering or
/// rescheduling.
fn handle_status_response(
    epoch: u32,
    result: Result<DeviceStatus, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if !model.session.accepts(epoch) {
        log::debug!("dropping status completion from epoch {epoch}");
        return Command::done();
    }

    model.status_busy = false;

    match result {
        Ok(status) => {
            model.status_label = Some(status.state.label().to_string());
            if !model.session.hydrated {
                settings::hydrate(model, &status);
                model.session.hydrated = true;
            }
            model.device_status = Some(status);
            Command::all([render(), schedule_next(model, NOMINAL_POLL_INTERVAL_MS)])
        }
        Err(e) => {
            log::warn!("status poll failed: {e}");
            model.status_label = Some(OFFLINE_LABEL.to_string());
            Command::all([render(), schedule_next(model, OFFLINE_POLL_INTERVAL_MS)])
        }
    }
}

/// A poll is issued only for the schedule we still hold the handle of; a
/// cancelled timer or one from a torn-down schedule is ignored.
fn handle_poll_timer(output: TimerOutput, model: &mut Model) -> Command<Effect, Event> {
    let TimerOutput::Fired { id } = output else {
        return Command::done();
    };

    if !model.session.active || model.session.pending_poll.map(|p| p.timer) != Some(id) {
        return Command::done();
    }

    model.session.pending_poll = None;
    issue_poll(model)
}
