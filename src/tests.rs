use crate::commands::timer::TimerOutput;
use crate::events::{Event, ModalEvent, PollingEvent, PowerEvent, SettingsEvent};
use crate::types::*;
use crate::update::polling::{NOMINAL_POLL_INTERVAL_MS, OFFLINE_POLL_INTERVAL_MS};
use crate::update::update;
use crate::Model;

fn open_event() -> Event {
    Event::Modal(ModalEvent::Open {
        modal_id: "settings-modal".to_string(),
        page: PageMetrics {
            content_height: 600,
            viewport_height: 900,
            scrollbar_width: 15,
        },
    })
}

fn finish_modal_animation(model: &mut Model) {
    let id = model.modal.animation_timer.expect("no transition running");
    let _ = update(
        Event::Modal(ModalEvent::AnimationTimer(TimerOutput::Fired { id })),
        model,
    );
}

fn poll_settles(model: &mut Model, json: &str) {
    let result = serde_json::from_str::<DeviceStatus>(json).map_err(|e| e.to_string());
    let epoch = model.session.epoch;
    let _ = update(
        Event::Polling(PollingEvent::StatusResponse { epoch, result }),
        model,
    );
}

fn poll_fails(model: &mut Model, error: &str) {
    let epoch = model.session.epoch;
    let _ = update(
        Event::Polling(PollingEvent::StatusResponse {
            epoch,
            result: Err(error.to_string()),
        }),
        model,
    );
}

fn fire_pending_poll(model: &mut Model) {
    let scheduled = model.session.pending_poll.expect("no poll scheduled");
    let _ = update(
        Event::Polling(PollingEvent::PollTimer(TimerOutput::Fired {
            id: scheduled.timer,
        })),
        model,
    );
}

#[test]
fn page_load_fills_the_main_switch() {
    let mut model = Model::default();

    let _ = update(Event::Initialize, &mut model);
    assert!(model.enabled.is_none());

    let _ = update(
        Event::Power(PowerEvent::EnabledResponse(Ok(EnabledReply { result: true }))),
        &mut model,
    );
    assert_eq!(model.enabled, Some(true));
}

#[test]
fn first_poll_hydrates_later_polls_only_relabel() {
    let mut model = Model::default();
    let _ = update(open_event(), &mut model);
    finish_modal_animation(&mut model);

    poll_settles(
        &mut model,
        r#"{"state":1,"waitduration":10,"cycleOvershoot":2,"emptyOvershoot":3}"#,
    );

    assert_eq!(model.status_label.as_deref(), Some("Idle"));
    let hydrated = SettingsForm {
        wait_duration: 10,
        cycle_overshoot: 2,
        empty_overshoot: 3,
    };
    assert_eq!(model.settings_form, Some(hydrated));
    assert_eq!(model.reported_settings, Some(hydrated));
    assert_eq!(
        model.session.pending_poll.unwrap().delay_ms,
        NOMINAL_POLL_INTERVAL_MS
    );

    fire_pending_poll(&mut model);
    poll_settles(
        &mut model,
        r#"{"state":4,"waitduration":55,"cycleOvershoot":9,"emptyOvershoot":9}"#,
    );

    assert_eq!(model.status_label.as_deref(), Some("Cycling (step 1)"));
    // the editable fields keep the first hydration
    assert_eq!(model.settings_form, Some(hydrated));
    assert_eq!(model.reported_settings, Some(hydrated));
}

#[test]
fn timed_out_poll_goes_offline_at_the_backoff_cadence() {
    let mut model = Model::default();
    let _ = update(open_event(), &mut model);
    finish_modal_animation(&mut model);

    poll_fails(&mut model, "request timed out");

    assert_eq!(model.status_label.as_deref(), Some("Offline"));
    assert_eq!(
        model.session.pending_poll.unwrap().delay_ms,
        OFFLINE_POLL_INTERVAL_MS
    );

    fire_pending_poll(&mut model);
    poll_fails(&mut model, "request timed out");

    // the backoff never escalates
    assert_eq!(
        model.session.pending_poll.unwrap().delay_ms,
        OFFLINE_POLL_INTERVAL_MS
    );
}

#[test]
fn closing_while_a_poll_is_in_flight_suppresses_its_completion() {
    let mut model = Model::default();
    let _ = update(open_event(), &mut model);
    finish_modal_animation(&mut model);
    let in_flight_epoch = model.session.epoch;

    let _ = update(Event::Modal(ModalEvent::Close), &mut model);
    assert!(!model.session.active);

    let result = serde_json::from_str::<DeviceStatus>(
        r#"{"state":1,"waitduration":10,"cycleOvershoot":2,"emptyOvershoot":3}"#,
    )
    .map_err(|e| e.to_string());
    let _ = update(
        Event::Polling(PollingEvent::StatusResponse {
            epoch: in_flight_epoch,
            result,
        }),
        &mut model,
    );

    // no label update, no hydration, no further schedule
    assert!(model.status_label.is_none());
    assert!(model.settings_form.is_none());
    assert!(model.session.pending_poll.is_none());
}

#[test]
fn reopening_starts_a_fresh_session_with_fresh_hydration() {
    let mut model = Model::default();
    let _ = update(open_event(), &mut model);
    finish_modal_animation(&mut model);
    poll_settles(
        &mut model,
        r#"{"state":1,"waitduration":10,"cycleOvershoot":2,"emptyOvershoot":3}"#,
    );

    let _ = update(
        Event::Modal(ModalEvent::DocumentClicked { inside_content: false }),
        &mut model,
    );
    finish_modal_animation(&mut model);
    assert_eq!(model.modal.phase, ModalPhase::Closed);
    assert!(model.status_busy);

    let _ = update(open_event(), &mut model);
    assert!(model.session.active);
    assert!(!model.session.hydrated);

    poll_settles(
        &mut model,
        r#"{"state":1,"waitduration":77,"cycleOvershoot":1,"emptyOvershoot":1}"#,
    );

    // the new session hydrates from scratch
    assert_eq!(model.settings_form.unwrap().wait_duration, 77);
}

#[test]
fn save_and_close_tears_the_session_down() {
    let mut model = Model::default();
    let _ = update(open_event(), &mut model);
    finish_modal_animation(&mut model);
    poll_settles(
        &mut model,
        r#"{"state":1,"waitduration":10,"cycleOvershoot":2,"emptyOvershoot":3}"#,
    );

    let _ = update(
        Event::Settings(SettingsEvent::FieldChanged {
            field: SettingsField::WaitDuration,
            value: 120,
        }),
        &mut model,
    );
    let _ = update(Event::Settings(SettingsEvent::SaveAndClose), &mut model);

    assert_eq!(model.modal.phase, ModalPhase::Closing);
    assert!(!model.session.active);
    assert!(model.session.pending_poll.is_none());

    finish_modal_animation(&mut model);
    assert_eq!(model.modal.phase, ModalPhase::Closed);
    assert!(model.modal.modal_id.is_none());
}

#[test]
fn out_of_catalog_state_renders_the_fallback_label() {
    let mut model = Model::default();
    let _ = update(open_event(), &mut model);
    finish_modal_animation(&mut model);

    poll_settles(
        &mut model,
        r#"{"state":99,"waitduration":0,"cycleOvershoot":0,"emptyOvershoot":0}"#,
    );

    assert_eq!(model.status_label.as_deref(), Some("Unknown"));
    // an unknown state is a display fallback, not a transport failure
    assert_eq!(
        model.session.pending_poll.unwrap().delay_ms,
        NOMINAL_POLL_INTERVAL_MS
    );
}
