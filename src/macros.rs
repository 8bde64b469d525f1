/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.enabled, Some(true))
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.status_busy, false;
///     model.status_label, None
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

/// Macro for HTTP GET requests expecting a JSON response.
/// Requires domain parameters for event wrapping.
///
/// # Example
/// ```ignore
/// http_get!(Power, PowerEvent, &build_url("/isenabled"), EnabledResponse, EnabledReply)
/// ```
#[macro_export]
macro_rules! http_get {
    ($domain:ident, $domain_event:ident, $url:expr, $response_event:ident, $response_type:ty) => {
        $crate::HttpCmd::get($url).build().then_send(|result| {
            let event_result: Result<$response_type, String> = match result {
                Ok(mut response) => {
                    $crate::parse_json_response(stringify!($response_event), &mut response)
                }
                Err(e) => Err(e.to_string()),
            };
            $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                event_result,
            ))
        })
    };
}

/// Fire-and-forget HTTP GET - the response body is ignored, only the status
/// is folded into an acknowledgement event.
///
/// Used for the toggle and save endpoints whose replies carry nothing the UI
/// needs; the acknowledgement handler just logs.
///
/// # Example
/// ```ignore
/// http_get_ack!(Power, PowerEvent, &build_url("/enable"), SetEnabledAcknowledged, "Enable")
/// ```
#[macro_export]
macro_rules! http_get_ack {
    ($domain:ident, $domain_event:ident, $url:expr, $ack_event:ident, $action:expr) => {
        $crate::HttpCmd::get($url).build().then_send(|result| {
            let event_result = $crate::process_status_response($action, result);
            $crate::events::Event::$domain($crate::events::$domain_event::$ack_event(event_result))
        })
    };
}
