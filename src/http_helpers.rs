//! HTTP helper functions for the Crux Core
//!
//! Common response handling shared by the request macros, kept as plain
//! functions so they stay debuggable and testable.

use crux_http::Response;

/// Base URL for the appliance HTTP endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase`).
/// The UI shell strips this prefix before sending requests via `fetch()`,
/// making them relative to the page origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use litterbox_ui_core::http_helpers::build_url;
/// let url = build_url("/stats");
/// assert_eq!(url, "https://relative/stats");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts an error message from a non-success HTTP response.
pub fn extract_error_message(action: &str, response: &mut Response<Vec<u8>>) -> String {
    let status = response.status().to_string();

    match response.take_body() {
        Some(body) if !body.is_empty() => match String::from_utf8(body) {
            Ok(msg) => format!("{action} failed: HTTP {status}: {msg}"),
            Err(e) => format!("{action} failed: HTTP {status} (Invalid UTF-8: {e})"),
        },
        _ => format!("{action} failed: HTTP {status}"),
    }
}

/// Parse JSON from a response body.
///
/// Returns an error if the response is not successful or parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<T, String> {
    if !is_response_success(response) {
        return Err(extract_error_message(action, response));
    }

    match response.take_body() {
        Some(body) => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        None => Err(format!("{action}: Empty response body")),
    }
}

/// Check the response status only, for endpoints whose body is ignored.
pub fn check_response_status(action: &str, response: &mut Response<Vec<u8>>) -> Result<(), String> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(extract_error_message(action, response))
    }
}

/// Process an HTTP result and parse the JSON body
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, String> {
    match result {
        Ok(mut response) => parse_json_response(action, &mut response),
        Err(e) => Err(e.to_string()),
    }
}

/// Process an HTTP result, checking the status only
pub fn process_status_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), String> {
    match result {
        Ok(mut response) => check_response_status(action, &mut response),
        Err(e) => Err(e.to_string()),
    }
}

// Note: Unit tests for these helpers are not included because crux_http::Response
// has a private constructor. They are exercised through the update handlers that
// consume the request macros.
