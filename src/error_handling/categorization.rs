//! Transport failure categorization.

/// Categorizes a `reqwest::Error` into a short label for logs.
///
/// Status codes are not considered: the lookup reads every response body
/// regardless of status, so status errors never reach this function.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> &'static str {
    if error.is_builder() {
        "builder"
    } else if error.is_redirect() {
        "redirect"
    } else if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_body() {
        "body"
    } else if error.is_decode() {
        "decode"
    } else if error.is_request() {
        "request"
    } else {
        "other"
    }
}
