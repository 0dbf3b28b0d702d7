use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub const OK_MESSAGE: &str = "OK";
pub const NOT_OK_MESSAGE: &str = "NOT OK";

/// Render a probe flag as a plain-text HTTP response
///
/// `true` maps to 200 `OK`, `false` maps to 500 `NOT OK`. Orchestrators
/// polling the endpoint only look at the status code.
pub fn render(state: bool) -> Response {
    let (status, message) = if state {
        (StatusCode::OK, OK_MESSAGE)
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, NOT_OK_MESSAGE)
    };

    (status, [(header::CONTENT_TYPE, "text/plain")], message).into_response()
}
