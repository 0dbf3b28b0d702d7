use crate::state::ProbeState;
use axum::extract::State;
use axum::response::Response;

/// Liveness probe endpoint
///
/// Returns 200 `OK` while the application reports itself healthy, 500
/// `NOT OK` otherwise. The request itself is ignored.
pub async fn health_handler(State(state): State<ProbeState>) -> Response {
    state.reporter.render_health()
}
