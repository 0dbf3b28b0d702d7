use crate::state::ProbeState;
use axum::extract::State;
use axum::response::Response;

pub async fn ready_handler(State(state): State<ProbeState>) -> Response {
    // Called by the orchestrator's readiness probe; a failing answer takes
    // the instance out of load balancing without restarting it
    state.reporter.render_ready()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::{MockReporter, Reporter};
    use axum::http::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_ready_handler() {
        let mock = MockReporter::new();
        let state = ProbeState::new(Arc::new(mock.clone()));

        let response = ready_handler(State(state.clone())).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        mock.set_ready(true);
        let response = ready_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
