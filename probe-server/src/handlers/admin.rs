use crate::error::{ServerError, ServerResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use healthchecks::ProbeState;
use serde::{Deserialize, Serialize};

/// Current value of both probe flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub healthy: bool,
    pub ready: bool,
}

/// Partial update; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateUpdate {
    pub healthy: Option<bool>,
    pub ready: Option<bool>,
}

fn snapshot(state: &ProbeState) -> StateSnapshot {
    StateSnapshot {
        healthy: state.reporter.is_healthy(),
        ready: state.reporter.is_ready(),
    }
}

pub async fn get_state_handler(State(state): State<ProbeState>) -> Json<StateSnapshot> {
    Json(snapshot(&state))
}

/// Flip probe flags at runtime, e.g. to take an instance out of rotation
/// for maintenance without restarting it
pub async fn put_state_handler(
    State(state): State<ProbeState>,
    payload: Result<Json<StateUpdate>, JsonRejection>,
) -> ServerResult<Json<StateSnapshot>> {
    let Json(update) = payload?;

    if update.healthy.is_none() && update.ready.is_none() {
        return Err(ServerError::InvalidInput(
            "expected at least one of \"healthy\" or \"ready\"".to_string(),
        ));
    }

    if let Some(healthy) = update.healthy {
        state.reporter.set_healthy(healthy);
    }
    if let Some(ready) = update.ready {
        state.reporter.set_ready(ready);
    }

    tracing::info!(?update, "Probe state updated through admin endpoint");

    Ok(Json(snapshot(&state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthchecks::{MockReporter, Probe, Reporter};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_state_handler() {
        let mock = MockReporter::new();
        mock.set_ready(true);
        let state = ProbeState::new(Arc::new(mock));

        let response = get_state_handler(State(state)).await;

        assert_eq!(
            response.0,
            StateSnapshot {
                healthy: false,
                ready: true
            }
        );
    }

    #[tokio::test]
    async fn test_put_state_handler_partial_update() {
        let mock = MockReporter::new();
        let state = ProbeState::new(Arc::new(mock.clone()));

        let update = StateUpdate {
            healthy: Some(true),
            ready: None,
        };
        let response = put_state_handler(State(state), Ok(Json(update))).await.unwrap();

        assert_eq!(
            response.0,
            StateSnapshot {
                healthy: true,
                ready: false
            }
        );
        assert_eq!(mock.calls(), vec![(Probe::Health, true)]);
    }

    #[tokio::test]
    async fn test_put_state_handler_empty_update() {
        let mock = MockReporter::new();
        let state = ProbeState::new(Arc::new(mock.clone()));

        let result = put_state_handler(State(state), Ok(Json(StateUpdate::default()))).await;

        match result {
            Err(ServerError::InvalidInput(_)) => {}
            other => panic!("Expected InvalidInput error, got {:?}", other.map(|j| j.0)),
        }
        assert!(mock.calls().is_empty());
    }
}
