use crate::handlers;
use crate::reporter::Reporter;
use crate::state::ProbeState;
use axum::{routing::any, Router};
use std::sync::Arc;

pub const DEFAULT_HEALTH_PATH: &str = "/healthz";
pub const DEFAULT_READY_PATH: &str = "/readyz";

/// Build a router serving the probes on `/healthz` and `/readyz`
///
/// The result carries no middleware and can be merged into the embedding
/// application's own router.
pub fn routes(reporter: Arc<dyn Reporter>) -> Router {
    routes_at(DEFAULT_HEALTH_PATH, DEFAULT_READY_PATH, reporter)
}

/// Build a router serving the probes on custom paths
///
/// Probes answer every method; only the stored flag decides the response.
///
/// # Panics
///
/// Panics if both paths are the same, or if either one is not a valid
/// static route (for example it does not start with `/`, or a segment
/// starts with `:` or `*`). Validate user supplied paths before calling.
pub fn routes_at(health_path: &str, ready_path: &str, reporter: Arc<dyn Reporter>) -> Router {
    Router::new()
        .route(health_path, any(handlers::health_handler))
        .route(ready_path, any(handlers::ready_handler))
        .with_state(ProbeState::new(reporter))
}
