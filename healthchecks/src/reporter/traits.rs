use crate::render::render;
use axum::response::Response;

/// Liveness and readiness state as seen by an orchestrator
///
/// Implementations must be safe to share across request handlers and
/// background tasks. Setters return the value they stored.
pub trait Reporter: Send + Sync {
    /// Set the liveness flag
    fn set_healthy(&self, healthy: bool) -> bool;

    /// Set the readiness flag
    fn set_ready(&self, ready: bool) -> bool;

    fn is_healthy(&self) -> bool;

    fn is_ready(&self) -> bool;

    /// Render the liveness flag as an HTTP response
    fn render_health(&self) -> Response {
        render(self.is_healthy())
    }

    /// Render the readiness flag as an HTTP response
    fn render_ready(&self) -> Response {
        render(self.is_ready())
    }
}
