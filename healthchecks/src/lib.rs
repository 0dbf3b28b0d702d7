pub mod handlers;
pub mod probe;
pub mod render;
pub mod reporter;
pub mod server;
pub mod state;

// Re-exports for convenience
pub use probe::Probe;
pub use render::{render, NOT_OK_MESSAGE, OK_MESSAGE};
pub use reporter::{MockReporter, Reporter, StateReporter};
pub use server::{routes, routes_at, DEFAULT_HEALTH_PATH, DEFAULT_READY_PATH};
pub use state::ProbeState;
