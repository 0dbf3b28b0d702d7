// Module declarations for HTTP handlers
pub mod admin;

// Re-exports
pub use admin::{get_state_handler, put_state_handler, StateSnapshot, StateUpdate};
