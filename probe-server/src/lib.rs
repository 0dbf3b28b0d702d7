pub mod config;
pub mod error;
pub mod handlers;
pub mod lifecycle;
pub mod server;

// Re-exports for convenience
pub use config::Config;
pub use error::{ServerError, ServerResult};
