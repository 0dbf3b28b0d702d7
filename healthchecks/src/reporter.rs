// Module declarations for the reporter abstraction
pub mod mock;
pub mod state_reporter;
pub mod traits;

// Re-exports for convenience
pub use mock::MockReporter;
pub use state_reporter::StateReporter;
pub use traits::Reporter;
