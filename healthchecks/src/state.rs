use crate::reporter::Reporter;
use std::sync::Arc;

/// State shared by the probe handlers
///
/// Wraps the trait object in a concrete type so it can be used as Axum
/// router state.
#[derive(Clone)]
pub struct ProbeState {
    pub reporter: Arc<dyn Reporter>,
}

impl ProbeState {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }
}
