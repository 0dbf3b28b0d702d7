use crate::probe::Probe;
use crate::reporter::traits::Reporter;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    healthy: bool,
    ready: bool,
    calls: Vec<(Probe, bool)>,
}

/// Mock implementation of Reporter for unit testing
///
/// Records every setter call so tests can assert on the order in which an
/// application flipped its probes. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MockReporter {
    state: Arc<Mutex<MockState>>,
}

impl MockReporter {
    /// Create a new mock with both flags unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Every setter call seen so far, oldest first
    pub fn calls(&self) -> Vec<(Probe, bool)> {
        self.state.lock().unwrap().calls.clone()
    }

    /// The last value set for a probe, if any
    pub fn last_set(&self, probe: Probe) -> Option<bool> {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .rev()
            .find(|(p, _)| *p == probe)
            .map(|(_, value)| *value)
    }

    fn record(&self, probe: Probe, value: bool) -> bool {
        let mut state = self.state.lock().unwrap();
        match probe {
            Probe::Health => state.healthy = value,
            Probe::Ready => state.ready = value,
        }
        state.calls.push((probe, value));
        value
    }
}

impl Reporter for MockReporter {
    fn set_healthy(&self, healthy: bool) -> bool {
        self.record(Probe::Health, healthy)
    }

    fn set_ready(&self, ready: bool) -> bool {
        self.record(Probe::Ready, ready)
    }

    fn is_healthy(&self) -> bool {
        self.state.lock().unwrap().healthy
    }

    fn is_ready(&self) -> bool {
        self.state.lock().unwrap().ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_mock_starts_empty() {
        let mock = MockReporter::new();
        assert!(mock.calls().is_empty());
        assert!(!mock.is_healthy());
        assert!(!mock.is_ready());
        assert_eq!(mock.last_set(Probe::Health), None);
    }

    #[test]
    fn test_mock_records_calls_in_order() {
        let mock = MockReporter::new();

        mock.set_healthy(true);
        mock.set_ready(true);
        mock.set_ready(false);

        assert_eq!(
            mock.calls(),
            vec![
                (Probe::Health, true),
                (Probe::Ready, true),
                (Probe::Ready, false)
            ]
        );
        assert_eq!(mock.last_set(Probe::Ready), Some(false));
        assert_eq!(mock.last_set(Probe::Health), Some(true));
    }

    #[test]
    fn test_mock_clone_shares_state() {
        let mock = MockReporter::new();
        let cloned = mock.clone();

        cloned.set_ready(true);

        assert!(mock.is_ready());
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn test_mock_renders_through_trait() {
        let mock = MockReporter::new();
        mock.set_healthy(true);

        assert_eq!(mock.render_health().status(), StatusCode::OK);
        assert_eq!(
            mock.render_ready().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
