use crate::probe::Probe;
use crate::reporter::traits::Reporter;
use std::sync::atomic::{AtomicBool, Ordering};

/// Reporter backed by one atomic flag per probe
///
/// Both flags start out `false`, so a freshly created reporter fails both
/// probes until the application says otherwise.
#[derive(Debug, Default)]
pub struct StateReporter {
    healthy: AtomicBool,
    ready: AtomicBool,
}

impl StateReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn store(flag: &AtomicBool, probe: Probe, value: bool) -> bool {
        let previous = flag.swap(value, Ordering::SeqCst);

        if previous != value {
            tracing::info!(probe = %probe, from = previous, to = value, "Probe state changed");
        } else {
            tracing::debug!(probe = %probe, value, "Probe state unchanged");
        }

        value
    }
}

impl Reporter for StateReporter {
    fn set_healthy(&self, healthy: bool) -> bool {
        Self::store(&self.healthy, Probe::Health, healthy)
    }

    fn set_ready(&self, ready: bool) -> bool {
        Self::store(&self.ready, Probe::Ready, ready)
    }

    fn is_healthy(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}
