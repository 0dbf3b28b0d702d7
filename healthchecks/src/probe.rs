use std::fmt;

/// Which of the two reported flags an operation concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    /// Liveness: the process itself is functioning
    Health,
    /// Readiness: the process can take traffic
    Ready,
}

impl Probe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Probe::Health => "health",
            Probe::Ready => "ready",
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
