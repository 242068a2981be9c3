use instant::Instant;

/// Session wall clock measured in milliseconds since start.
///
/// Components never read time themselves; the driver samples this once per
/// tick and threads the value through the frame context, so tests can
/// fabricate timestamps without waiting.
#[derive(Debug, Clone)]
pub struct SessionClock {
    origin: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}
