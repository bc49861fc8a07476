use std::time::{Duration, Instant};

/// Measures a labelled span and logs it at debug level when finished.
#[derive(Debug)]
pub struct PerfTimer {
    label: String,
    started_at: Instant,
}

impl PerfTimer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started_at: Instant::now(),
        }
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.started_at.elapsed();
        log::debug!(
            "⏱️ {}: {:.2}ms",
            self.label,
            elapsed.as_secs_f64() * 1000.0
        );
        elapsed
    }
}
