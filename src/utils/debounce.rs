//! Trailing-edge debouncer driven by the UI tick

use std::time::{Duration, Instant};

/// Holds the latest value until `delay` has passed without a newer one.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replaces any pending value and restarts the delay.
    pub fn arm(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the pending value once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    /// Fires the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rearming_cancels_previous_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.arm("1.2", start);
        debouncer.arm("1.2.3", start + Duration::from_millis(200));

        // The first deadline passed, but it was superseded
        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("1.2.3")
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_flush_fires_immediately() {
        let mut debouncer = Debouncer::new(Duration::from_secs(5));
        debouncer.arm(1, Instant::now());
        assert_eq!(debouncer.flush(), Some(1));
        assert_eq!(debouncer.flush(), None);
        assert_eq!(debouncer.poll(Instant::now() + Duration::from_secs(10)), None);
    }
}
