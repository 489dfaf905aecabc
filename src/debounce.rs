/*!
Coalesce bursts of work into a single run once things go quiet.
*/
use std::time::{Duration, Instant};

/// The delay used for live search when nothing else is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// A cancellable delayed task.
///
/// Scheduling replaces whatever was pending, so only the value that survives the whole delay
/// without being replaced is ever fired.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule the value to fire once the delay has passed, cancelling anything pending.
    pub fn schedule(&mut self, now: Instant, value: T) {
        self.pending = Some((now + self.delay, value));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// The instant at which the pending value is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending value if it is due.
    pub fn fire(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => {
                self.pending.take().map(|(_, value)| value)
            }
            _ => None,
        }
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
