//! Blocking delay providers.
//!
//! The session needs exactly one pause: the settling time after waking the
//! printer. It goes through [`Delay`] so tests can observe the pause
//! without sleeping.

use std::thread;
use std::time::Duration;

/// Blocks the calling thread for a duration.
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration)
    }
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Records requested delays without sleeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDelay {
    calls: Vec<Duration>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every requested duration, in call order.
    pub fn calls(&self) -> &[Duration] {
        &self.calls
    }

    /// Sum of all requested durations.
    pub fn total(&self) -> Duration {
        self.calls.iter().sum()
    }
}

impl Delay for RecordingDelay {
    fn delay(&mut self, duration: Duration) {
        self.calls.push(duration);
    }
}
