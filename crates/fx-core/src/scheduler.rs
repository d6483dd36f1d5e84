//! Frame driving without the browser.
//!
//! Every animated component implements [`Tick`]; the web frontend calls it
//! from `requestAnimationFrame`, tests call it by hand. Components that wait
//! on wall-clock delays (theme swap, typewriter) queue their work on a
//! [`Timeline`] instead of using timers.

use smallvec::SmallVec;
use std::time::Duration;

pub trait Tick {
    /// Advance by one animation frame that took `dt` of wall-clock time.
    /// Frame-stepped effects ignore `dt` and move a fixed amount per call.
    fn tick(&mut self, dt: Duration);
}

/// Delayed-event queue driven by accumulated `dt`.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    now: Duration,
    pending: Vec<(Duration, E)>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            pending: Vec::new(),
        }
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `event` to fire `delay` after the current time. Events due at the
    /// same instant fire in the order they were scheduled.
    pub fn schedule(&mut self, delay: Duration, event: E) {
        let due = self.now + delay;
        let at = self.pending.partition_point(|(t, _)| *t <= due);
        self.pending.insert(at, (due, event));
    }

    /// Move time forward and return every event that became due, oldest first.
    pub fn advance(&mut self, dt: Duration) -> SmallVec<[E; 2]> {
        self.now += dt;
        let ready = self.pending.partition_point(|(t, _)| *t <= self.now);
        self.pending.drain(..ready).map(|(_, e)| e).collect()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_fires_in_due_order() {
        let mut tl = Timeline::new();
        tl.schedule(Duration::from_millis(300), "late");
        tl.schedule(Duration::from_millis(100), "early");
        tl.schedule(Duration::from_millis(100), "early-2");
        assert!(tl.advance(Duration::from_millis(99)).is_empty());
        let fired = tl.advance(Duration::from_millis(1));
        assert_eq!(fired.as_slice(), &["early", "early-2"]);
        let fired = tl.advance(Duration::from_millis(500));
        assert_eq!(fired.as_slice(), &["late"]);
        assert!(tl.is_idle());
    }
}
