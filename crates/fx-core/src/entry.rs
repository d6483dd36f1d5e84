//! First-visit hero typewriter and scroll-triggered reveal bookkeeping.

use crate::constants::*;
use crate::scheduler::Tick;
use std::time::Duration;

/// Elements that fade in as they scroll into view.
pub const REVEAL_SELECTORS: &str = ".article-card, .article-full, .section-title, \
.profile-card, .stats, .quick-links, .random-post, .tags-cloud, .welcome-card";

#[derive(Clone, Copy, Debug)]
pub struct TypewriterTimings {
    pub start_delay: Duration,
    pub char_interval: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            start_delay: Duration::from_millis(TYPEWRITER_START_DELAY_MS),
            char_interval: Duration::from_millis(TYPEWRITER_CHAR_INTERVAL_MS),
        }
    }
}

/// Reveals `text` one character at a time: the first after `start_delay`,
/// then one more every `char_interval`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    timings: TypewriterTimings,
    elapsed: Duration,
    shown: usize,
    total: usize,
    dirty: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, timings: TypewriterTimings) -> Self {
        let text = text.into();
        let total = text.chars().count();
        Self {
            text,
            timings,
            elapsed: Duration::ZERO,
            shown: 0,
            total,
            dirty: false,
        }
    }

    pub fn visible(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }

    pub fn shown_chars(&self) -> usize {
        self.shown
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.total
    }

    /// Returns the visible text if it grew since the last call.
    pub fn take_update(&mut self) -> Option<&str> {
        if std::mem::take(&mut self.dirty) {
            Some(self.visible())
        } else {
            None
        }
    }

    fn due_chars(&self) -> usize {
        let Some(since_start) = self.elapsed.checked_sub(self.timings.start_delay) else {
            return 0;
        };
        let interval = self.timings.char_interval.as_nanos().max(1);
        let due = 1 + since_start.as_nanos() / interval;
        (due.min(self.total as u128)) as usize
    }
}

impl Tick for Typewriter {
    fn tick(&mut self, dt: Duration) {
        if self.is_done() {
            return;
        }
        self.elapsed += dt;
        let due = self.due_chars();
        if due > self.shown {
            self.shown = due;
            self.dirty = true;
        }
    }
}

/// Stagger class cycling `delay-1` .. `delay-5` by document order.
pub fn stagger_class(index: usize) -> String {
    format!("delay-{}", index % REVEAL_STAGGER_STEPS + 1)
}

/// Tracks which designated elements have already been revealed so each one
/// fires at most once.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Record that element `index` became visible. Returns true only the first
    /// time, when the host should add `visible` and stop observing it.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn remaining(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
