//! Light/dark toggle with a full-screen transition overlay.
//!
//! A click shows the overlay at once, swaps the theme after a short delay and
//! hides the overlay again once it has been held for a while. The host drains
//! [`ThemeToggle::take_events`] after each tick and mirrors them to the page.

use crate::constants::{THEME_KEY, THEME_OVERLAY_HOLD_MS, THEME_SWAP_DELAY_MS};
use crate::scheduler::{Tick, Timeline};
use crate::state::Theme;
use crate::store::{persist, KvStore};
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct ThemeTimings {
    pub swap_delay: Duration,
    pub overlay_hold: Duration,
}

impl Default for ThemeTimings {
    fn default() -> Self {
        Self {
            swap_delay: Duration::from_millis(THEME_SWAP_DELAY_MS),
            overlay_hold: Duration::from_millis(THEME_OVERLAY_HOLD_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    OverlayShown,
    Applied(Theme),
    OverlayHidden,
}

#[derive(Clone, Copy, Debug)]
enum Pending {
    Swap,
    HideOverlay,
}

pub struct ThemeToggle<S: KvStore> {
    theme: Theme,
    overlay_active: bool,
    timings: ThemeTimings,
    timeline: Timeline<Pending>,
    events: SmallVec<[ThemeEvent; 4]>,
    store: S,
}

impl<S: KvStore> ThemeToggle<S> {
    pub fn new(theme: Theme, store: S, timings: ThemeTimings) -> Self {
        Self {
            theme,
            overlay_active: false,
            timings,
            timeline: Timeline::new(),
            events: SmallVec::new(),
            store,
        }
    }

    /// Theme currently shown on the page.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn overlay_active(&self) -> bool {
        self.overlay_active
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn button_label(&self) -> &'static str {
        button_label(self.theme)
    }

    pub fn overlay_icon(&self) -> &'static str {
        overlay_icon(self.theme)
    }

    pub fn toggle(&mut self) {
        if !self.overlay_active {
            self.overlay_active = true;
            self.events.push(ThemeEvent::OverlayShown);
        }
        self.timeline.schedule(self.timings.swap_delay, Pending::Swap);
    }

    pub fn take_events(&mut self) -> SmallVec<[ThemeEvent; 4]> {
        std::mem::take(&mut self.events)
    }
}

impl<S: KvStore> Tick for ThemeToggle<S> {
    fn tick(&mut self, dt: Duration) {
        for pending in self.timeline.advance(dt) {
            match pending {
                Pending::Swap => {
                    self.theme = self.theme.toggled();
                    persist(&mut self.store, THEME_KEY, self.theme.as_str());
                    log::info!("[theme] switched to {}", self.theme.as_str());
                    self.events.push(ThemeEvent::Applied(self.theme));
                    self.timeline
                        .schedule(self.timings.overlay_hold, Pending::HideOverlay);
                }
                Pending::HideOverlay => {
                    if self.overlay_active {
                        self.overlay_active = false;
                        self.events.push(ThemeEvent::OverlayHidden);
                    }
                }
            }
        }
    }
}

/// Button text offers the theme you would switch to.
pub fn button_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀️ 亮色",
        Theme::Light => "🌙 暗色",
    }
}

pub fn overlay_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "fa-solid fa-sun",
        Theme::Light => "fa-solid fa-moon",
    }
}
