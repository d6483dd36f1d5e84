//! Pieces shared by every transient entity: its kind and its fade clock.

use crate::constants::{FADE_FRAMES, FADE_PER_FRAME};

/// Determines the update and draw rule applied to an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Ring,
    RadialParticle,
    Star,
    AmbientParticle,
}

/// Frame-counted fade. Opacity is derived from the integer age so the removal
/// frame is exact: `max(0, 1 - 0.02 * age)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fade {
    age: u32,
}

impl Fade {
    #[inline]
    pub fn step(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        if self.is_faded() {
            0.0
        } else {
            (1.0 - FADE_PER_FRAME * self.age as f32).max(0.0)
        }
    }

    #[inline]
    pub fn is_faded(&self) -> bool {
        self.age >= FADE_FRAMES
    }
}
