//! Twinkling stars left behind the pointer as it moves.

use crate::color::{Rgb, STAR_PALETTE};
use crate::constants::*;
use crate::entity::{EntityKind, Fade};
use crate::ripple::{pick, sample};
use crate::scheduler::Tick;
use crate::surface::{Glow, Surface};
use glam::Vec2;
use rand::prelude::*;
use std::collections::VecDeque;
use std::f32::consts::{PI, TAU};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct StarTrailConfig {
    pub capacity: usize,
    pub jitter: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub rotation_speed_max: f32,
    pub glow_blur: f32,
    pub palette: &'static [Rgb],
}

impl Default for StarTrailConfig {
    fn default() -> Self {
        Self {
            capacity: STAR_TRAIL_CAPACITY,
            jitter: STAR_JITTER,
            size_min: STAR_SIZE_MIN,
            size_max: STAR_SIZE_MAX,
            rotation_speed_max: STAR_ROTATION_SPEED_MAX,
            glow_blur: STAR_GLOW_BLUR,
            palette: &STAR_PALETTE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub color: Rgb,
    pub fade: Fade,
}

impl Star {
    pub fn kind(&self) -> EntityKind {
        EntityKind::Star
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    /// Vertices of the rotated five-pointed star, alternating outer and inner
    /// radius every `PI / 5`.
    pub fn outline(&self) -> [Vec2; STAR_SPIKES * 2] {
        let outer = self.size;
        let inner = self.size * STAR_INNER_RATIO;
        let step = PI / STAR_SPIKES as f32;
        std::array::from_fn(|j| {
            let radius = if j % 2 == 0 { outer } else { inner };
            self.position + Vec2::from_angle(self.rotation + step * j as f32) * radius
        })
    }
}

pub struct StarTrail {
    pub config: StarTrailConfig,
    stars: VecDeque<Star>,
    rng: StdRng,
}

impl StarTrail {
    pub fn new(config: StarTrailConfig, seed: u64) -> Self {
        let capacity = config.capacity;
        Self {
            config,
            stars: VecDeque::with_capacity(capacity + 1),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Stars from oldest to newest.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Drop one star near the pointer, evicting the oldest past capacity.
    pub fn spawn(&mut self, pointer: Vec2) {
        let cfg = &self.config;
        let j = cfg.jitter;
        let offset = Vec2::new(
            sample(&mut self.rng, &(-j..j)),
            sample(&mut self.rng, &(-j..j)),
        );
        let s = cfg.rotation_speed_max;
        let star = Star {
            position: pointer + offset,
            size: sample(&mut self.rng, &(cfg.size_min..cfg.size_max)),
            rotation: self.rng.gen_range(0.0..TAU),
            rotation_speed: sample(&mut self.rng, &(-s..s)),
            color: pick(&mut self.rng, cfg.palette),
            fade: Fade::default(),
        };
        self.stars.push_back(star);
        while self.stars.len() > cfg.capacity {
            self.stars.pop_front();
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for star in &self.stars {
            let glow = Glow {
                color: star.color,
                blur: self.config.glow_blur,
            };
            surface.fill_polygon(
                &star.outline(),
                star.color.with_alpha(star.opacity()),
                Some(glow),
            );
        }
    }
}

impl Tick for StarTrail {
    fn tick(&mut self, _dt: Duration) {
        for star in &mut self.stars {
            star.rotation += star.rotation_speed;
            star.fade.step();
        }
        self.stars.retain(|s| !s.fade.is_faded());
    }
}
