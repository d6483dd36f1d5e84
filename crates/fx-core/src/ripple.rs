//! Click-triggered burst: expanding rings plus a radial spray of particles.

use crate::color::{Rgb, WARM_PALETTE};
use crate::constants::*;
use crate::entity::{EntityKind, Fade};
use crate::scheduler::Tick;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;
use std::ops::Range;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct RippleConfig {
    pub ring_count: usize,
    pub ring_speed: Range<f32>,
    pub ring_max_radius: Range<f32>,
    pub ring_width: Range<f32>,
    pub particle_count: usize,
    pub particle_speed: Range<f32>,
    pub particle_growth: f32,
    pub palette: &'static [Rgb],
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            ring_count: RIPPLE_RING_COUNT,
            ring_speed: RIPPLE_RING_SPEED_MIN..RIPPLE_RING_SPEED_MAX,
            ring_max_radius: RIPPLE_RING_MAX_RADIUS_MIN..RIPPLE_RING_MAX_RADIUS_MAX,
            ring_width: RIPPLE_RING_WIDTH_MIN..RIPPLE_RING_WIDTH_MAX,
            particle_count: RIPPLE_PARTICLE_COUNT,
            particle_speed: RIPPLE_PARTICLE_SPEED_MIN..RIPPLE_PARTICLE_SPEED_MAX,
            particle_growth: RIPPLE_PARTICLE_GROWTH,
            palette: &WARM_PALETTE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RippleShape {
    Ring {
        growth: f32,
        max_radius: f32,
        line_width: f32,
    },
    Particle {
        velocity: Vec2,
        growth: f32,
    },
}

#[derive(Clone, Debug)]
pub struct Ripple {
    pub position: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub shape: RippleShape,
    pub fade: Fade,
}

impl Ripple {
    pub fn kind(&self) -> EntityKind {
        match self.shape {
            RippleShape::Ring { .. } => EntityKind::Ring,
            RippleShape::Particle { .. } => EntityKind::RadialParticle,
        }
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    fn step(&mut self) {
        match self.shape {
            RippleShape::Ring { growth, .. } => self.radius += growth,
            RippleShape::Particle { velocity, growth } => {
                self.position += velocity;
                self.radius += growth;
            }
        }
        self.fade.step();
    }
}

pub struct RippleBurst {
    pub config: RippleConfig,
    ripples: Vec<Ripple>,
    rng: StdRng,
}

impl RippleBurst {
    pub fn new(config: RippleConfig, seed: u64) -> Self {
        Self {
            config,
            ripples: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Spawn one burst centered on a click at `at`.
    pub fn spawn(&mut self, at: Vec2) {
        let cfg = &self.config;
        let color = pick(&mut self.rng, cfg.palette);
        self.ripples.reserve(cfg.ring_count + cfg.particle_count);
        for _ in 0..cfg.ring_count {
            let shape = RippleShape::Ring {
                growth: sample(&mut self.rng, &cfg.ring_speed),
                max_radius: sample(&mut self.rng, &cfg.ring_max_radius),
                line_width: sample(&mut self.rng, &cfg.ring_width),
            };
            self.ripples.push(Ripple {
                position: at,
                radius: 0.0,
                color,
                shape,
                fade: Fade::default(),
            });
        }
        let n = cfg.particle_count.max(1) as f32;
        for i in 0..cfg.particle_count {
            let angle = TAU / n * i as f32;
            let speed = sample(&mut self.rng, &cfg.particle_speed);
            let shape = RippleShape::Particle {
                velocity: Vec2::from_angle(angle) * speed,
                growth: cfg.particle_growth,
            };
            self.ripples.push(Ripple {
                position: at,
                radius: 0.0,
                color,
                shape,
                fade: Fade::default(),
            });
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for r in &self.ripples {
            let color = r.color.with_alpha(r.opacity());
            match r.shape {
                RippleShape::Ring { line_width, .. } => {
                    surface.stroke_circle(r.position, r.radius, line_width, color)
                }
                RippleShape::Particle { .. } => surface.fill_circle(r.position, r.radius, color),
            }
        }
    }
}

impl Tick for RippleBurst {
    fn tick(&mut self, _dt: Duration) {
        for r in &mut self.ripples {
            r.step();
        }
        self.ripples.retain(|r| !r.fade.is_faded());
    }
}

/// Uniform sample that tolerates an empty range.
pub(crate) fn sample(rng: &mut StdRng, range: &Range<f32>) -> f32 {
    if range.start < range.end {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

pub(crate) fn pick(rng: &mut StdRng, palette: &[Rgb]) -> Rgb {
    palette.choose(rng).copied().unwrap_or(Rgb::hex(0xffffff))
}
