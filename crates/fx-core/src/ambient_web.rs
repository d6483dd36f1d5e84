//! Background "spider web": a fixed pool of slowly drifting particles joined by
//! faint lines, with extra lines reaching toward the pointer.

use crate::color::{Rgb, WARM_PALETTE, WEB_LINE_COLOR};
use crate::constants::*;
use crate::entity::EntityKind;
use crate::ripple::{pick, sample};
use crate::scheduler::Tick;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct WebConfig {
    pub particle_count: usize,
    pub velocity_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub connection_distance: f32,
    pub pointer_distance: f32,
    pub attraction: f32,
    pub pair_opacity: f32,
    pub pointer_opacity: f32,
    pub palette: &'static [Rgb],
    pub line_color: Rgb,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            particle_count: WEB_PARTICLE_COUNT,
            velocity_max: WEB_VELOCITY_MAX,
            size_min: WEB_SIZE_MIN,
            size_max: WEB_SIZE_MAX,
            connection_distance: WEB_CONNECTION_DISTANCE,
            pointer_distance: WEB_POINTER_DISTANCE,
            attraction: WEB_ATTRACTION,
            pair_opacity: WEB_PAIR_OPACITY,
            pointer_opacity: WEB_POINTER_OPACITY,
            palette: &WARM_PALETTE,
            line_color: WEB_LINE_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientParticle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: Rgb,
}

impl AmbientParticle {
    pub fn kind(&self) -> EntityKind {
        EntityKind::AmbientParticle
    }
}

/// Line opacity for two points `distance` apart: `(1 - distance / threshold) * scale`
/// while strictly inside the threshold, `None` otherwise.
#[inline]
pub fn connection_opacity(distance: f32, threshold: f32, scale: f32) -> Option<f32> {
    (distance < threshold).then(|| (1.0 - distance / threshold) * scale)
}

pub struct AmbientWeb {
    pub config: WebConfig,
    particles: Vec<AmbientParticle>,
    size: Vec2,
    pointer: Option<Vec2>,
    rng: StdRng,
}

impl AmbientWeb {
    pub fn new(config: WebConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut web = Self {
            config,
            particles: Vec::new(),
            size: Vec2::new(width, height),
            pointer: None,
            rng: StdRng::seed_from_u64(seed),
        };
        web.reset_pool();
        web
    }

    pub fn particles(&self) -> &[AmbientParticle] {
        &self.particles
    }

    /// Direct access for hosts that want to place particles themselves.
    pub fn particles_mut(&mut self) -> &mut [AmbientParticle] {
        &mut self.particles
    }

    pub fn viewport(&self) -> Vec2 {
        self.size
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn set_pointer(&mut self, at: Vec2) {
        self.pointer = Some(at);
    }

    /// New viewport size; every particle is discarded and respawned.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.reset_pool();
    }

    fn reset_pool(&mut self) {
        let cfg = &self.config;
        let size = self.size;
        let v = cfg.velocity_max;
        let rng = &mut self.rng;
        self.particles = (0..cfg.particle_count)
            .map(|_| AmbientParticle {
                position: Vec2::new(
                    sample(rng, &(0.0..size.x)),
                    sample(rng, &(0.0..size.y)),
                ),
                velocity: Vec2::new(sample(rng, &(-v..v)), sample(rng, &(-v..v))),
                size: sample(rng, &(cfg.size_min..cfg.size_max)),
                color: pick(rng, cfg.palette),
            })
            .collect();
        log::debug!(
            "[web] pool of {} particles for {:.0}x{:.0}",
            self.particles.len(),
            self.size.x,
            self.size.y
        );
    }

    /// Every unordered pair close enough to be joined, with its line opacity.
    pub fn connections(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let n = self.particles.len();
        let threshold = self.config.connection_distance;
        let scale = self.config.pair_opacity;
        (0..n).flat_map(move |i| {
            (i + 1..n).filter_map(move |j| {
                let d = self.particles[i]
                    .position
                    .distance(self.particles[j].position);
                connection_opacity(d, threshold, scale).map(|o| (i, j, o))
            })
        })
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        let line = self.config.line_color;
        for (i, j, opacity) in self.connections() {
            surface.line(
                self.particles[i].position,
                self.particles[j].position,
                WEB_PAIR_LINE_WIDTH,
                line.with_alpha(opacity),
            );
        }
        if let Some(pointer) = self.pointer {
            for p in &self.particles {
                let d = pointer.distance(p.position);
                if let Some(opacity) = connection_opacity(
                    d,
                    self.config.pointer_distance,
                    self.config.pointer_opacity,
                ) {
                    surface.line(
                        pointer,
                        p.position,
                        WEB_POINTER_LINE_WIDTH,
                        line.with_alpha(opacity),
                    );
                }
            }
        }
        for p in &self.particles {
            surface.fill_circle(p.position, p.size, p.color.with_alpha(1.0));
        }
    }
}

impl Tick for AmbientWeb {
    fn tick(&mut self, _dt: Duration) {
        let bounds = self.size;
        let reach = self.config.pointer_distance;
        let pull = self.config.attraction;
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.position += p.velocity;
            // Bounce without clamping: a particle may sit one step outside.
            if p.position.x < 0.0 || p.position.x > bounds.x {
                p.velocity.x = -p.velocity.x;
            }
            if p.position.y < 0.0 || p.position.y > bounds.y {
                p.velocity.y = -p.velocity.y;
            }
            if let Some(pointer) = pointer {
                let delta = pointer - p.position;
                let distance = delta.length();
                if distance < reach {
                    let force = (reach - distance) / reach;
                    p.position += delta * force * pull;
                }
            }
        }
    }
}
