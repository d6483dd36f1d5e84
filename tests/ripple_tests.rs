// Host-side tests for the click ripple burst.
// The web crate is wasm-only, so these drive fx-core directly with manual ticks.

use fx_core::*;
use glam::Vec2;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn burst() -> RippleBurst {
    RippleBurst::new(RippleConfig::default(), 42)
}

#[test]
fn click_spawns_five_rings_and_twenty_particles() {
    let mut b = burst();
    b.spawn(Vec2::new(100.0, 100.0));
    assert_eq!(b.len(), 25);
    let rings = b
        .ripples()
        .iter()
        .filter(|r| r.kind() == EntityKind::Ring)
        .count();
    let particles = b
        .ripples()
        .iter()
        .filter(|r| r.kind() == EntityKind::RadialParticle)
        .count();
    assert_eq!(rings, 5);
    assert_eq!(particles, 20);
    for r in b.ripples() {
        assert_eq!(r.position, Vec2::new(100.0, 100.0));
        assert_eq!(r.radius, 0.0);
        assert_eq!(r.opacity(), 1.0);
        assert!(WARM_PALETTE.contains(&r.color));
    }
}

#[test]
fn ring_parameters_stay_in_range() {
    let mut b = burst();
    for i in 0..20 {
        b.spawn(Vec2::new(i as f32 * 10.0, 50.0));
    }
    for r in b.ripples() {
        if let RippleShape::Ring {
            growth,
            max_radius,
            line_width,
        } = r.shape
        {
            assert!((2.0..=4.0).contains(&growth), "growth {growth}");
            assert!((100.0..=200.0).contains(&max_radius), "max radius {max_radius}");
            assert!((2.0..=4.0).contains(&line_width), "width {line_width}");
        }
    }
}

#[test]
fn particles_fan_out_evenly_at_their_speed() {
    let mut b = burst();
    b.spawn(Vec2::ZERO);
    let particles: Vec<&Ripple> = b
        .ripples()
        .iter()
        .filter(|r| r.kind() == EntityKind::RadialParticle)
        .collect();
    for (i, p) in particles.iter().enumerate() {
        let RippleShape::Particle { velocity, growth } = p.shape else {
            panic!("expected a particle");
        };
        let speed = velocity.length();
        assert!((3.0 - 1e-4..=6.0 + 1e-4).contains(&speed), "speed {speed}");
        assert_eq!(growth, 0.5);
        let expected = Vec2::from_angle(std::f32::consts::TAU / 20.0 * i as f32);
        assert!(
            velocity.normalize().dot(expected) > 0.9999,
            "particle {i} points the wrong way"
        );
    }
}

#[test]
fn entities_grow_move_and_fade_each_frame() {
    let mut b = burst();
    b.spawn(Vec2::new(200.0, 200.0));
    let before: Vec<Ripple> = b.ripples().to_vec();
    b.tick(FRAME);
    for (old, new) in before.iter().zip(b.ripples()) {
        match old.shape {
            RippleShape::Ring { growth, .. } => {
                assert_eq!(new.position, old.position);
                assert!((new.radius - growth).abs() < 1e-6);
            }
            RippleShape::Particle { velocity, .. } => {
                assert_eq!(new.position, old.position + velocity);
                assert!((new.radius - 0.5).abs() < 1e-6);
            }
        }
        assert!((new.opacity() - 0.98).abs() < 1e-6);
    }
}

#[test]
fn opacity_follows_linear_fade_and_entities_vanish_at_zero() {
    let mut b = burst();
    b.spawn(Vec2::new(10.0, 10.0));
    for k in 1..=60u32 {
        b.tick(FRAME);
        let expected = (1.0 - 0.02 * k as f32).max(0.0);
        if expected <= 1e-6 {
            assert!(b.is_empty(), "entities still present at frame {k}");
        } else {
            assert_eq!(b.len(), 25, "frame {k}");
            for r in b.ripples() {
                assert!((r.opacity() - expected).abs() < 1e-5);
            }
        }
    }
}

#[test]
fn draw_strokes_rings_and_fills_particles() {
    let mut b = burst();
    b.spawn(Vec2::new(300.0, 300.0));
    b.tick(FRAME);
    let mut list = DrawList::new();
    b.draw(&mut list);
    assert_eq!(list.cmds.first(), Some(&DrawCmd::Clear));
    let strokes = list.count(|c| matches!(c, DrawCmd::StrokeCircle { .. }));
    let fills = list.count(|c| matches!(c, DrawCmd::FillCircle { .. }));
    assert_eq!(strokes, 5);
    assert_eq!(fills, 20);
    for cmd in &list.cmds {
        if let DrawCmd::StrokeCircle { color, .. } | DrawCmd::FillCircle { color, .. } = cmd {
            assert!((color.alpha - 0.98).abs() < 1e-6);
        }
    }
}

#[test]
fn empty_burst_still_ticks_and_clears() {
    let mut b = burst();
    b.tick(FRAME);
    let mut list = DrawList::new();
    b.draw(&mut list);
    assert_eq!(list.cmds, vec![DrawCmd::Clear]);
}
