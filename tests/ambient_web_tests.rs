// Host-side tests for the ambient particle web.
// The web crate is wasm-only, so these drive fx-core directly with manual ticks.

use fx_core::*;
use glam::Vec2;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn web() -> AmbientWeb {
    AmbientWeb::new(WebConfig::default(), 1280.0, 720.0, 3)
}

/// Replace the pool with hand-placed particles so geometry is predictable.
fn place(web: &mut AmbientWeb, spots: &[(Vec2, Vec2)]) {
    let particles = web.particles_mut();
    for (p, (pos, vel)) in particles.iter_mut().zip(spots) {
        p.position = *pos;
        p.velocity = *vel;
    }
    // park the rest far away from each other and from the placed ones
    for (k, p) in particles.iter_mut().enumerate().skip(spots.len()) {
        p.position = Vec2::new(-100_000.0 - 1000.0 * k as f32, -100_000.0);
        p.velocity = Vec2::ZERO;
    }
}

#[test]
fn pool_is_eighty_after_init_and_resize() {
    let mut w = web();
    assert_eq!(w.particles().len(), 80);
    for p in w.particles() {
        assert!((0.0..=1280.0).contains(&p.position.x));
        assert!((0.0..=720.0).contains(&p.position.y));
        assert!(p.velocity.x.abs() <= 0.25 && p.velocity.y.abs() <= 0.25);
        assert!((1.0..=3.0).contains(&p.size));
        assert!(WARM_PALETTE.contains(&p.color));
        assert_eq!(p.kind(), EntityKind::AmbientParticle);
    }
    let before = w.particles().to_vec();
    w.resize(640.0, 480.0);
    assert_eq!(w.particles().len(), 80);
    assert_eq!(w.viewport(), Vec2::new(640.0, 480.0));
    assert_ne!(w.particles(), before.as_slice(), "pool was not rebuilt");
    for p in w.particles() {
        assert!((0.0..=640.0).contains(&p.position.x));
        assert!((0.0..=480.0).contains(&p.position.y));
    }
}

#[test]
fn particles_never_fade_or_disappear() {
    let mut w = web();
    for _ in 0..500 {
        w.tick(FRAME);
    }
    assert_eq!(w.particles().len(), 80);
}

#[test]
fn wall_bounce_flips_velocity_without_clamping() {
    let mut w = web();
    place(&mut w, &[(Vec2::new(1279.9, 100.0), Vec2::new(0.2, 0.0))]);
    w.tick(FRAME);
    let p = w.particles()[0].clone();
    assert!(p.position.x > 1280.0, "position should overshoot");
    assert!(p.velocity.x < 0.0);
    w.tick(FRAME);
    assert!(w.particles()[0].position.x < p.position.x + 1e-3);

    let mut w = web();
    place(&mut w, &[(Vec2::new(100.0, 0.1), Vec2::new(0.0, -0.2))]);
    w.tick(FRAME);
    let p = &w.particles()[0];
    assert!(p.position.y < 0.0);
    assert!(p.velocity.y > 0.0);
}

#[test]
fn pointer_pulls_nearby_particle_closer() {
    let mut w = web();
    place(&mut w, &[(Vec2::new(550.0, 500.0), Vec2::ZERO)]);
    let pointer = Vec2::new(500.0, 500.0);
    w.set_pointer(pointer);
    let projected = w.particles()[0].position + w.particles()[0].velocity;
    w.tick(FRAME);
    let after = w.particles()[0].position;
    assert!(after.distance(pointer) < projected.distance(pointer));
    // (200 - 50) / 200 * 0.02 of the 50px gap
    assert!((after.x - (550.0 - 50.0 * 0.75 * 0.02)).abs() < 1e-4);
}

#[test]
fn pointer_out_of_reach_leaves_particle_alone() {
    let mut w = web();
    place(&mut w, &[(Vec2::new(900.0, 500.0), Vec2::new(0.1, 0.0))]);
    w.set_pointer(Vec2::new(500.0, 500.0));
    w.tick(FRAME);
    assert!((w.particles()[0].position.x - 900.1).abs() < 1e-4);
}

#[test]
fn no_pointer_until_first_move() {
    let mut w = web();
    place(&mut w, &[(Vec2::new(10.0, 10.0), Vec2::ZERO)]);
    assert_eq!(w.pointer(), None);
    let mut list = DrawList::new();
    w.draw(&mut list);
    assert_eq!(list.lines().count(), 0);
}

#[test]
fn connection_opacity_falls_off_to_threshold() {
    assert_eq!(connection_opacity(150.0, 150.0, 0.3), None);
    assert_eq!(connection_opacity(151.0, 150.0, 0.3), None);
    let mut prev = f32::MAX;
    for d in (0..150).step_by(5) {
        let o = connection_opacity(d as f32, 150.0, 0.3).expect("inside threshold");
        assert!(o < prev, "opacity not decreasing at {d}");
        prev = o;
    }
    let edge = connection_opacity(149.999, 150.0, 0.3).expect("inside");
    assert!(edge > 0.0 && edge < 1e-4);
    assert!((connection_opacity(0.0, 150.0, 0.3).unwrap_or(0.0) - 0.3).abs() < 1e-6);
}

#[test]
fn pairs_connect_iff_closer_than_150() {
    let mut w = web();
    place(
        &mut w,
        &[
            (Vec2::new(100.0, 100.0), Vec2::ZERO),
            (Vec2::new(200.0, 100.0), Vec2::ZERO), // 100 from #0
            (Vec2::new(100.0, 260.0), Vec2::ZERO), // 160 from #0
        ],
    );
    let pairs: Vec<(usize, usize)> = w.connections().map(|(i, j, _)| (i, j)).collect();
    assert!(pairs.contains(&(0, 1)));
    assert!(!pairs.contains(&(0, 2)));
    for (i, j, o) in w.connections() {
        let d = w.particles()[i].position.distance(w.particles()[j].position);
        assert!(d < 150.0);
        assert!((o - (1.0 - d / 150.0) * 0.3).abs() < 1e-6);
    }
}

#[test]
fn draw_order_is_pairs_then_pointer_lines_then_particles() {
    let mut w = web();
    place(
        &mut w,
        &[
            (Vec2::new(100.0, 100.0), Vec2::ZERO),
            (Vec2::new(150.0, 100.0), Vec2::ZERO),
        ],
    );
    w.set_pointer(Vec2::new(100.0, 150.0));
    let mut list = DrawList::new();
    w.draw(&mut list);

    let kinds: Vec<&str> = list
        .cmds
        .iter()
        .map(|c| match c {
            DrawCmd::Clear => "clear",
            DrawCmd::Line { width, .. } if *width == 0.5 => "pair",
            DrawCmd::Line { .. } => "pointer",
            DrawCmd::FillCircle { .. } => "dot",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds[0], "clear");
    assert_eq!(kinds.iter().filter(|k| **k == "pair").count(), 1);
    assert_eq!(kinds.iter().filter(|k| **k == "pointer").count(), 2);
    assert_eq!(kinds.iter().filter(|k| **k == "dot").count(), 80);
    let last_line = kinds.iter().rposition(|k| *k == "pair" || *k == "pointer");
    let first_dot = kinds.iter().position(|k| *k == "dot");
    assert!(last_line < first_dot);
    let first_pointer = kinds.iter().position(|k| *k == "pointer");
    let pair = kinds.iter().position(|k| *k == "pair");
    assert!(pair < first_pointer);

    for cmd in list.lines() {
        if let DrawCmd::Line { from, to, width, color } = cmd {
            assert_eq!(color.rgb, WEB_LINE_COLOR);
            if *width == 1.0 {
                assert_eq!(*from, Vec2::new(100.0, 150.0));
                let d = from.distance(*to);
                assert!((color.alpha - (1.0 - d / 200.0) * 0.5).abs() < 1e-6);
            }
        }
    }
}

#[test]
fn pair_pass_is_bounded_by_pool_size() {
    let mut w = AmbientWeb::new(WebConfig::default(), 10.0, 10.0, 9);
    // every particle sits inside a 10px box, so every pair connects
    assert_eq!(w.connections().count(), 80 * 79 / 2);
    w.resize(10.0, 10.0);
    assert_eq!(w.connections().count(), 3160);
}
