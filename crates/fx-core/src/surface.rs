//! Drawing seam between the effects and whatever actually paints pixels.
//!
//! The web frontend implements [`Surface`] over a canvas 2D context; tests use
//! [`DrawList`] to record the commands an effect issues for one frame.

use crate::color::{Rgb, Rgba};
use glam::Vec2;

/// Soft shadow applied behind a filled shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub color: Rgb,
    pub blur: f32,
}

pub trait Surface {
    /// Erase the whole surface to transparent.
    fn clear(&mut self);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    /// Fill a closed polygon given in surface coordinates.
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba, glow: Option<Glow>);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear,
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Rgba,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Rgba,
        glow: Option<Glow>,
    },
}

/// Recording surface.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.cmds.iter().filter(|c| matches!(c, DrawCmd::Line { .. }))
    }

    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(*c)).count()
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.cmds.clear();
        self.cmds.push(DrawCmd::Clear);
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.cmds.push(DrawCmd::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.cmds.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba, glow: Option<Glow>) {
        self.cmds.push(DrawCmd::FillPolygon {
            points: points.to_vec(),
            color,
            glow,
        });
    }
}
