//! Axis-aligned shapes for the paddle, bricks and ball
//!
//! Every shape is positioned by its centre. `left/right/top/bottom` are derived
//! from position and size, with y growing upward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, each channel in 0..=1
pub type Color = [f32; 4];

/// Opaque color from RGB channels
#[inline]
pub const fn rgb(r: f32, g: f32, b: f32) -> Color {
    [r, g, b, 1.0]
}

/// Shape variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned box
    Rect,
    /// Circle; size is always the diameter on both axes
    Circle { radius: f32 },
}

/// A drawable, boundable shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Shape {
    pub fn rect(pos: Vec2, size: Vec2, color: Color) -> Self {
        Self {
            kind: ShapeKind::Rect,
            pos,
            size,
            color,
        }
    }

    pub fn circle(pos: Vec2, radius: f32, color: Color) -> Self {
        Self {
            kind: ShapeKind::Circle { radius },
            pos,
            size: Vec2::splat(radius * 2.0),
            color,
        }
    }

    /// Circle radius, or None for rectangles
    pub fn radius(&self) -> Option<f32> {
        match self.kind {
            ShapeKind::Circle { radius } => Some(radius),
            ShapeKind::Rect => None,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn move_x(&mut self, dx: f32) {
        self.pos.x += dx;
    }
}

/// Inclusive separating-axis test on the bounding boxes of two shapes.
///
/// Touching edges count as contact.
pub fn bounds_overlap(a: &Shape, b: &Shape) -> bool {
    if a.right() < b.left() || b.right() < a.left() {
        return false;
    }
    if a.top() < b.bottom() || b.top() < a.bottom() {
        return false;
    }
    true
}

/// Overlap test dispatched on both shape kinds.
///
/// Circle-vs-rect deliberately reuses the bounding-box test against the
/// circle's box, so a ball registers a hit slightly early near corners.
pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    match (a.kind, b.kind) {
        (ShapeKind::Rect, ShapeKind::Rect)
        | (ShapeKind::Circle { .. }, ShapeKind::Rect)
        | (ShapeKind::Rect, ShapeKind::Circle { .. }) => bounds_overlap(a, b),
        (ShapeKind::Circle { radius: ra }, ShapeKind::Circle { radius: rb }) => {
            a.pos.distance(b.pos) <= ra + rb
        }
    }
}
