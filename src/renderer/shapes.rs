//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{Shape, ShapeKind};

/// Segments used when tessellating circles
pub const CIRCLE_SEGMENTS: u32 = 32;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let (l, r) = (center.x - half.x, center.x + half.x);
    let (b, t) = (center.y - half.y, center.y + half.y);

    vec![
        Vertex::new(l, b, color),
        Vertex::new(r, b, color),
        Vertex::new(l, t, color),
        Vertex::new(l, t, color),
        Vertex::new(r, b, color),
        Vertex::new(r, t, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Tessellate any game shape
pub fn shape(shape: &Shape) -> Vec<Vertex> {
    match shape.kind {
        ShapeKind::Rect => rect(shape.pos, shape.size, shape.color),
        ShapeKind::Circle { radius } => circle(shape.pos, radius, shape.color, CIRCLE_SEGMENTS),
    }
}
