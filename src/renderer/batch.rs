//! CPU-side frame batch
//!
//! Collects tessellated shapes into one vertex list and queues text for a font
//! renderer. A GPU backend uploads `as_bytes()` once per frame.

use glam::Vec2;

use super::Renderer;
use super::shapes;
use super::vertex::Vertex;
use crate::sim::{Color, Shape};

/// A queued line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub scale: f32,
    pub color: Color,
}

/// One frame's worth of geometry and text
#[derive(Debug, Clone, Default)]
pub struct VertexBatch {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub texts: Vec<TextItem>,
    /// Shapes drawn this frame
    pub draw_calls: usize,
}

impl VertexBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw vertex data for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Renderer for VertexBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.texts.clear();
        self.draw_calls = 0;
    }

    fn draw_shape(&mut self, shape: &Shape) {
        self.vertices.extend(shapes::shape(shape));
        self.draw_calls += 1;
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Color) {
        self.texts.push(TextItem {
            text: text.to_string(),
            pos,
            scale,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render;
    use crate::sim::{GameState, Screen};

    #[test]
    fn test_batch_collects_frame() {
        let mut state = GameState::new(11);
        state.screen = Screen::Hard;
        let mut batch = VertexBatch::new();
        render(&state, &mut batch);

        // 38 bricks + paddle + ball
        assert_eq!(batch.draw_calls, 40);
        let expected = 39 * 6 + (shapes::CIRCLE_SEGMENTS * 3) as usize;
        assert_eq!(batch.vertices.len(), expected);
        assert_eq!(batch.as_bytes().len(), expected * Vertex::STRIDE);
        assert!(!batch.texts.is_empty());
    }

    #[test]
    fn test_clear_resets_batch() {
        let state = GameState::new(11);
        let mut batch = VertexBatch::new();
        batch.draw_shape(&state.paddle.body);
        batch.draw_text("x", Vec2::ZERO, 1.0, [1.0; 4]);
        batch.clear([0.0; 4]);
        assert!(batch.vertices.is_empty());
        assert!(batch.texts.is_empty());
        assert_eq!(batch.draw_calls, 0);
    }
}
