//! Rendering module
//!
//! `render` walks the session for the active screen and issues one draw call per
//! shape plus the UI text. A backend implements `Renderer`; `VertexBatch` is a
//! ready-made one that tessellates into a GPU-uploadable vertex list.

pub mod batch;
pub mod shapes;
pub mod vertex;

pub use batch::{TextItem, VertexBatch};
pub use vertex::Vertex;

use glam::Vec2;

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH, DEATH_LIMIT};
use crate::sim::{Color, GameState, Screen, Shape};
use vertex::colors;

/// Horizontal advance of one character at scale 1
pub const CHAR_ADVANCE: f32 = 12.0;

/// Draw-call sink provided by a graphics backend
pub trait Renderer {
    /// Start a frame
    fn clear(&mut self, color: Color);

    /// Draw one shape using its position, size, color and (for circles) radius
    fn draw_shape(&mut self, shape: &Shape);

    /// Draw a line of text with its baseline-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32, color: Color);
}

/// x that centres `text` on the arena at `scale`
pub fn centered_x(text: &str, scale: f32) -> f32 {
    ARENA_WIDTH / 2.0 - CHAR_ADVANCE * scale * text.chars().count() as f32 / 2.0
}

fn centered(out: &mut impl Renderer, text: &str, y: f32, scale: f32, color: Color) {
    out.draw_text(text, Vec2::new(centered_x(text, scale), y), scale, color);
}

/// Draw the current frame. Reads the session, never mutates it.
pub fn render(state: &GameState, out: &mut impl Renderer) {
    out.clear(colors::BACKGROUND);

    match state.screen {
        Screen::Start => {
            let title = "Choose a difficulty:";
            centered(out, title, ARENA_HEIGHT - 200.0, 1.0, colors::TEXT);
            let options = ["Easy (e)", "Normal (n)", "Hard (h)", "Random (r)"];
            // Options align under the title's left half
            let x = ARENA_WIDTH / 2.0 - CHAR_ADVANCE / 2.0 * title.len() as f32;
            for (i, option) in options.iter().enumerate() {
                let y = ARENA_HEIGHT - 300.0 - 50.0 * i as f32;
                out.draw_text(option, Vec2::new(x, y), 1.0, colors::TEXT);
            }
        }
        Screen::Easy | Screen::Normal | Screen::Hard | Screen::Random => {
            for brick in state.active_bricks().unwrap_or_default() {
                if brick.alive {
                    out.draw_shape(&brick.body);
                }
            }
            out.draw_shape(&state.paddle.body);
            out.draw_shape(&state.ball.body);

            let deaths = format!("Deaths: {}/{}", state.death_counter, DEATH_LIMIT);
            out.draw_text(&deaths, Vec2::new(10.0, 10.0), 0.75, colors::TEXT);
            if state.ball.is_idle() {
                let hint = "Press SPACE to serve";
                centered(out, hint, ARENA_HEIGHT / 3.0, 0.75, colors::TEXT_DIM);
            }
        }
        Screen::Win | Screen::Lose => {
            let message = if state.screen == Screen::Win {
                "You win!"
            } else {
                "You lose!"
            };
            centered(out, message, ARENA_HEIGHT / 2.0, 1.0, colors::TEXT);
            let hint = "Press P to play again";
            centered(out, hint, ARENA_HEIGHT / 2.0 - 60.0, 0.75, colors::TEXT_DIM);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::{Difficulty, TickInput, tick};

    /// Records draw calls for inspection
    #[derive(Default)]
    struct Recorder {
        shapes: Vec<Shape>,
        texts: Vec<String>,
        clears: usize,
    }

    impl Renderer for Recorder {
        fn clear(&mut self, _color: Color) {
            self.clears += 1;
        }

        fn draw_shape(&mut self, shape: &Shape) {
            self.shapes.push(*shape);
        }

        fn draw_text(&mut self, text: &str, _pos: Vec2, _scale: f32, _color: Color) {
            self.texts.push(text.to_string());
        }
    }

    #[test]
    fn test_start_screen_lists_difficulties() {
        let state = GameState::new(5);
        let mut rec = Recorder::default();
        render(&state, &mut rec);
        assert_eq!(rec.clears, 1);
        assert!(rec.shapes.is_empty());
        assert_eq!(rec.texts[0], "Choose a difficulty:");
        assert!(rec.texts.iter().any(|t| t == "Random (r)"));
    }

    #[test]
    fn test_play_screen_skips_destroyed_bricks() {
        let mut state = GameState::new(5);
        let input = TickInput {
            select: Some(Difficulty::Easy),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        state.levels.easy[0].destroy();
        state.death_counter = 2;

        let mut rec = Recorder::default();
        render(&state, &mut rec);
        // 28 live bricks + paddle + ball
        assert_eq!(rec.shapes.len(), 30);
        assert!(rec.texts.contains(&"Deaths: 2/3".to_string()));
        assert!(rec.texts.contains(&"Press SPACE to serve".to_string()));
    }

    #[test]
    fn test_terminal_messages() {
        let mut state = GameState::new(5);
        state.screen = Screen::Lose;
        let mut rec = Recorder::default();
        render(&state, &mut rec);
        assert_eq!(rec.texts[0], "You lose!");

        state.screen = Screen::Win;
        let mut rec = Recorder::default();
        render(&state, &mut rec);
        assert_eq!(rec.texts[0], "You win!");
    }

    #[test]
    fn test_centered_x() {
        assert_eq!(centered_x("ab", 1.0), ARENA_WIDTH / 2.0 - 12.0);
        assert_eq!(centered_x("ab", 0.5), ARENA_WIDTH / 2.0 - 6.0);
    }
}
