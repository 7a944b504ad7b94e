//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, created once per session
//! - Stable brick indices (destroyed bricks are flagged, never removed)
//! - No rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod shape;
pub mod state;
pub mod tick;

pub use collision::{WallContact, bounce_off_paddle, integrate_ball, strike_brick};
pub use levels::{Levels, build_layout};
pub use shape::{Color, Shape, ShapeKind, overlaps, rgb};
pub use state::{
    Ball, BounceRule, Brick, Difficulty, GameEvent, GameState, Paddle, RngState, Screen,
};
pub use tick::{TickInput, tick};
