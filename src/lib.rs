//! Breakout - A brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Simulation (shapes, collisions, level layouts, screen state machine)
//! - `platform`: Input sampling from a windowing backend
//! - `renderer`: Draw-call generation and vertex batching
//! - `game`: Frame loop tying input, simulation and rendering together
//! - `settings`: Native driver configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{FrameStatus, Game};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    use crate::sim::{BounceRule, Difficulty};

    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the loop will try to catch up on
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions (origin bottom-left, y up)
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Paddle defaults
    pub const PADDLE_SPAWN: Vec2 = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 4.0);
    pub const PADDLE_SIZE: Vec2 = Vec2::new(200.0, 10.0);

    /// Ball defaults
    pub const BALL_SPAWN: Vec2 = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.5);
    pub const BALL_RADIUS: f32 = 10.0;

    /// Brick grid
    pub const BRICK_SIZE: Vec2 = Vec2::new(85.0, 40.0);
    pub const BRICK_TOP_ROW_Y: f32 = 725.0;
    pub const BRICK_ROW_STEP: f32 = 50.0;
    pub const BRICK_COLUMN_STRIDE: f32 = 100.0;
    /// A row keeps placing bricks while x stays above this
    pub const BRICK_MIN_X: f32 = 25.0;
    /// Where the random layout puts its only brick if the dice placed none
    pub const RANDOM_FALLBACK_BRICK: Vec2 = Vec2::new(500.0, 750.0);
    /// One in this many random-layout cells gets a brick
    pub const RANDOM_BRICK_ODDS: u32 = 5;

    /// Missed balls allowed before the round is lost
    pub const DEATH_LIMIT: u32 = 3;

    /// Per-difficulty tuning
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DifficultyParams {
        /// Paddle speed (units/sec)
        pub paddle_speed: f32,
        /// Vertical serve speed (units/sec, upward)
        pub serve_speed: f32,
        /// Horizontal serve magnitude range, sign chosen at random
        pub serve_horizontal: (f32, f32),
        /// How the paddle perturbs the rebound
        pub bounce: BounceRule,
    }

    pub const EASY: DifficultyParams = DifficultyParams {
        paddle_speed: 200.0,
        serve_speed: 300.0,
        serve_horizontal: (50.0, 150.0),
        bounce: BounceRule::Plain,
    };

    pub const NORMAL: DifficultyParams = DifficultyParams {
        paddle_speed: 300.0,
        serve_speed: 400.0,
        serve_horizontal: (75.0, 200.0),
        bounce: BounceRule::Jitter(40.0),
    };

    pub const HARD: DifficultyParams = DifficultyParams {
        paddle_speed: 400.0,
        serve_speed: 500.0,
        serve_horizontal: (100.0, 250.0),
        bounce: BounceRule::Nudge(5.0),
    };

    pub const RANDOM: DifficultyParams = DifficultyParams {
        paddle_speed: 400.0,
        serve_speed: 400.0,
        serve_horizontal: (50.0, 250.0),
        bounce: BounceRule::Plain,
    };

    /// Look up the tuning table for a difficulty
    pub const fn params(difficulty: Difficulty) -> &'static DifficultyParams {
        match difficulty {
            Difficulty::Easy => &EASY,
            Difficulty::Normal => &NORMAL,
            Difficulty::Hard => &HARD,
            Difficulty::Random => &RANDOM,
        }
    }
}
