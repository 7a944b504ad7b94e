//! Game state and core simulation types
//!
//! The session object owns everything the frame loop mutates: screen, ball,
//! paddle, brick layouts, death counter and the single RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::levels::Levels;
use super::shape::{Color, Shape, rgb};
use crate::consts::*;

/// Difficulty / play mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
    Random,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Random,
    ];

    /// The play screen for this difficulty
    pub fn screen(self) -> Screen {
        match self {
            Difficulty::Easy => Screen::Easy,
            Difficulty::Normal => Screen::Normal,
            Difficulty::Hard => Screen::Hard,
            Difficulty::Random => Screen::Random,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Random => "Random",
        }
    }
}

/// The active screen. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// Difficulty select
    #[default]
    Start,
    Easy,
    Normal,
    Hard,
    Random,
    Win,
    Lose,
}

impl Screen {
    /// Difficulty being played, or None outside play screens
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            Screen::Easy => Some(Difficulty::Easy),
            Screen::Normal => Some(Difficulty::Normal),
            Screen::Hard => Some(Difficulty::Hard),
            Screen::Random => Some(Difficulty::Random),
            Screen::Start | Screen::Win | Screen::Lose => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Screen::Win | Screen::Lose)
    }
}

/// How the paddle perturbs a rebound's horizontal velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BounceRule {
    /// Mirror only
    Plain,
    /// Add a uniform random offset in [-n, n]
    Jitter(f32),
    /// Add a fixed amount in the direction of horizontal travel
    Nudge(f32),
}

pub const BALL_COLOR: Color = rgb(1.0, 1.0, 1.0);
pub const PADDLE_COLOR: Color = rgb(1.0, 0.0, 0.0);

/// The ball. One instance per session, reset between rounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Shape,
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            body: Shape::circle(BALL_SPAWN, BALL_RADIUS, BALL_COLOR),
            vel: Vec2::ZERO,
        }
    }
}

impl Ball {
    pub fn radius(&self) -> f32 {
        self.body.radius().unwrap_or(BALL_RADIUS)
    }

    /// Idle balls wait at spawn for a serve
    pub fn is_idle(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Back to spawn, motionless
    pub fn reset(&mut self) {
        self.body.pos = BALL_SPAWN;
        self.vel = Vec2::ZERO;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Shape,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            body: Shape::rect(PADDLE_SPAWN, PADDLE_SIZE, PADDLE_COLOR),
        }
    }
}

impl Paddle {
    /// Move horizontally by up to `speed * dt`, never leaving the arena
    pub fn steer(&mut self, left: bool, right: bool, speed: f32, dt: f32) {
        let step = speed * dt;
        if left && self.body.left() > 0.0 {
            self.body.move_x(-step);
        }
        if right && self.body.right() < ARENA_WIDTH {
            self.body.move_x(step);
        }
        let half = self.body.size.x / 2.0;
        self.body.pos.x = self.body.pos.x.clamp(half, ARENA_WIDTH - half);
    }
}

/// A brick. Destroyed bricks stay in their collection with `alive == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub body: Shape,
    pub alive: bool,
}

impl Brick {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            body: Shape::rect(pos, BRICK_SIZE, color),
            alive: true,
        }
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player picked a difficulty
    Started(Difficulty),
    /// Ball launched from spawn
    Served { vel: Vec2 },
    /// Ball reflected off an arena wall
    WallBounce,
    /// Ball rebounded off the paddle
    PaddleHit,
    /// Ball destroyed the brick at this index of the active collection
    BrickDestroyed { index: usize },
    /// Ball fell past the bottom edge
    BallLost { deaths: u32 },
    /// All bricks destroyed
    Won,
    /// Death limit reached
    Lost,
    /// All four brick layouts rebuilt
    LevelsRegenerated,
    /// Back on the difficulty select screen
    ReturnedToStart,
}

/// RNG seed wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ self.stream.rotate_left(32))
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was built from
    pub rng_state: RngState,
    /// Single generator for layouts, serves and bounces. Seeded once.
    pub rng: Pcg32,
    pub screen: Screen,
    /// Balls lost this round
    pub death_counter: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub levels: Levels,
    /// Last sampled pointer position in arena space (unused by gameplay)
    pub pointer: Option<Vec2>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session on the start screen
    pub fn new(seed: u64) -> Self {
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let levels = Levels::generate(&mut rng);
        Self {
            rng_state,
            rng,
            screen: Screen::Start,
            death_counter: 0,
            ball: Ball::default(),
            paddle: Paddle::default(),
            levels,
            pointer: None,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Rebuild all four layouts, discarding destroyed-brick state
    pub fn regenerate_levels(&mut self) {
        self.levels = Levels::generate(&mut self.rng);
        log::info!(
            "Levels regenerated: easy={} normal={} hard={} random={}",
            self.levels.easy.len(),
            self.levels.normal.len(),
            self.levels.hard.len(),
            self.levels.random.len()
        );
        self.events.push(GameEvent::LevelsRegenerated);
    }

    /// Bricks of the active play screen, if any
    pub fn active_bricks(&self) -> Option<&[Brick]> {
        self.screen.difficulty().map(|d| self.levels.get(d))
    }

    /// Return to difficulty select with a fresh round
    pub fn reset_to_start(&mut self) {
        self.ball.reset();
        self.paddle = Paddle::default();
        self.death_counter = 0;
        self.regenerate_levels();
        self.screen = Screen::Start;
        self.events.push(GameEvent::ReturnedToStart);
    }
}
