//! Fixed timestep simulation tick
//!
//! One tick runs input → screen state machine → paddle/serve → physics.

use glam::Vec2;
use rand::Rng;

use super::collision::{bounce_off_paddle, integrate_ball, strike_brick};
use super::state::{Difficulty, GameEvent, GameState, Screen};
use crate::consts::*;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right
    pub right: bool,
    /// Launch an idle ball
    pub serve: bool,
    /// Difficulty picked on the start screen (e/n/h/r)
    pub select: Option<Difficulty>,
    /// Play again from the win/lose screen
    pub confirm: bool,
    /// Pointer position in arena space
    pub pointer: Option<Vec2>,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

/// Paddle dead zone for the autopilot
const AUTOPILOT_DEAD_ZONE: f32 = 10.0;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;
    if input.pointer.is_some() {
        state.pointer = input.pointer;
    }

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    if !update_screen(state, input) {
        return;
    }
    let Some(difficulty) = state.screen.difficulty() else {
        return;
    };
    let params = params(difficulty);

    state
        .paddle
        .steer(input.left, input.right, params.paddle_speed, dt);

    if input.serve && state.ball.is_idle() {
        serve(state, difficulty);
    }

    step_physics(state, difficulty, dt);
}

/// Run the screen state machine.
///
/// Returns true if the active play screen should simulate this tick.
fn update_screen(state: &mut GameState, input: &TickInput) -> bool {
    match state.screen {
        Screen::Start => {
            if let Some(difficulty) = input.select {
                log::info!("Starting {} game", difficulty.as_str());
                state.screen = difficulty.screen();
                state.events.push(GameEvent::Started(difficulty));
            }
            false
        }
        Screen::Win | Screen::Lose => {
            if input.confirm {
                log::info!("Replaying from {:?}", state.screen);
                state.reset_to_start();
            }
            false
        }
        Screen::Easy | Screen::Normal | Screen::Hard | Screen::Random => {
            let Some(difficulty) = state.screen.difficulty() else {
                return false;
            };
            if state.death_counter >= DEATH_LIMIT {
                log::info!(
                    "Round lost on {} after {} deaths",
                    difficulty.as_str(),
                    state.death_counter
                );
                state.screen = Screen::Lose;
                state.events.push(GameEvent::Lost);
                state.regenerate_levels();
                return false;
            }
            if state.levels.is_cleared(difficulty) {
                log::info!("Round won on {}", difficulty.as_str());
                state.screen = Screen::Win;
                state.events.push(GameEvent::Won);
                return false;
            }
            true
        }
    }
}

/// Launch the idle ball upward with a random horizontal component
pub fn serve(state: &mut GameState, difficulty: Difficulty) {
    let params = params(difficulty);
    let (min, max) = params.serve_horizontal;
    let magnitude = state.rng.random_range(min..=max);
    let sign = if state.rng.random_bool(0.5) { 1.0 } else { -1.0 };
    let vel = Vec2::new(sign * magnitude, params.serve_speed);
    state.ball.vel = vel;
    log::debug!("Served at {:?}", vel);
    state.events.push(GameEvent::Served { vel });
}

/// Integrate the ball and resolve walls, paddle and bricks
fn step_physics(state: &mut GameState, difficulty: Difficulty, dt: f32) {
    if state.ball.is_idle() {
        return;
    }

    let contact = integrate_ball(&mut state.ball, dt, Vec2::new(ARENA_WIDTH, ARENA_HEIGHT));
    if contact.bounced() {
        state.events.push(GameEvent::WallBounce);
    }
    if contact.missed {
        state.ball.reset();
        state.death_counter += 1;
        log::debug!("Ball lost ({}/{})", state.death_counter, DEATH_LIMIT);
        state.events.push(GameEvent::BallLost {
            deaths: state.death_counter,
        });
        return;
    }

    let rule = params(difficulty).bounce;
    if bounce_off_paddle(&mut state.ball, &state.paddle, rule, &mut state.rng) {
        state.events.push(GameEvent::PaddleHit);
    }

    let bricks = state.levels.get_mut(difficulty);
    if let Some(index) = strike_brick(&mut state.ball, bricks) {
        log::debug!("Brick {} destroyed", index);
        state.events.push(GameEvent::BrickDestroyed { index });
    }
}

/// Demo player: serves immediately and chases the ball with the paddle
fn autopilot(state: &GameState, input: &mut TickInput) {
    if state.screen.difficulty().is_none() {
        return;
    }
    if state.ball.is_idle() {
        input.serve = true;
    }
    let dx = state.ball.body.pos.x - state.paddle.body.pos.x;
    input.left = dx < -AUTOPILOT_DEAD_ZONE;
    input.right = dx > AUTOPILOT_DEAD_ZONE;
}
