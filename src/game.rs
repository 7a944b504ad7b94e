//! Frame loop
//!
//! One frame samples input, advances the simulation in fixed substeps and then
//! renders. Everything runs on the caller's thread; pacing (vsync) is the
//! backend's job.

use crate::consts::*;
use crate::platform::{InputSource, Key, sample};
use crate::renderer::{Renderer, render};
use crate::sim::{GameEvent, GameState, Screen, TickInput, tick};

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Exit,
}

/// Game instance holding the session and loop bookkeeping
pub struct Game {
    pub state: GameState,
    accumulator: f32,
    /// Frames run so far
    pub frames: u64,
    /// Let the autopilot play
    pub idle_mode: bool,
    /// Events from every substep of the last frame
    pub frame_events: Vec<GameEvent>,
    last_screen: Screen,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self {
            state: GameState::new(seed),
            accumulator: 0.0,
            frames: 0,
            idle_mode: false,
            frame_events: Vec::new(),
            last_screen: Screen::Start,
        }
    }

    /// Run one frame: input, fixed-step simulation, render
    pub fn frame(
        &mut self,
        input: &impl InputSource,
        renderer: &mut impl Renderer,
        dt: f32,
    ) -> FrameStatus {
        if input.is_pressed(Key::Escape) {
            log::info!("Escape pressed, exiting after {} frames", self.frames);
            return FrameStatus::Exit;
        }

        let mut tick_input = sample(input);
        tick_input.idle_mode = self.idle_mode;

        self.update(&tick_input, dt);
        render(&self.state, renderer);
        self.frames += 1;
        FrameStatus::Continue
    }

    /// Run simulation ticks for `dt` seconds of wall-clock time
    fn update(&mut self, input: &TickInput, dt: f32) {
        // A NaN would poison the accumulator for good
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            log::warn!("Ignoring non-finite frame dt {}", dt);
            0.0
        };
        self.accumulator += dt;
        self.frame_events.clear();

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.frame_events.extend_from_slice(&self.state.events);
        }
        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        for event in &self.frame_events {
            match event {
                GameEvent::Won | GameEvent::Lost => log::info!("{:?}", event),
                _ => log::trace!("{:?}", event),
            }
        }

        let current = self.state.screen;
        if current != self.last_screen {
            log::info!("Screen {:?} -> {:?}", self.last_screen, current);
            self.last_screen = current;
        }
    }
}
