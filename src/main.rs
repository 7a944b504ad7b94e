//! Breakout entry point
//!
//! Window creation, shaders and fonts belong to a graphics backend. This native
//! driver runs the game headless: it feeds scripted key state into the frame
//! loop, batches each frame's geometry and logs what happens.

use breakout::platform::{Key, KeyState};
use breakout::renderer::VertexBatch;
use breakout::settings::SETTINGS_FILE;
use breakout::sim::{Difficulty, Screen};
use breakout::{FrameStatus, Game, Settings};

fn difficulty_key(difficulty: Difficulty) -> Key {
    match difficulty {
        Difficulty::Easy => Key::E,
        Difficulty::Normal => Key::N,
        Difficulty::Hard => Key::H,
        Difficulty::Random => Key::R,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SETTINGS_FILE.to_string());
    let settings = Settings::load(&path);
    let seed = settings.resolve_seed();
    log::info!("Breakout (native, headless) starting with seed {}", seed);

    let mut game = Game::new(seed);
    game.idle_mode = settings.autoplay;
    let mut keys = KeyState::new();
    let mut batch = VertexBatch::new();

    for _ in 0..settings.max_frames {
        // Pick the configured difficulty on the start screen, replay after a round
        keys.clear();
        match game.state.screen {
            Screen::Start => keys.press(difficulty_key(settings.difficulty)),
            Screen::Win | Screen::Lose => {
                log::info!(
                    "Round over: {:?} after {} frames",
                    game.state.screen,
                    game.frames
                );
                break;
            }
            _ => {}
        }

        if game.frame(&keys, &mut batch, settings.frame_dt) == FrameStatus::Exit {
            break;
        }

        if game.frames % 600 == 0 {
            if let Some(difficulty) = game.state.screen.difficulty() {
                log::info!(
                    "frame {}: {} bricks left, {} deaths, {} vertices",
                    game.frames,
                    game.state.levels.alive_count(difficulty),
                    game.state.death_counter,
                    batch.vertices.len()
                );
            }
        }
    }

    println!(
        "Finished on {:?} after {} frames ({} deaths)",
        game.state.screen, game.frames, game.state.death_counter
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
