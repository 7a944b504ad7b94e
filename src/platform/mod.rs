//! Platform abstraction layer
//!
//! The windowing backend only has to report which keys are held and where the
//! pointer is. Everything here turns that into a `TickInput`.

use std::collections::HashSet;

use glam::Vec2;

use crate::consts::ARENA_HEIGHT;
use crate::sim::{Difficulty, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Escape,
    E,
    N,
    H,
    R,
    P,
}

impl Key {
    /// Map a backend key name (e.g. a DOM `KeyboardEvent.key`) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            " " | "Space" => Some(Key::Space),
            "Escape" | "Esc" => Some(Key::Escape),
            "e" | "E" => Some(Key::E),
            "n" | "N" => Some(Key::N),
            "h" | "H" => Some(Key::H),
            "r" | "R" => Some(Key::R),
            "p" | "P" => Some(Key::P),
            _ => None,
        }
    }
}

/// Source of per-frame input state
pub trait InputSource {
    /// Whether a key is currently held
    fn is_pressed(&self, key: Key) -> bool;

    /// Pointer position in window coordinates (origin top-left), if known
    fn pointer(&self) -> Option<(f64, f64)>;
}

/// Held keys and pointer position, fed by backend events
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
    pointer: Option<(f64, f64)>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Some((x, y));
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl InputSource for KeyState {
    fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }
}

/// Convert window coordinates to arena space (y grows upward)
#[inline]
pub fn window_to_arena(x: f64, y: f64) -> Vec2 {
    Vec2::new(x as f32, ARENA_HEIGHT - y as f32)
}

/// Sample the current input state into a tick command
pub fn sample(input: &impl InputSource) -> TickInput {
    // Later keys win when several are held, in e/n/h/r order
    let select = [
        (Key::E, Difficulty::Easy),
        (Key::N, Difficulty::Normal),
        (Key::H, Difficulty::Hard),
        (Key::R, Difficulty::Random),
    ]
    .into_iter()
    .filter(|&(key, _)| input.is_pressed(key))
    .map(|(_, difficulty)| difficulty)
    .last();

    TickInput {
        left: input.is_pressed(Key::Left),
        right: input.is_pressed(Key::Right),
        serve: input.is_pressed(Key::Space),
        select,
        confirm: input.is_pressed(Key::P),
        pointer: input.pointer().map(|(x, y)| window_to_arena(x, y)),
        idle_mode: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_maps_keys() {
        let mut keys = KeyState::new();
        keys.press(Key::Left);
        keys.press(Key::Space);
        keys.press(Key::P);
        let input = sample(&keys);
        assert!(input.left);
        assert!(!input.right);
        assert!(input.serve);
        assert!(input.confirm);
        assert_eq!(input.select, None);

        keys.release(Key::Left);
        assert!(!sample(&keys).left);
    }

    #[test]
    fn test_last_difficulty_key_wins() {
        let mut keys = KeyState::new();
        keys.press(Key::R);
        keys.press(Key::E);
        assert_eq!(sample(&keys).select, Some(Difficulty::Random));
    }

    #[test]
    fn test_pointer_is_flipped() {
        let mut keys = KeyState::new();
        assert_eq!(sample(&keys).pointer, None);
        keys.set_pointer(100.0, 50.0);
        assert_eq!(sample(&keys).pointer, Some(Vec2::new(100.0, ARENA_HEIGHT - 50.0)));
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("h"), Some(Key::H));
        assert_eq!(Key::from_name("q"), None);
    }
}
