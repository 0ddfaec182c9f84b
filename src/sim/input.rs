//! Keyboard input mapping
//!
//! Maps W/A/S/D key transitions to wolf velocity. One axis at a time:
//! a key-down overwrites velocity, any movement key-up zeroes it.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::Wolf;
use crate::consts::WOLF_STEP;

/// The four movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Up
    W,
    /// Left
    A,
    /// Down
    S,
    /// Right
    D,
}

impl Key {
    /// Parse a key name. Anything other than W/A/S/D is ignored by the core.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            _ => None,
        }
    }

    /// Key whose press produces `velocity`, if any
    pub fn from_velocity(velocity: IVec2) -> Option<Self> {
        [Key::W, Key::A, Key::S, Key::D]
            .into_iter()
            .find(|key| key.velocity() == velocity)
    }

    /// Velocity set when this key goes down
    pub fn velocity(self) -> IVec2 {
        match self {
            Key::A => IVec2::new(-WOLF_STEP, 0),
            Key::D => IVec2::new(WOLF_STEP, 0),
            Key::W => IVec2::new(0, -WOLF_STEP),
            Key::S => IVec2::new(0, WOLF_STEP),
        }
    }
}

/// A discrete key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

impl KeyEvent {
    /// Parse one line of key input
    ///
    /// Accepts `w` or `+w` (press), `-w` (release), and `down w` / `up w`.
    /// Returns None for blank lines and non-movement keys.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        match (words.next()?, words.next(), words.next()) {
            ("down", Some(name), None) => Key::from_name(name).map(KeyEvent::Down),
            ("up", Some(name), None) => Key::from_name(name).map(KeyEvent::Up),
            (word, None, None) => match word.split_at_checked(1)? {
                ("+", name) => Key::from_name(name).map(KeyEvent::Down),
                ("-", name) => Key::from_name(name).map(KeyEvent::Up),
                _ => Key::from_name(word).map(KeyEvent::Down),
            },
            _ => None,
        }
    }
}

/// Apply a key transition to the wolf. Last event wins.
pub fn apply_key(wolf: &mut Wolf, event: KeyEvent) {
    match event {
        KeyEvent::Down(key) => wolf.velocity = key.velocity(),
        // Releasing any movement key stops the wolf, even if another is held
        KeyEvent::Up(_) => wolf.velocity = IVec2::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_w() {
        let mut wolf = Wolf::default();
        assert_eq!(wolf.velocity, IVec2::ZERO);
        apply_key(&mut wolf, KeyEvent::Down(Key::W));
        assert_eq!(wolf.velocity, IVec2::new(0, -10));
        apply_key(&mut wolf, KeyEvent::Up(Key::W));
        assert_eq!(wolf.velocity, IVec2::ZERO);
    }

    #[test]
    fn test_each_key_direction() {
        let cases = [
            (Key::A, IVec2::new(-10, 0)),
            (Key::D, IVec2::new(10, 0)),
            (Key::W, IVec2::new(0, -10)),
            (Key::S, IVec2::new(0, 10)),
        ];
        for (key, expected) in cases {
            let mut wolf = Wolf::default();
            apply_key(&mut wolf, KeyEvent::Down(key));
            assert_eq!(wolf.velocity, expected, "{:?}", key);
        }
    }

    #[test]
    fn test_new_key_overwrites_axis() {
        let mut wolf = Wolf::default();
        apply_key(&mut wolf, KeyEvent::Down(Key::D));
        apply_key(&mut wolf, KeyEvent::Down(Key::S));
        // No diagonal: S replaces D
        assert_eq!(wolf.velocity, IVec2::new(0, 10));
    }

    #[test]
    fn test_release_of_other_key_cancels_held_motion() {
        let mut wolf = Wolf::default();
        apply_key(&mut wolf, KeyEvent::Down(Key::W));
        apply_key(&mut wolf, KeyEvent::Down(Key::S));
        apply_key(&mut wolf, KeyEvent::Up(Key::W));
        // S is still held, but W's release zeroes velocity
        assert_eq!(wolf.velocity, IVec2::ZERO);
    }

    #[test]
    fn test_key_from_velocity() {
        assert_eq!(Key::from_velocity(IVec2::new(0, -10)), Some(Key::W));
        assert_eq!(Key::from_velocity(IVec2::new(10, 0)), Some(Key::D));
        assert_eq!(Key::from_velocity(IVec2::ZERO), None);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("w"), Some(Key::W));
        assert_eq!(Key::from_name("D"), Some(Key::D));
        assert_eq!(Key::from_name("ArrowUp"), None);
        assert_eq!(Key::from_name("q"), None);
    }

    #[test]
    fn test_parse_key_lines() {
        assert_eq!(KeyEvent::parse("d"), Some(KeyEvent::Down(Key::D)));
        assert_eq!(KeyEvent::parse("+W\n"), Some(KeyEvent::Down(Key::W)));
        assert_eq!(KeyEvent::parse("-s"), Some(KeyEvent::Up(Key::S)));
        assert_eq!(KeyEvent::parse("down a"), Some(KeyEvent::Down(Key::A)));
        assert_eq!(KeyEvent::parse("  up d  "), Some(KeyEvent::Up(Key::D)));
    }

    #[test]
    fn test_parse_ignores_other_input() {
        assert_eq!(KeyEvent::parse(""), None);
        assert_eq!(KeyEvent::parse("q"), None);
        assert_eq!(KeyEvent::parse("+"), None);
        assert_eq!(KeyEvent::parse("down"), None);
        assert_eq!(KeyEvent::parse("down w s"), None);
        assert_eq!(KeyEvent::parse("sideways w"), None);
    }
}
