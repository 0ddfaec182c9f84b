//! Frame snapshots
//!
//! A `RenderFrame` is a pull-based read of the session. Building one never
//! mutates game state.

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Rect};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFrame {
    /// Motion ticks processed so far
    pub tick: u64,
    pub phase: GamePhase,
    pub wolf_name: String,
    pub wolf: Rect,
    pub item: Rect,
    pub walls: Vec<Rect>,
    pub score: u32,
    pub time_left: u32,
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.motion_ticks,
            phase: state.phase,
            wolf_name: state.wolf.name.clone(),
            wolf: state.wolf.bounds(),
            item: state.item.bounds(),
            walls: state.walls().iter().map(|w| w.rect).collect(),
            score: state.score,
            time_left: state.time_left,
        }
    }

    /// HUD text, top to bottom
    pub fn hud_lines(&self) -> [String; 2] {
        [
            format!("Score: {}", self.score),
            format!("Time Left: {} s", self.time_left),
        ]
    }
}

/// End-of-game notification text
pub fn game_over_message(score: u32) -> String {
    format!("Time's up! Your score is {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_capture() {
        let mut state = GameState::new(5);
        state.score = 3;
        state.time_left = 12;
        state.wolf.position = IVec2::new(10, 20);

        let frame = RenderFrame::capture(&state);
        assert_eq!(frame.wolf, Rect::new(10, 20, 50, 50));
        assert_eq!(frame.item.w, 10);
        assert_eq!(frame.walls.len(), 4);
        assert_eq!(frame.wolf_name, "Alpha");
        assert_eq!(frame.phase, GamePhase::Running);
        assert_eq!(frame.hud_lines(), ["Score: 3".to_string(), "Time Left: 12 s".to_string()]);
    }

    #[test]
    fn test_capture_is_read_only() {
        let state = GameState::new(6);
        let before = (state.wolf.clone(), state.item, state.score, state.time_left);
        let _ = RenderFrame::capture(&state);
        let _ = RenderFrame::capture(&state);
        assert_eq!(before, (state.wolf.clone(), state.item, state.score, state.time_left));
    }

    #[test]
    fn test_game_over_message() {
        assert_eq!(game_over_message(7), "Time's up! Your score is 7");
    }
}
