//! Game state and core simulation types
//!
//! Entities are plain data. The session owns all of them exclusively.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Timers running, input accepted
    Running,
    /// Countdown expired; terminal
    GameOver,
}

/// Which wall face the wolf was pushed out through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// Something that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Item consumed at `at`; `score` is the new total
    ItemCollected { at: IVec2, score: u32 },
    /// Wolf overlapped wall `wall` (list index) and was repositioned.
    /// `side` is `None` when the wolf sat inside the wall on both axes.
    WallHit { wall: usize, side: Option<WallSide> },
    /// One second elapsed
    Countdown { time_left: u32 },
    /// Session ended; fires exactly once
    GameOver { score: u32 },
}

/// The player-controlled wolf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wolf {
    pub name: String,
    pub age: u32,
    /// Top-left corner of the 50×50 bounding box
    pub position: IVec2,
    /// Per-tick displacement; components are always -10, 0 or 10
    pub velocity: IVec2,
}

impl Wolf {
    pub fn new(name: impl Into<String>, age: u32, position: IVec2) -> Self {
        Self {
            name: name.into(),
            age,
            position,
            velocity: IVec2::ZERO,
        }
    }

    pub fn set_velocity(&mut self, dx: i32, dy: i32) {
        self.velocity = IVec2::new(dx, dy);
    }

    /// Displace without touching velocity
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.position += IVec2::new(dx, dy);
    }

    /// Advance one motion tick
    pub fn update_position(&mut self) {
        self.position += self.velocity;
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.position, WOLF_SIZE)
    }
}

impl Default for Wolf {
    fn default() -> Self {
        Self::new(WOLF_NAME, WOLF_AGE, IVec2::new(WOLF_START_X, WOLF_START_Y))
    }
}

/// A collectible item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub position: IVec2,
}

impl Item {
    pub fn new(position: IVec2) -> Self {
        Self { position }
    }

    /// Sample a uniformly random position in `[0, width) × [0, height)`
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(IVec2::new(
            rng.random_range(0..FIELD_WIDTH),
            rng.random_range(0..FIELD_HEIGHT),
        ))
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(self.position, ITEM_SIZE)
    }
}

/// A static wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
}

impl Wall {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// The fixed wall layout
    pub fn default_layout() -> Vec<Wall> {
        WALLS.iter().copied().map(Wall::new).collect()
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Item respawn RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub wolf: Wolf,
    pub item: Item,
    /// Walls in resolution order; immutable for the session
    pub(super) walls: Vec<Wall>,
    pub score: u32,
    /// Seconds remaining
    pub time_left: u32,
    /// Motion ticks processed
    pub motion_ticks: u64,
    /// Countdown ticks processed
    pub countdown_ticks: u64,
}

impl GameState {
    /// Create a new session with the given seed and the default 30 s clock
    pub fn new(seed: u64) -> Self {
        Self::with_session_seconds(seed, SESSION_SECONDS)
    }

    pub fn with_session_seconds(seed: u64, session_seconds: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let item = Item::random(&mut rng);

        log::info!(
            "New session: seed={}, {} s, item at ({}, {})",
            seed,
            session_seconds,
            item.position.x,
            item.position.y
        );

        Self {
            seed,
            rng,
            phase: GamePhase::Running,
            wolf: Wolf::default(),
            item,
            walls: Wall::default_layout(),
            score: 0,
            time_left: session_seconds,
            motion_ticks: 0,
            countdown_ticks: 0,
        }
    }

    /// Replace the wall layout before the session starts
    pub fn with_walls(mut self, walls: Vec<Wall>) -> Self {
        self.walls = walls;
        self
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Replace the item with a freshly sampled one
    pub fn respawn_item(&mut self) {
        self.item = Item::random(&mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_left, 30);
        assert_eq!(state.wolf.name, "Alpha");
        assert_eq!(state.wolf.age, 30);
        assert_eq!(state.wolf.position, IVec2::new(400, 300));
        assert_eq!(state.wolf.velocity, IVec2::ZERO);
        assert_eq!(state.walls().len(), 4);
        assert_eq!(state.walls()[0].rect, Rect::new(100, 100, 600, 20));
        assert_eq!(state.walls()[3].rect, Rect::new(500, 400, 20, 100));
    }

    #[test]
    fn test_initial_item_in_field() {
        for seed in 0..64 {
            let state = GameState::new(seed);
            let p = state.item.position;
            assert!((0..FIELD_WIDTH).contains(&p.x));
            assert!((0..FIELD_HEIGHT).contains(&p.y));
        }
    }

    #[test]
    fn test_same_seed_same_items() {
        let mut a = GameState::new(4242);
        let mut b = GameState::new(4242);
        for _ in 0..10 {
            assert_eq!(a.item, b.item);
            a.respawn_item();
            b.respawn_item();
        }
    }

    #[test]
    fn test_wolf_movement() {
        let mut wolf = Wolf::default();
        wolf.set_velocity(10, 0);
        wolf.update_position();
        assert_eq!(wolf.position, IVec2::new(410, 300));

        wolf.move_by(-5, 7);
        assert_eq!(wolf.position, IVec2::new(405, 307));
        // move_by leaves velocity alone
        assert_eq!(wolf.velocity, IVec2::new(10, 0));
    }

    #[test]
    fn test_bounds_sizes() {
        let wolf = Wolf::default();
        assert_eq!(wolf.bounds(), Rect::new(400, 300, 50, 50));
        let item = Item::new(IVec2::new(3, 4));
        assert_eq!(item.bounds(), Rect::new(3, 4, 10, 10));
    }
}
