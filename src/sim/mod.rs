//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick periods only
//! - Seeded RNG only
//! - Stable iteration order (walls in list order)
//! - No drawing or platform dependencies (frames are plain data)

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, check_item_pickup, resolve_wall, resolve_walls};
pub use input::{Key, KeyEvent, apply_key};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState, Item, Wall, WallSide, Wolf};
pub use tick::{Clock, StepOutput, TickInput, advance, countdown_tick, motion_tick};
