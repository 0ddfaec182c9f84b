//! Wolf Game - collect items against the clock
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, countdown)
//! - `renderer`: Render collaborator seam (frame snapshots, HUD output)
//! - `settings`: Timer periods, seed and runner options

pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{FrameFormat, RenderFrame, Renderer};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    use crate::sim::Rect;

    /// Play-field dimensions (fixed for the session)
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Wolf bounding box (square, anchored at position)
    pub const WOLF_SIZE: i32 = 50;
    /// Item bounding box (square, anchored at position)
    pub const ITEM_SIZE: i32 = 10;
    /// Velocity magnitude set by a single key press
    pub const WOLF_STEP: i32 = 10;

    pub const WOLF_START_X: i32 = 400;
    pub const WOLF_START_Y: i32 = 300;
    pub const WOLF_NAME: &str = "Alpha";
    pub const WOLF_AGE: u32 = 30;

    /// Session length in countdown ticks
    pub const SESSION_SECONDS: u32 = 30;

    /// Motion tick period (position update + collisions + redraw)
    pub const MOTION_INTERVAL_MS: u32 = 100;
    /// Countdown tick period
    pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;
    /// Maximum motion ticks fired per scheduler call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 32;

    /// Static walls, in resolution order
    pub const WALLS: [Rect; 4] = [
        Rect::new(100, 100, 600, 20),
        Rect::new(100, 200, 20, 300),
        Rect::new(300, 300, 400, 20),
        Rect::new(500, 400, 20, 100),
    ];
}
