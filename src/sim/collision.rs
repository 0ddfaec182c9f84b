//! Collision detection and response
//!
//! Runs once per motion tick: item pickup first, then walls in list order.
//! Wall response pushes the wolf out along a single axis chosen by a fixed
//! priority (left, right, top, bottom). This is not penetration-depth
//! resolution and corners can look a little off.

use glam::IVec2;

use super::rect::Rect;
use super::state::{GameEvent, GameState, Wall, WallSide, Wolf};
use crate::consts::WOLF_SIZE;

/// Result of a wall check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionResult {
    /// Whether the wolf overlapped the wall
    pub hit: bool,
    /// Face the wolf was pushed out through (None if no branch applied)
    pub side: Option<WallSide>,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            side: None,
        }
    }
}

/// Resolve the wolf against a single wall rectangle
///
/// On overlap the wolf stops and is snapped out through the first matching
/// face. Only one axis is corrected per wall per tick.
pub fn resolve_wall(wolf: &mut Wolf, wall: &Rect) -> CollisionResult {
    if !wolf.bounds().intersects(wall) {
        return CollisionResult::miss();
    }

    wolf.velocity = IVec2::ZERO;

    let pos = wolf.position;
    let side = if pos.x < wall.left() {
        wolf.position.x = wall.left() - WOLF_SIZE;
        Some(WallSide::Left)
    } else if pos.x + WOLF_SIZE > wall.right() {
        wolf.position.x = wall.right();
        Some(WallSide::Right)
    } else if pos.y < wall.top() {
        wolf.position.y = wall.top() - WOLF_SIZE;
        Some(WallSide::Top)
    } else if pos.y + WOLF_SIZE > wall.bottom() {
        wolf.position.y = wall.bottom();
        Some(WallSide::Bottom)
    } else {
        // Wolf fits inside the wall on both axes; nothing to snap to
        None
    };

    CollisionResult { hit: true, side }
}

/// Resolve the wolf against every wall in list order
pub fn resolve_walls(wolf: &mut Wolf, walls: &[Wall], events: &mut Vec<GameEvent>) {
    for (index, wall) in walls.iter().enumerate() {
        let result = resolve_wall(wolf, &wall.rect);
        if result.hit {
            log::debug!(
                "Wall {} hit, side {:?}, wolf now at ({}, {})",
                index,
                result.side,
                wolf.position.x,
                wolf.position.y
            );
            events.push(GameEvent::WallHit {
                wall: index,
                side: result.side,
            });
        }
    }
}

/// Score and respawn the item if the wolf overlaps it
///
/// Returns true if the item was collected.
pub fn check_item_pickup(state: &mut GameState, events: &mut Vec<GameEvent>) -> bool {
    if !state.wolf.bounds().intersects(&state.item.bounds()) {
        return false;
    }

    let at = state.item.position;
    state.score += 1;
    state.respawn_item();

    log::debug!(
        "Item collected at ({}, {}), score {}, next item at ({}, {})",
        at.x,
        at.y,
        state.score,
        state.item.position.x,
        state.item.position.y
    );
    events.push(GameEvent::ItemCollected {
        at,
        score: state.score,
    });
    true
}

/// Full per-tick collision pass: pickup, then walls
pub fn check_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    check_item_pickup(state, events);

    resolve_walls(&mut state.wolf, &state.walls, events);
}
