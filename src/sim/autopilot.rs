//! Idle/demo controller
//!
//! Plays the game through the same key interface a human would: at most one
//! key transition per motion tick. The wolf only ever moves in 10px steps, so
//! the reachable positions form a lattice; a breadth-first search over it
//! finds the shortest wall-free route to any position that touches the item
//! (only the final, item-touching step may overlap a wall).
//! Each tick presses the first key of that route. The remaining distance
//! drops by one every tick, so the wolf cannot oscillate.

use std::collections::{HashMap, VecDeque};

use glam::IVec2;

use super::input::{Key, KeyEvent};
use super::rect::Rect;
use super::state::GameState;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, WOLF_SIZE};

/// Neighbour order; fixed for determinism
const KEYS: [Key; 4] = [Key::D, Key::A, Key::S, Key::W];

/// Pick the key transition for this tick, if any
pub fn steer(state: &GameState) -> Option<KeyEvent> {
    let held = Key::from_velocity(state.wolf.velocity);
    let wanted = next_key(state);

    match (held, wanted) {
        (held, Some(key)) if held == Some(key) => None,
        (_, Some(key)) => Some(KeyEvent::Down(key)),
        (Some(key), None) => Some(KeyEvent::Up(key)),
        (None, None) => None,
    }
}

/// First key of the shortest route to the item, or None if already touching
/// it or no route exists
pub fn next_key(state: &GameState) -> Option<Key> {
    let start = state.wolf.position;
    let item = state.item.bounds();
    if touches_item(start, &item) {
        return None;
    }

    // Position -> first key taken from the start
    let mut first_key: HashMap<IVec2, Key> = HashMap::new();
    let mut queue = VecDeque::new();
    first_key.insert(start, Key::D);
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        for key in KEYS {
            let next = pos + key.velocity();
            if first_key.contains_key(&next) || !in_field(next) {
                continue;
            }

            let route_key = if pos == start { key } else { first_key[&pos] };
            // Pickup runs before wall push-out, so the last step may enter a wall
            if touches_item(next, &item) {
                return Some(route_key);
            }
            if blocked(state, next) {
                continue;
            }
            first_key.insert(next, route_key);
            queue.push_back(next);
        }
    }

    None
}

fn touches_item(pos: IVec2, item: &Rect) -> bool {
    Rect::square(pos, WOLF_SIZE).intersects(item)
}

/// Keep the search to positions where the wolf still overlaps the play-field
fn in_field(pos: IVec2) -> bool {
    pos.x > -WOLF_SIZE && pos.x < FIELD_WIDTH && pos.y > -WOLF_SIZE && pos.y < FIELD_HEIGHT
}

fn blocked(state: &GameState, pos: IVec2) -> bool {
    let next = Rect::square(pos, WOLF_SIZE);
    state.walls().iter().any(|wall| next.intersects(&wall.rect))
}
