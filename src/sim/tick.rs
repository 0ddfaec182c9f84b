//! Fixed-period simulation ticks
//!
//! Two independent timers drive the session: the motion tick (move, collide,
//! redraw) and the countdown tick (one second off the clock). `Clock` turns
//! elapsed wall time into those ticks in chronological order.

use super::autopilot;
use super::collision::check_collisions;
use super::input::{KeyEvent, apply_key};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::renderer::RenderFrame;

/// Input commands for a single motion tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key transitions since the last motion tick, oldest first
    pub keys: Vec<KeyEvent>,
    /// Idle/demo mode - autopilot steers the wolf toward the item
    pub idle_mode: bool,
}

/// Advance position, resolve collisions
pub fn motion_tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    for &key in &input.keys {
        apply_key(&mut state.wolf, key);
    }
    if input.idle_mode {
        if let Some(key) = autopilot::steer(state) {
            apply_key(&mut state.wolf, key);
        }
    }

    state.motion_ticks += 1;
    state.wolf.update_position();
    check_collisions(state, &mut events);

    events
}

/// Take one second off the clock, or end the session when it is already at zero
pub fn countdown_tick(state: &mut GameState) -> Vec<GameEvent> {
    if state.is_over() {
        return Vec::new();
    }

    state.countdown_ticks += 1;

    if state.time_left > 0 {
        state.time_left -= 1;
        vec![GameEvent::Countdown {
            time_left: state.time_left,
        }]
    } else {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Time's up after {} motion ticks, final score {}",
            state.motion_ticks,
            state.score
        );
        vec![GameEvent::GameOver { score: state.score }]
    }
}

/// Two-timer scheduler
///
/// Accumulates elapsed milliseconds for each timer independently. Key events
/// are buffered until the next motion tick reads them.
#[derive(Debug, Clone)]
pub struct Clock {
    motion_interval_ms: u64,
    countdown_interval_ms: u64,
    motion_acc: u64,
    countdown_acc: u64,
    pending_keys: Vec<KeyEvent>,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(MOTION_INTERVAL_MS, COUNTDOWN_INTERVAL_MS)
    }
}

impl Clock {
    /// Panics on a zero period; settings validation rejects those earlier.
    pub fn new(motion_interval_ms: u32, countdown_interval_ms: u32) -> Self {
        assert!(motion_interval_ms > 0, "motion interval must be non-zero");
        assert!(countdown_interval_ms > 0, "countdown interval must be non-zero");
        Self {
            motion_interval_ms: u64::from(motion_interval_ms),
            countdown_interval_ms: u64::from(countdown_interval_ms),
            motion_acc: 0,
            countdown_acc: 0,
            pending_keys: Vec::new(),
        }
    }

    pub fn motion_interval_ms(&self) -> u64 {
        self.motion_interval_ms
    }

    pub fn countdown_interval_ms(&self) -> u64 {
        self.countdown_interval_ms
    }

    /// Milliseconds until the next motion tick falls due
    pub fn until_next_motion_ms(&self) -> u64 {
        self.motion_interval_ms.saturating_sub(self.motion_acc)
    }

    /// Buffer a key transition for the next motion tick
    pub fn queue_key(&mut self, key: KeyEvent) {
        self.pending_keys.push(key);
    }

    fn motion_due(&self) -> bool {
        self.motion_acc >= self.motion_interval_ms
    }

    fn countdown_due(&self) -> bool {
        self.countdown_acc >= self.countdown_interval_ms
    }

    /// The due timer that fired longer ago goes first; ties go to motion
    fn motion_first(&self) -> bool {
        let motion_late = self.motion_acc - self.motion_interval_ms;
        let countdown_late = self.countdown_acc - self.countdown_interval_ms;
        motion_late >= countdown_late
    }

    fn drop_motion_backlog(&mut self) {
        let dropped = self.motion_acc / self.motion_interval_ms;
        self.motion_acc %= self.motion_interval_ms;
        log::warn!("Dropped {} motion ticks after a stall", dropped);
    }
}

/// Everything one `advance` call produced
#[derive(Debug, Clone)]
pub struct StepOutput {
    /// Snapshot of the state after all fired ticks
    pub frame: RenderFrame,
    /// Events from every fired tick, in order
    pub events: Vec<GameEvent>,
    pub motion_ticks: u32,
    pub countdown_ticks: u32,
}

/// Feed `dt_ms` of elapsed time, run every tick that falls due, return the frame
///
/// Keys in `input` are queued and read by the next motion tick, which may be in
/// a later call. After game over nothing fires and queued keys are discarded.
pub fn advance(
    state: &mut GameState,
    clock: &mut Clock,
    input: &TickInput,
    dt_ms: u32,
) -> StepOutput {
    let mut events = Vec::new();
    let mut motion_ticks = 0;
    let mut countdown_ticks = 0;

    if !state.is_over() {
        clock.pending_keys.extend_from_slice(&input.keys);
        clock.motion_acc += u64::from(dt_ms);
        clock.countdown_acc += u64::from(dt_ms);
    }

    while !state.is_over() {
        let motion_due = clock.motion_due();
        let countdown_due = clock.countdown_due();

        if motion_due && motion_ticks >= MAX_SUBSTEPS {
            clock.drop_motion_backlog();
            continue;
        }

        if motion_due && (!countdown_due || clock.motion_first()) {
            clock.motion_acc -= clock.motion_interval_ms;
            let tick_input = TickInput {
                keys: std::mem::take(&mut clock.pending_keys),
                idle_mode: input.idle_mode,
            };
            events.extend(motion_tick(state, &tick_input));
            motion_ticks += 1;
        } else if countdown_due {
            clock.countdown_acc -= clock.countdown_interval_ms;
            events.extend(countdown_tick(state));
            countdown_ticks += 1;
        } else {
            break;
        }
    }

    if state.is_over() {
        // Both timers stop for good
        clock.pending_keys.clear();
        clock.motion_acc = 0;
        clock.countdown_acc = 0;
    }

    StepOutput {
        frame: RenderFrame::capture(state),
        events,
        motion_ticks,
        countdown_ticks,
    }
}
