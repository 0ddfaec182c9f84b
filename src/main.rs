//! Wolf Game entry point
//!
//! Headless native runner: drives one session through the two-timer clock and
//! prints a frame after every motion tick. With the autopilot on it plays
//! itself; with it off, key lines read from stdin (`w`, `-w`, `down a`, ...)
//! steer the wolf and the clock runs in real time.
//!
//! Usage: `wolf-game [settings.json]`

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use wolf_game::Settings;
use wolf_game::renderer::{self, RenderError, RenderFrame};
use wolf_game::sim::{Clock, GameEvent, GameState, KeyEvent, TickInput, advance};

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    let keys = if settings.autopilot {
        None
    } else {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || forward_keys(io::stdin().lock(), tx));
        Some(rx)
    };

    match run(&settings, keys.as_ref()) {
        Ok(score) => log::info!("Session finished with score {}", score),
        Err(e) => {
            log::error!("Output error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Parse key lines and send them to the game loop until input ends
fn forward_keys(reader: impl BufRead, tx: Sender<KeyEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Key input closed: {}", e);
                return;
            }
        };
        match KeyEvent::parse(&line) {
            Some(event) => {
                if tx.send(event).is_err() {
                    // Game loop is gone
                    return;
                }
            }
            None if line.trim().is_empty() => {}
            None => log::debug!("Ignoring key input {:?}", line),
        }
    }
}

/// Play one session to game over, returning the final score
fn run(settings: &Settings, keys: Option<&Receiver<KeyEvent>>) -> Result<u32, RenderError> {
    let seed = settings.seed.unwrap_or_else(rand::random);
    // A human needs wall-clock time to react
    let realtime = settings.realtime || keys.is_some();
    log::info!(
        "Wolf Game starting: seed {}, motion {} ms, countdown {} ms, autopilot {}, realtime {}",
        seed,
        settings.motion_interval_ms,
        settings.countdown_interval_ms,
        settings.autopilot,
        realtime
    );

    let mut state = GameState::with_session_seconds(seed, settings.session_seconds);
    let mut clock = Clock::new(settings.motion_interval_ms, settings.countdown_interval_ms);
    let input = TickInput {
        idle_mode: settings.autopilot,
        ..Default::default()
    };

    let stdout = io::stdout();
    let mut renderer = renderer::for_format(settings.frame_output, stdout.lock());
    renderer.draw(&RenderFrame::capture(&state))?;

    while !state.is_over() {
        // Jump straight to the next motion tick
        let dt = clock.until_next_motion_ms().max(1);
        if realtime {
            std::thread::sleep(Duration::from_millis(dt));
        }

        if let Some(keys) = keys {
            for event in keys.try_iter() {
                clock.queue_key(event);
            }
        }

        let out = advance(&mut state, &mut clock, &input, dt as u32);
        if out.motion_ticks > 0 {
            renderer.draw(&out.frame)?;
        }
        for event in &out.events {
            if let GameEvent::GameOver { score } = event {
                renderer.game_over(*score)?;
            }
        }
    }

    Ok(state.score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolf_game::sim::Key;

    #[test]
    fn test_forward_keys_parses_lines() {
        let (tx, rx) = mpsc::channel();
        forward_keys("d\n\nbogus\n-d\ndown w\n".as_bytes(), tx);

        let events: Vec<KeyEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                KeyEvent::Down(Key::D),
                KeyEvent::Up(Key::D),
                KeyEvent::Down(Key::W),
            ]
        );
    }

    #[test]
    fn test_forwarded_keys_move_wolf() {
        let (tx, rx) = mpsc::channel();
        forward_keys("d\n".as_bytes(), tx);

        let mut state = GameState::new(3);
        let mut clock = Clock::default();
        for event in rx.try_iter() {
            clock.queue_key(event);
        }
        // Start clear of the walls
        state.wolf.position = glam::IVec2::new(400, 330);
        let input = TickInput::default();
        for _ in 0..3 {
            advance(&mut state, &mut clock, &input, 100);
        }
        assert_eq!(state.wolf.position, glam::IVec2::new(430, 330));
    }
}
