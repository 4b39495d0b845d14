mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::info;
use rand::thread_rng;

use goal_shooter::compute::init_state;
use goal_shooter::config::Config;
use goal_shooter::error::GameError;
use goal_shooter::frame::{step, RunState};
use goal_shooter::input::InputTracker;
use goal_shooter::logging::setup_logging;

use display::Viewport;

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Poll → step → render → present, paced to the configured frame budget.
/// A tick that overruns its budget is never skipped; the loop just runs
/// slower.  Returns once the quit signal has been seen.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<(), GameError> {
    let config = Config::new();
    let budget = config.frame_budget();
    let mut rng = thread_rng();
    let mut tracker = InputTracker::new();
    let mut state = init_state(config);
    let mut run_state = RunState::Running;

    info!("kick-off");

    while run_state == RunState::Running {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        tracker.begin_tick();
        while let Ok(event) = rx.try_recv() {
            tracker.handle(&event);
        }
        let input = tracker.take_input();

        (run_state, state) = step(run_state, &state, &input, &mut rng);
        if run_state == RunState::Terminated {
            break;
        }

        display::render(out, &state, Viewport::current()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        }
    }

    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let log_path = setup_logging()?;
    info!("logging to {}", log_path.display());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("{err}");
    }
    result
}
