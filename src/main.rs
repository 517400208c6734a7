mod display;

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use side_shooter::compute::{init_state, is_game_over, reset, snapshot, update};
use side_shooter::entities::{GameEvent, SessionState};
use side_shooter::input::{HeldIntents, Intent};
use side_shooter::scheduler::{FrameClock, TickSource};
use side_shooter::GameConfig;

const TARGET_FPS: u32 = 60;

/// Longest Δt handed to the simulation, whatever the terminal did.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈133 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

/// Names a file to receive `env_logger` output.  Unset means no logging;
/// stderr is unusable while the alternate screen is up.
const LOG_ENV_VAR: &str = "SIDE_SHOOTER_LOG";

/// Keys bound to each intent.
const BINDINGS: &[(Intent, &[KeyCode])] = &[
    (Intent::Up, &[KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')]),
    (Intent::Down, &[KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')]),
    (Intent::Left, &[KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]),
    (Intent::Right, &[KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]),
    (Intent::Fire, &[KeyCode::Char(' ')]),
];

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn held_intents(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> HeldIntents {
    BINDINGS
        .iter()
        .filter(|(_, keys)| keys.iter().any(|k| is_held(key_frame, k, frame)))
        .map(|(intent, _)| *intent)
        .collect()
}

// ── Command line ──────────────────────────────────────────────────────────────

/// Side-scrolling arcade shooter in the terminal.
#[derive(Parser, Debug)]
#[command(name = "side_shooter", version)]
struct Cli {
    /// JSON file overriding the default tunables
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Seed for enemy spawns; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn init_logging() {
    let Ok(path) = std::env::var(LOG_ENV_VAR) else {
        return;
    };
    match File::create(&path) {
        Ok(file) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        Err(e) => eprintln!("cannot open log file {path}: {e}"),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame the keys still "fresh" (within
/// `HOLD_WINDOW` frames) become the held intents for `update`, so Space and
/// a direction can be held together.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire after `HOLD_WINDOW` frames of silence.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut SessionState,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let mut clock = FrameClock::new(TARGET_FPS, MAX_FRAME_DELTA);
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    while let Some(dt) = clock.next_tick() {
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(());
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if is_game_over(state) => {
                            *state = reset(state);
                            key_frame.clear();
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        let intents = held_intents(&key_frame, frame);
        *state = update(state, &intents, dt, rng);

        // Sound cues would hang off these; the terminal build only logs them.
        if state.events.contains(&GameEvent::GameOver) {
            log::info!("final score {}", state.score);
        }

        display::render(out, &snapshot(state))?;
    }

    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let args = Cli::parse();
    // Load before touching the terminal so a bad file reports cleanly.
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("starting with seed {seed}");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
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

    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = init_state(config);
    let result = game_loop(&mut out, &mut state, &rx, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result?;
    println!("Score: {}", state.score);
    Ok(())
}
