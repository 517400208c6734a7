//! Frame pacing.
//!
//! The simulation never reads a clock.  It is fed Δt values by a
//! `TickSource`: a real-time `FrameClock` for the terminal game, or a
//! scripted source so tests can drive whole sessions synchronously.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::compute::update;
use crate::entities::SessionState;
use crate::input::IntentSource;

/// Used when a caller asks for 0 FPS.
pub const DEFAULT_FPS: u32 = 60;

/// Supplies the Δt, in seconds, of each successive frame.
pub trait TickSource {
    /// `None` ends the run.
    fn next_tick(&mut self) -> Option<f32>;
}

/// `frames` ticks of the same `dt`.
#[derive(Clone, Debug)]
pub struct FixedStep {
    dt: f32,
    remaining: u64,
}

impl FixedStep {
    pub fn new(dt: f32, frames: u64) -> Self {
        FixedStep { dt, remaining: frames }
    }
}

impl TickSource for FixedStep {
    fn next_tick(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.dt)
    }
}

/// Replays a recorded list of Δt values.
#[derive(Clone, Debug)]
pub struct ScriptedTicks {
    ticks: std::vec::IntoIter<f32>,
}

impl From<Vec<f32>> for ScriptedTicks {
    fn from(ticks: Vec<f32>) -> Self {
        ScriptedTicks {
            ticks: ticks.into_iter(),
        }
    }
}

impl TickSource for ScriptedTicks {
    fn next_tick(&mut self) -> Option<f32> {
        self.ticks.next()
    }
}

/// Wall-clock source that paces frames by sleeping.
///
/// Each call waits until a full frame has passed since the previous one,
/// then reports the real time elapsed, capped at `max_delta` so a stalled
/// terminal does not fling entities across the screen.  Never ends.
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    max_delta: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32, max_delta: Duration) -> Self {
        let fps = if target_fps == 0 { DEFAULT_FPS } else { target_fps };
        FrameClock {
            frame: Duration::from_secs(1) / fps,
            max_delta,
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        FrameClock::new(DEFAULT_FPS, Duration::from_millis(250))
    }
}

impl TickSource for FrameClock {
    fn next_tick(&mut self) -> Option<f32> {
        let since = self.last.elapsed();
        if since < self.frame {
            thread::sleep(self.frame - since);
        }
        let now = Instant::now();
        let dt = (now - self.last).min(self.max_delta);
        self.last = now;
        Some(dt.as_secs_f32())
    }
}

/// Drive `update` until `ticks` runs dry, holding the same intents for
/// every frame.  With a `FrameClock` this never returns.
pub fn run(
    state: &SessionState,
    ticks: &mut impl TickSource,
    intents: &impl IntentSource,
    rng: &mut impl Rng,
) -> SessionState {
    let mut state = state.clone();
    while let Some(dt) = ticks.next_tick() {
        state = update(&state, intents, dt, rng);
    }
    state
}
