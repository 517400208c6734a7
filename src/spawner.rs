//! Enemy spawn ramp.
//!
//! Each frame has a `1 - decay^t` chance of adding one enemy, where `t` is
//! the session's elapsed seconds.  The chance starts at zero and creeps
//! towards one forever; there is no upper limit on the spawn rate.

use rand::Rng;

use crate::entities::{Enemy, GameEvent, SessionState};

/// Per-frame spawn probability after `elapsed` seconds of play.
pub fn spawn_probability(elapsed: f32, decay: f32) -> f32 {
    if elapsed <= 0.0 {
        return 0.0;
    }
    let p = 1.0 - f64::from(decay).powf(f64::from(elapsed));
    p.clamp(0.0, 1.0) as f32
}

/// Roll the spawn ramp once and, on success, append an enemy at the right
/// edge with a random vertical offset.
pub fn maybe_spawn(state: &SessionState, rng: &mut impl Rng) -> SessionState {
    let cfg = &state.config;
    let p = spawn_probability(state.elapsed, cfg.spawn_decay);
    let roll: f32 = rng.gen();
    if roll >= p {
        return state.clone();
    }

    let max_y = cfg.viewport_height - cfg.enemy_size.height;
    let y = if max_y > 0.0 { rng.gen_range(0.0..max_y) } else { 0.0 };
    let enemy = Enemy {
        x: cfg.viewport_width,
        y,
        width: cfg.enemy_size.width,
        height: cfg.enemy_size.height,
    };
    log::debug!("frame {}: enemy spawned at y={:.1} (p={:.4})", state.frame, y, p);

    let mut enemies = state.enemies.clone();
    enemies.push(enemy);
    let mut events = state.events.clone();
    events.push(GameEvent::EnemySpawned);
    SessionState {
        enemies,
        events,
        ..state.clone()
    }
}
