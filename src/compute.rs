//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `SessionState` (and, where needed, an RNG handle or an intent source) and
//! returns a brand-new `SessionState`.  Side effects are limited to the
//! injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Bullet, Direction, Enemy, GameEvent, GameStatus, Player, RenderSnapshot, SessionState,
};
use crate::geometry::box_collides;
use crate::input::{apply_input, IntentSource};
use crate::spawner::maybe_spawn;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session for the given configuration.
pub fn init_state(config: GameConfig) -> SessionState {
    let (x, y) = config.start_position();
    SessionState {
        player: Player {
            x,
            y,
            width: config.player_size.width,
            height: config.player_size.height,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        score: 0,
        elapsed: 0.0,
        // The first press fires immediately.
        since_last_fire: config.fire_cooldown,
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
        config,
    }
}

/// Start a new session, keeping only the configuration.
pub fn reset(state: &SessionState) -> SessionState {
    log::info!("session reset (previous score {})", state.score);
    init_state(state.config.clone())
}

// ── Read-only accessors ──────────────────────────────────────────────────────

pub fn snapshot(state: &SessionState) -> RenderSnapshot<'_> {
    let game_over = is_game_over(state);
    RenderSnapshot {
        player: if game_over { None } else { Some(&state.player) },
        bullets: &state.bullets,
        enemies: &state.enemies,
        score: state.score,
        elapsed: state.elapsed,
        game_over,
        viewport_width: state.config.viewport_width,
        viewport_height: state.config.viewport_height,
    }
}

pub fn is_game_over(state: &SessionState) -> bool {
    state.status == GameStatus::GameOver
}

// ── Simulation step ──────────────────────────────────────────────────────────

/// Move every bullet and enemy by `dt` seconds and drop the ones that left
/// the viewport.  Survivors keep their relative order.
pub fn advance_entities(state: &SessionState, dt: f32) -> SessionState {
    let cfg = &state.config;
    let bullet_step = cfg.bullet_speed * dt;
    let enemy_step = cfg.enemy_speed * dt;

    let bullets: Vec<Bullet> = state
        .bullets
        .iter()
        .filter_map(|b| {
            let mut b = b.clone();
            match b.direction {
                Direction::Forward => b.x += bullet_step,
                Direction::Up => b.y -= bullet_step,
                Direction::Down => b.y += bullet_step,
            }
            if b.y < 0.0 || b.y > cfg.viewport_height || b.x > cfg.viewport_width {
                None
            } else {
                Some(b)
            }
        })
        .collect();

    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .filter_map(|e| {
            let x = e.x - enemy_step;
            // Gone once the right edge has passed the left border.
            if x + e.width < 0.0 {
                None
            } else {
                Some(Enemy { x, ..e.clone() })
            }
        })
        .collect();

    SessionState {
        bullets,
        enemies,
        ..state.clone()
    }
}

// ── Collision resolution ─────────────────────────────────────────────────────

/// Keep the player inside the viewport, let bullets destroy enemies, and end
/// the game if any surviving enemy touches the player.
pub fn resolve_collisions(state: &SessionState) -> SessionState {
    let cfg = &state.config;

    // ── 1. Player bounds (applies after game over too) ───────────────────────
    let player = state
        .player
        .clamped_to(cfg.viewport_width, cfg.viewport_height);

    // ── 2. Bullets ↔ enemies ─────────────────────────────────────────────────
    // An enemy is claimed by the first bullet, in insertion order, that
    // overlaps it.  That bullet is spent and cannot hit anything else.
    let mut bullets = state.bullets.clone();
    let mut enemies: Vec<Enemy> = Vec::with_capacity(state.enemies.len());
    let mut score = state.score;
    let mut events = state.events.clone();

    for enemy in &state.enemies {
        let enemy_box = enemy.bounds();
        match bullets.iter().position(|b| box_collides(&enemy_box, &b.bounds())) {
            Some(hit) => {
                bullets.remove(hit);
                score = score.saturating_add(cfg.kill_bonus);
                events.push(GameEvent::EnemyDestroyed { score });
                log::debug!(
                    "frame {}: enemy at ({:.1}, {:.1}) destroyed, score {}",
                    state.frame,
                    enemy.x,
                    enemy.y,
                    score
                );
            }
            None => enemies.push(enemy.clone()),
        }
    }

    // ── 3. Enemies ↔ player ──────────────────────────────────────────────────
    let player_box = player.bounds();
    let player_hit = enemies.iter().any(|e| box_collides(&e.bounds(), &player_box));

    // Sticky: a second hit on a finished game changes nothing.
    let status = if player_hit {
        if state.status == GameStatus::Playing {
            events.push(GameEvent::GameOver);
            log::info!("game over after {:.1}s with score {}", state.elapsed, score);
        }
        GameStatus::GameOver
    } else {
        state.status
    };

    SessionState {
        player,
        bullets,
        enemies,
        score,
        status,
        events,
        ..state.clone()
    }
}

// ── Per-frame update (nearly pure — RNG is injected) ─────────────────────────

/// Advance the session by one frame of `dt` seconds.
///
/// Order within a frame is fixed: input, motion, spawn, collisions.  A
/// non-positive or non-finite `dt`, or a finished game, leaves everything
/// but the player clamp untouched.
pub fn update(
    state: &SessionState,
    intents: &impl IntentSource,
    dt: f32,
    rng: &mut impl Rng,
) -> SessionState {
    let fresh = SessionState {
        events: Vec::new(),
        ..state.clone()
    };

    if !(dt.is_finite() && dt > 0.0) || fresh.status == GameStatus::GameOver {
        let player = fresh
            .player
            .clamped_to(fresh.config.viewport_width, fresh.config.viewport_height);
        return SessionState { player, ..fresh };
    }

    let ticked = SessionState {
        elapsed: fresh.elapsed + dt,
        frame: fresh.frame + 1,
        ..fresh
    };

    let s = apply_input(&ticked, intents, dt);
    let s = advance_entities(&s, dt);
    let s = maybe_spawn(&s, rng);
    resolve_collisions(&s)
}
