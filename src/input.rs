//! Input-to-motion mapping.
//!
//! The core never sees keys, only intents.  Whoever owns the keyboard
//! implements `IntentSource`; tests hand in a `HeldIntents` directly.

use std::collections::HashSet;

use crate::entities::{Bullet, Direction, GameEvent, GameStatus, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// Capability to ask whether an intent is held this frame.
pub trait IntentSource {
    fn is_active(&self, intent: Intent) -> bool;
}

/// The simplest `IntentSource`: a set of held intents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeldIntents {
    held: HashSet<Intent>,
}

impl HeldIntents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, intent: Intent) {
        self.held.insert(intent);
    }

    pub fn release(&mut self, intent: Intent) {
        self.held.remove(&intent);
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

impl FromIterator<Intent> for HeldIntents {
    fn from_iter<I: IntoIterator<Item = Intent>>(iter: I) -> Self {
        HeldIntents {
            held: iter.into_iter().collect(),
        }
    }
}

impl IntentSource for HeldIntents {
    fn is_active(&self, intent: Intent) -> bool {
        self.held.contains(&intent)
    }
}

/// Move the player for held directions, clamp it to the viewport, then fire
/// a volley if the cooldown allows.  Does nothing once the game is over.
pub fn apply_input(state: &SessionState, intents: &impl IntentSource, dt: f32) -> SessionState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }

    let cfg = &state.config;
    let step = cfg.player_speed * dt;
    let mut player = state.player.clone();

    if intents.is_active(Intent::Down) {
        player.y += step;
    }
    if intents.is_active(Intent::Up) {
        player.y -= step;
    }
    if intents.is_active(Intent::Left) {
        player.x -= step;
    }
    if intents.is_active(Intent::Right) {
        player.x += step;
    }

    let player = player.clamped_to(cfg.viewport_width, cfg.viewport_height);

    let mut since_last_fire = state.since_last_fire + dt;
    let mut bullets = state.bullets.clone();
    let mut events = state.events.clone();

    if intents.is_active(Intent::Fire) && since_last_fire >= cfg.fire_cooldown {
        let (cx, cy) = player.center();
        for direction in Direction::VOLLEY {
            let size = cfg.bullet_size(direction);
            bullets.push(Bullet {
                x: cx,
                y: cy,
                direction,
                width: size.width,
                height: size.height,
            });
        }
        since_last_fire = 0.0;
        events.push(GameEvent::BulletsFired);
        log::debug!("frame {}: volley fired from ({:.1}, {:.1})", state.frame, cx, cy);
    }

    SessionState {
        player,
        bullets,
        events,
        since_last_fire,
        ..state.clone()
    }
}
