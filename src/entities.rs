//! All game entity types — plain data plus bounding-box helpers.

use crate::config::GameConfig;
use crate::geometry::Rect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Something that happened during the last `update`.  Collaborators such
/// as a sound player or a game-over overlay read these; the core ignores them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// One three-way volley left the player.
    BulletsFired,
    EnemySpawned,
    /// An enemy was shot; `score` is the total after the kill.
    EnemyDestroyed { score: u32 },
    GameOver,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Axis a bullet travels along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +x
    Forward,
    /// −y
    Up,
    /// +y
    Down,
}

impl Direction {
    /// Every volley fires one bullet per direction, in this order.
    pub const VOLLEY: [Direction; 3] = [Direction::Forward, Direction::Up, Direction::Down];
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub direction: Direction,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Player {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Same player, moved back inside a `width` × `height` viewport.
    pub fn clamped_to(&self, width: f32, height: f32) -> Player {
        let bounds = self.bounds().clamp_within(width, height);
        Player {
            x: bounds.x,
            y: bounds.y,
            ..self.clone()
        }
    }

    /// Where a volley starts.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub player: Player,
    /// Insertion order decides which bullet claims an enemy first.
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    /// Seconds of play since the last reset.  Frozen once the game is over.
    pub elapsed: f32,
    /// Seconds since the last volley, compared against `config.fire_cooldown`.
    pub since_last_fire: f32,
    pub status: GameStatus,
    /// Frames simulated since the last reset.
    pub frame: u64,
    /// Events produced by the most recent `update`.
    pub events: Vec<GameEvent>,
    pub config: GameConfig,
}

/// Read-only view handed to a renderer.
#[derive(Clone, Copy, Debug)]
pub struct RenderSnapshot<'a> {
    /// `None` once the game is over; a dead player is not drawn.
    pub player: Option<&'a Player>,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub score: u32,
    pub elapsed: f32,
    pub game_over: bool,
    pub viewport_width: f32,
    pub viewport_height: f32,
}
