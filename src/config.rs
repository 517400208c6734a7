//! Gameplay tunables.
//!
//! Every number the simulation uses lives here so a JSON file can override
//! it.  Missing fields fall back to the defaults below.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::Direction;
use crate::error::ConfigError;

/// Width × height of an entity's bounding box, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSize {
    pub width: f32,
    pub height: f32,
}

impl BoxSize {
    pub const fn new(width: f32, height: f32) -> Self {
        BoxSize { width, height }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,

    /// Pixels per second.
    pub player_speed: f32,
    pub bullet_speed: f32,
    pub enemy_speed: f32,

    /// Minimum seconds between two volleys.
    pub fire_cooldown: f32,
    /// Base of the spawn ramp `1 - decay^t`.  Must be in (0, 1].
    pub spawn_decay: f32,
    /// Score awarded per enemy destroyed.
    pub kill_bonus: u32,

    pub player_size: BoxSize,
    pub enemy_size: BoxSize,
    pub forward_bullet_size: BoxSize,
    /// Shared by the up and down bullets.
    pub vertical_bullet_size: BoxSize,

    /// Top-left corner of the player after a reset.  `None` means
    /// `(50, viewport_height / 2)`.
    pub player_start: Option<(f32, f32)>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            viewport_width: 800.0,
            viewport_height: 474.0,
            player_speed: 200.0,
            bullet_speed: 500.0,
            enemy_speed: 550.0,
            fire_cooldown: 0.1,
            spawn_decay: 0.993,
            kill_bonus: 100,
            player_size: BoxSize::new(40.0, 50.0),
            enemy_size: BoxSize::new(90.0, 76.0),
            forward_bullet_size: BoxSize::new(30.0, 30.0),
            vertical_bullet_size: BoxSize::new(20.0, 40.0),
            player_start: None,
        }
    }
}

impl GameConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<GameConfig, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<GameConfig, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("viewport_width", self.viewport_width)?;
        positive("viewport_height", self.viewport_height)?;

        non_negative("player_speed", self.player_speed)?;
        non_negative("bullet_speed", self.bullet_speed)?;
        non_negative("enemy_speed", self.enemy_speed)?;
        non_negative("fire_cooldown", self.fire_cooldown)?;

        if !(self.spawn_decay > 0.0 && self.spawn_decay <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "spawn_decay must be in (0, 1], got {}",
                self.spawn_decay
            )));
        }

        for (name, size) in [
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
            ("forward_bullet_size", self.forward_bullet_size),
            ("vertical_bullet_size", self.vertical_bullet_size),
        ] {
            positive(name, size.width)?;
            positive(name, size.height)?;
        }

        for (name, size) in [("player_size", self.player_size), ("enemy_size", self.enemy_size)] {
            if size.width > self.viewport_width || size.height > self.viewport_height {
                return Err(ConfigError::Invalid(format!(
                    "{name} {}x{} does not fit the {}x{} viewport",
                    size.width, size.height, self.viewport_width, self.viewport_height
                )));
            }
        }

        let (sx, sy) = self.start_position();
        if !(sx.is_finite() && sy.is_finite())
            || sx < 0.0
            || sy < 0.0
            || sx > self.viewport_width - self.player_size.width
            || sy > self.viewport_height - self.player_size.height
        {
            return Err(ConfigError::Invalid(format!(
                "player_start ({sx}, {sy}) is outside the viewport"
            )));
        }

        Ok(())
    }

    pub fn start_position(&self) -> (f32, f32) {
        self.player_start
            .unwrap_or((50.0, self.viewport_height / 2.0))
    }

    pub fn bullet_size(&self, direction: Direction) -> BoxSize {
        match direction {
            Direction::Forward => self.forward_bullet_size,
            Direction::Up | Direction::Down => self.vertical_bullet_size,
        }
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")))
    }
}
