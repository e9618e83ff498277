//! Game settings and obstacle metadata
//!
//! Everything the simulation needs to know about the screen and its tunables
//! is carried here and injected when a [`GameState`](crate::sim::GameState)
//! is built. Settings can be loaded from a JSON file; missing fields fall back
//! to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::ObstacleKind;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Lookup of obstacle dimensions by kind
///
/// Implementations must be pure: the same kind always yields the same size.
pub trait ObstacleMetrics {
    /// `(width, height)` in pixels
    fn size(&self, kind: ObstacleKind) -> (f32, f32);
}

/// Pixel size of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSize {
    pub width: f32,
    pub height: f32,
}

impl SpriteSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Sprite metadata for obstacles and the scrolling background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetTable {
    pub big: SpriteSize,
    pub medium: SpriteSize,
    pub small: SpriteSize,
    /// Width of the tileable background image
    pub background_width: f32,
}

impl Default for AssetTable {
    fn default() -> Self {
        Self {
            big: SpriteSize::new(64.0, 96.0),
            medium: SpriteSize::new(48.0, 72.0),
            small: SpriteSize::new(36.0, 48.0),
            background_width: BACKGROUND_TILE_WIDTH,
        }
    }
}

impl AssetTable {
    fn sprite(&self, kind: ObstacleKind) -> SpriteSize {
        match kind {
            ObstacleKind::Big => self.big,
            ObstacleKind::Medium => self.medium,
            ObstacleKind::Small => self.small,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for kind in ObstacleKind::ALL {
            let sprite = self.sprite(kind);
            if !(sprite.width > 0.0 && sprite.height > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} obstacle must have a positive size, got {}x{}",
                    kind.as_str(),
                    sprite.width,
                    sprite.height
                )));
            }
        }
        if !(self.background_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "background width must be positive, got {}",
                self.background_width
            )));
        }
        Ok(())
    }
}

impl ObstacleMetrics for AssetTable {
    fn size(&self, kind: ObstacleKind) -> (f32, f32) {
        let sprite = self.sprite(kind);
        (sprite.width, sprite.height)
    }
}

/// Screen geometry and gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Height of the ground strip at the bottom of the screen
    pub floor_height: f32,

    // === Player ===
    /// Fixed horizontal position of the player
    pub player_x: f32,
    /// Climb above the floor at which a jump turns into a fall
    pub max_jump_height: f32,

    // === Scrolling ===
    pub initial_speed: f32,
    pub max_speed: f32,

    // === Obstacles ===
    /// Soft cap, see [`ObstacleField::should_spawn`](crate::sim::ObstacleField::should_spawn)
    pub max_obstacles: usize,
    pub obstacles_min_distance: f32,

    pub assets: AssetTable,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: WINDOW_WIDTH,
            screen_height: WINDOW_HEIGHT,
            floor_height: FLOOR_HEIGHT,

            player_x: PLAYER_X,
            max_jump_height: MAX_JUMP_HEIGHT,

            initial_speed: INITIAL_BACKGROUND_SPEED,
            max_speed: MAX_BACKGROUND_SPEED,

            max_obstacles: MAX_OBSTACLES,
            obstacles_min_distance: OBSTACLES_MIN_DISTANCE,

            assets: AssetTable::default(),
        }
    }
}

impl Settings {
    /// Resting height of the player's feet (pixels from top)
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.floor_height
    }

    /// Height at which a rising player is turned around
    #[inline]
    pub fn apex_y(&self) -> f32 {
        self.floor_y() - self.max_jump_height
    }

    /// Check that the settings describe a playable screen
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "screen must have a positive size, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if !(self.floor_height >= 0.0 && self.floor_height < self.screen_height) {
            return Err(ConfigError::Invalid(format!(
                "floor height {} must lie within the screen height {}",
                self.floor_height, self.screen_height
            )));
        }
        if !(self.player_x >= 0.0 && self.player_x <= self.screen_width) {
            return Err(ConfigError::Invalid(format!(
                "player x {} is off screen",
                self.player_x
            )));
        }
        if !(self.max_jump_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max jump height must be positive, got {}",
                self.max_jump_height
            )));
        }
        if !(self.initial_speed > 0.0 && self.max_speed >= self.initial_speed) {
            return Err(ConfigError::Invalid(format!(
                "speeds must satisfy 0 < initial ({}) <= max ({})",
                self.initial_speed, self.max_speed
            )));
        }
        if self.max_obstacles == 0 {
            return Err(ConfigError::Invalid("max obstacles must be at least 1".into()));
        }
        if !(self.obstacles_min_distance >= 0.0
            && self.obstacles_min_distance <= self.screen_width)
        {
            return Err(ConfigError::Invalid(format!(
                "obstacle spacing {} must lie within the screen width {}",
                self.obstacles_min_distance, self.screen_width
            )));
        }
        self.assets.validate()?;

        // Narrower obstacles could hop over the player column in one tick
        for kind in ObstacleKind::ALL {
            let (width, _) = self.assets.size(kind);
            if width < self.max_speed {
                return Err(ConfigError::Invalid(format!(
                    "{} obstacle width {} is below the max speed {}",
                    kind.as_str(),
                    width,
                    self.max_speed
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON (for writing a starter settings file)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let settings = Settings::default();
        assert_eq!(settings.floor_y(), 635.0);
        assert_eq!(settings.apex_y(), 335.0);
        assert_eq!(settings.max_obstacles, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        let parsed = Settings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed = Settings::from_json(r#"{ "max_speed": 20.0, "assets": { "small": { "width": 24.0, "height": 12.0 } } }"#)
            .unwrap();
        assert_eq!(parsed.max_speed, 20.0);
        assert_eq!(parsed.initial_speed, INITIAL_BACKGROUND_SPEED);
        assert_eq!(parsed.assets.size(ObstacleKind::Small), (24.0, 12.0));
        assert_eq!(parsed.assets.size(ObstacleKind::Big), (64.0, 96.0));
    }

    #[test]
    fn test_rejects_inverted_speeds() {
        let err = Settings::from_json(r#"{ "initial_speed": 10.0, "max_speed": 5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_height_obstacle() {
        let mut settings = Settings::default();
        settings.assets.medium.height = 0.0;
        assert!(matches!(settings.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_obstacle_narrower_than_max_speed() {
        let err = Settings::from_json(r#"{ "assets": { "small": { "width": 10.0, "height": 48.0 } } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("small")));

        let mut settings = Settings::default();
        settings.assets.small.width = settings.max_speed;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
