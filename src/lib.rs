//! Run It - a side-scrolling obstacle runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump physics, scrolling, spawning, collisions)
//! - `settings`: Screen geometry, tunables and obstacle metadata injected at construction
//! - `view`: Plain-data frame snapshot handed to whatever draws the game

pub mod settings;
pub mod sim;
pub mod view;

pub use settings::{AssetTable, ConfigError, ObstacleMetrics, Settings};
pub use view::FrameView;

/// Game configuration constants
///
/// These are the defaults baked into [`Settings::default`]. The simulation
/// itself only ever reads the values carried by its `Settings`.
pub mod consts {
    /// Screen dimensions
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;
    pub const FLOOR_HEIGHT: f32 = 85.0;
    /// Resting height of the player's feet (pixels from top)
    pub const FLOOR_Y: f32 = WINDOW_HEIGHT - FLOOR_HEIGHT;

    /// Player defaults
    pub const PLAYER_X: f32 = 300.0;
    pub const MAX_JUMP_HEIGHT: f32 = 300.0;
    /// Magnitude of the per-tick impulse along the phase direction
    pub const JUMP_IMPULSE: f32 = 3.5;
    /// Per-tick velocity damping
    pub const VELOCITY_DAMPING: f32 = 0.95;
    /// Jump requests are honored only this close to the floor
    pub const JUMP_TOLERANCE: f32 = 10.0;

    /// Scroll speed (pixels/tick, applied leftward)
    pub const INITIAL_BACKGROUND_SPEED: f32 = 6.0;
    pub const MAX_BACKGROUND_SPEED: f32 = 17.0;
    pub const SCROLL_ACCELERATION: f32 = 0.03;

    /// Obstacle spawning
    pub const MAX_OBSTACLES: usize = 3;
    pub const OBSTACLES_MIN_DISTANCE: f32 = 750.0;
    /// Chance (out of 100) per tick of spawning past the soft cap
    pub const OVERFLOW_SPAWN_PERCENT: u32 = 4;

    /// Background tile width used for the cosmetic scroll offset
    pub const BACKGROUND_TILE_WIDTH: f32 = 1280.0;
}
