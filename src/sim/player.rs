//! Player jump-arc physics
//!
//! The jump is not a projectile. The phase only picks the direction of a
//! constant per-tick impulse, and exponential damping shapes the result into
//! a fast climb, an apex, a controlled fall and a soft landing.

use serde::{Deserialize, Serialize};

use crate::consts::{JUMP_IMPULSE, JUMP_TOLERANCE, VELOCITY_DAMPING};

/// Direction the player is currently being pushed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerPhase {
    /// On the ground, no vertical push
    #[default]
    Resting,
    /// Pushed upward until the apex height is reached
    Rising,
    /// Pushed downward until the floor is hit
    Falling,
}

impl PlayerPhase {
    /// Heading of the push in degrees (0 = up, clockwise)
    pub fn heading_degrees(self) -> f32 {
        match self {
            PlayerPhase::Resting => 90.0,
            PlayerPhase::Rising => 45.0,
            PlayerPhase::Falling => 135.0,
        }
    }

    /// Vertical component of the per-tick impulse (negative is up)
    pub fn vertical_impulse(self) -> f32 {
        match self {
            // cos(90°) is zero, don't let float noise leak into a resting player
            PlayerPhase::Resting => 0.0,
            _ => -self.heading_degrees().to_radians().cos() * JUMP_IMPULSE,
        }
    }
}

/// The runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Feet position, pixels from the top of the screen
    pub y: f32,
    /// Pixels per tick, positive is down
    pub vel_y: f32,
    pub phase: PlayerPhase,
    /// Ticks survived this run
    pub score: u64,
    floor_y: f32,
    apex_y: f32,
}

impl Player {
    /// Create a player standing on `floor_y` that turns around at `apex_y`
    pub fn new(floor_y: f32, apex_y: f32) -> Self {
        Self {
            y: floor_y,
            vel_y: 0.0,
            phase: PlayerPhase::Resting,
            score: 0,
            floor_y,
            apex_y,
        }
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.floor_y, self.apex_y);
    }

    /// Whether the feet are within the jump tolerance of the floor
    pub fn near_floor(&self) -> bool {
        (self.y - self.floor_y).abs() <= JUMP_TOLERANCE
    }

    pub fn is_airborne(&self) -> bool {
        self.y < self.floor_y
    }

    /// Start a jump. Ignored unless resting near the floor.
    ///
    /// Returns true if the jump was started.
    pub fn request_jump(&mut self) -> bool {
        if self.phase != PlayerPhase::Resting || !self.near_floor() {
            return false;
        }
        self.phase = PlayerPhase::Rising;
        true
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        self.score += 1;

        self.vel_y += self.phase.vertical_impulse();
        self.y += self.vel_y;

        if self.y <= self.apex_y {
            self.phase = PlayerPhase::Falling;
        }

        if self.y > self.floor_y {
            self.phase = PlayerPhase::Resting;
            self.y = self.floor_y;
        }

        self.vel_y *= VELOCITY_DAMPING;
    }
}
