//! Shared horizontal scroll speed

use serde::{Deserialize, Serialize};

use crate::consts::SCROLL_ACCELERATION;

/// Scroll velocity shared by the background and every obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scroller {
    /// Pixels per tick, negative is leftward
    pub velocity: f32,
    /// Cosmetic background offset in `[0, tile_width)`
    pub offset: f32,
    initial_speed: f32,
    max_speed: f32,
    tile_width: f32,
}

impl Scroller {
    pub fn new(initial_speed: f32, max_speed: f32, tile_width: f32) -> Self {
        Self {
            velocity: -initial_speed,
            offset: 0.0,
            initial_speed,
            max_speed,
            tile_width,
        }
    }

    pub fn restart(&mut self) {
        self.velocity = -self.initial_speed;
        self.offset = 0.0;
    }

    /// Current speed as a positive number
    #[inline]
    pub fn speed(&self) -> f32 {
        -self.velocity
    }

    /// Speed up by one step, never past the maximum
    pub fn accelerate(&mut self) {
        self.velocity = (self.velocity - SCROLL_ACCELERATION).max(-self.max_speed);
    }

    /// Move the background by one tick
    pub fn advance(&mut self) {
        self.offset = (self.offset + self.velocity).rem_euclid(self.tile_width);
    }
}
