//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only, passed in explicitly
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod scroller;
pub mod state;
pub mod tick;

pub use collision::{collides_with_player, colliding_obstacle};
pub use obstacle::{Obstacle, ObstacleField, ObstacleKind};
pub use player::{Player, PlayerPhase};
pub use scroller::Scroller;
pub use state::{GameEvent, GameState, RunPhase};
pub use tick::{TickInput, TickStatus, tick};
