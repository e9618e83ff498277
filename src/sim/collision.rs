//! Player vs obstacle collision
//!
//! The player never moves horizontally, so the test reduces to: is there an
//! obstacle under the player's column, and are the player's feet below its
//! top edge?

use super::obstacle::Obstacle;

/// Find the obstacle the player at (`player_x`, `player_y`) runs into
///
/// Only the first obstacle spanning `player_x` is considered. Obstacles are
/// spaced far enough apart that at most one can be under the player. It is a
/// hit when the obstacle's top (`floor_y - height`) is above the player's feet.
pub fn colliding_obstacle(
    obstacles: &[Obstacle],
    player_x: f32,
    player_y: f32,
    floor_y: f32,
) -> Option<&Obstacle> {
    obstacles
        .iter()
        .find(|o| o.spans_x(player_x))
        .filter(|o| floor_y - o.height < player_y)
}

/// Check whether the player at (`player_x`, `player_y`) hits an obstacle
#[inline]
pub fn collides_with_player(
    obstacles: &[Obstacle],
    player_x: f32,
    player_y: f32,
    floor_y: f32,
) -> bool {
    colliding_obstacle(obstacles, player_x, player_y, floor_y).is_some()
}
