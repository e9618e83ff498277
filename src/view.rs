//! Read-only frame snapshot for renderers
//!
//! The simulation never draws. After each tick the frame driver takes a
//! [`FrameView`] and hands it to whatever puts pixels on screen.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, ObstacleKind, PlayerPhase, RunPhase};

/// Obstacle as seen by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub kind: ObstacleKind,
    /// Bottom-right corner, on the floor
    pub anchor: Vec2,
    pub size: Vec2,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    pub phase: RunPhase,
    /// Player's feet
    pub player_pos: Vec2,
    pub player_phase: PlayerPhase,
    /// Draw the jumping sprite instead of the running one
    pub player_airborne: bool,
    pub score: u64,
    pub best_score: u64,
    pub scroll_speed: f32,
    pub background_offset: f32,
    pub obstacles: Vec<ObstacleView>,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        let floor_y = state.settings.floor_y();

        Self {
            phase: state.phase,
            player_pos: Vec2::new(state.settings.player_x, state.player.y),
            player_phase: state.player.phase,
            player_airborne: state.player.is_airborne(),
            score: state.player.score,
            best_score: state.best_score,
            scroll_speed: state.scroller.speed(),
            background_offset: state.scroller.offset,
            obstacles: state
                .obstacles
                .obstacles()
                .iter()
                .map(|o| ObstacleView {
                    kind: o.kind,
                    anchor: Vec2::new(o.x, floor_y),
                    size: Vec2::new(o.width, o.height),
                })
                .collect(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == RunPhase::GameOver
    }

    /// One-line HUD text
    pub fn status_line(&self) -> String {
        match self.phase {
            RunPhase::Running => format!("Score: {}", self.score),
            RunPhase::GameOver => format!(
                "Game over - score {} (best {}) - press ENTER to restart",
                self.score, self.best_score
            ),
        }
    }
}
