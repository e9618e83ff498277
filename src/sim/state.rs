//! Game state and run lifecycle
//!
//! Everything a run needs lives in [`GameState`], which the frame driver owns.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::{ObstacleField, ObstacleKind};
use super::player::Player;
use super::scroller::Scroller;
use crate::settings::Settings;

/// Top-level phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Active gameplay
    #[default]
    Running,
    /// Player hit an obstacle; the world is frozen until restart
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    JumpStarted,
    Landed,
    ObstacleSpawned { kind: ObstacleKind },
    Collision { kind: ObstacleKind, score: u64 },
    Restarted,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source of all gameplay randomness
    pub rng: Pcg32,
    pub player: Player,
    pub scroller: Scroller,
    pub obstacles: ObstacleField,
    pub phase: RunPhase,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Runs started since construction (the first run counts)
    pub runs: u32,
    /// Best score across runs (not persisted)
    pub best_score: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let player = Player::new(settings.floor_y(), settings.apex_y());
        let scroller = Scroller::new(
            settings.initial_speed,
            settings.max_speed,
            settings.assets.background_width,
        );
        let obstacles = ObstacleField::new(&settings);

        log::info!("Run 1 starting (seed {seed})");

        Self {
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player,
            scroller,
            obstacles,
            phase: RunPhase::Running,
            time_ticks: 0,
            runs: 1,
            best_score: 0,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == RunPhase::GameOver
    }

    /// Reset player, scroller and obstacles in one step and start a new run
    pub fn restart(&mut self) {
        self.player.restart();
        self.scroller.restart();
        self.obstacles.clear();
        self.phase = RunPhase::Running;
        self.time_ticks = 0;
        self.runs += 1;
        self.events.push(GameEvent::Restarted);
        log::info!("Run {} starting (best score {})", self.runs, self.best_score);
    }

    /// End the run
    pub(crate) fn game_over(&mut self, kind: ObstacleKind) {
        let score = self.player.score;
        self.phase = RunPhase::GameOver;
        self.best_score = self.best_score.max(score);
        self.events.push(GameEvent::Collision { kind, score });
        log::info!(
            "Game over: hit {} obstacle with score {} (best {})",
            kind.as_str(),
            score,
            self.best_score
        );
    }

    /// Place an obstacle directly, skipping the spawn gate
    pub fn spawn_obstacle(&mut self, kind: ObstacleKind, x: f32) {
        self.obstacles.spawn_kind(kind, x, &self.settings.assets);
    }

    /// Evaluate the collision predicate against the current world
    pub fn player_collides(&self) -> bool {
        self.obstacles.collides_with_player(
            self.settings.player_x,
            self.player.y,
            self.settings.floor_y(),
        )
    }

    /// Kind of the obstacle the player is running into, if any
    pub fn collision_kind(&self) -> Option<ObstacleKind> {
        self.obstacles
            .colliding_obstacle(self.settings.player_x, self.player.y, self.settings.floor_y())
            .map(|o| o.kind)
    }
}
