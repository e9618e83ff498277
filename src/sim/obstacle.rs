//! Obstacles and the field that spawns and scrolls them

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision;
use crate::consts::OVERFLOW_SPAWN_PERCENT;
use crate::settings::{ObstacleMetrics, Settings};

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Big,
    Medium,
    Small,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Big, ObstacleKind::Medium, ObstacleKind::Small];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Big => "big",
            ObstacleKind::Medium => "medium",
            ObstacleKind::Small => "small",
        }
    }

    /// Pick a kind uniformly at random
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A single obstacle sitting on the floor
///
/// `x` is the obstacle's right edge; it covers `[x - width, x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f32, metrics: &impl ObstacleMetrics) -> Self {
        let (width, height) = metrics.size(kind);
        Self {
            kind,
            x,
            width,
            height,
        }
    }

    /// Whether the horizontal span contains `x`
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        (self.x - self.width..=self.x).contains(&x)
    }

    #[inline]
    pub fn on_screen(&self) -> bool {
        self.x + self.width >= 0.0
    }

    pub fn advance(&mut self, velocity: f32) {
        self.x += velocity;
    }
}

/// Ordered collection of obstacles, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    /// Obstacles spawned this run that have scrolled away and been dropped
    retired: usize,
    screen_width: f32,
    min_distance: f32,
    max_obstacles: usize,
}

impl ObstacleField {
    pub fn new(settings: &Settings) -> Self {
        Self {
            obstacles: Vec::with_capacity(settings.max_obstacles + 1),
            retired: 0,
            screen_width: settings.screen_width,
            min_distance: settings.obstacles_min_distance,
            max_obstacles: settings.max_obstacles,
        }
    }

    /// Obstacles still on screen
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Number of obstacles spawned this run, including pruned ones
    pub fn count(&self) -> usize {
        self.obstacles.len() + self.retired
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Most recently spawned obstacle still on screen
    pub fn last(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.retired = 0;
    }

    /// Spawn gate, evaluated once per tick
    ///
    /// At or past `max_obstacles` a spawn is only let through on a 4-in-100
    /// roll. This is a soft cap: the count can and does exceed it. Any spawn
    /// also waits until the previous obstacle has travelled `min_distance`
    /// in from the right edge.
    pub fn should_spawn(&self, rng: &mut impl Rng) -> bool {
        if self.count() >= self.max_obstacles
            && rng.random_range(0..100) >= OVERFLOW_SPAWN_PERCENT
        {
            return false;
        }

        self.last()
            .is_none_or(|last| last.x <= self.screen_width - self.min_distance)
    }

    /// Append an obstacle of random kind at the right edge of the screen
    pub fn spawn(&mut self, rng: &mut impl Rng, metrics: &impl ObstacleMetrics) -> &Obstacle {
        let kind = ObstacleKind::random(rng);
        self.spawn_kind(kind, self.screen_width, metrics)
    }

    /// Append a specific obstacle, bypassing the spawn gate
    pub fn spawn_kind(
        &mut self,
        kind: ObstacleKind,
        x: f32,
        metrics: &impl ObstacleMetrics,
    ) -> &Obstacle {
        self.obstacles.push(Obstacle::new(kind, x, metrics));
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Scroll every obstacle and drop the ones that left the screen
    pub fn advance(&mut self, velocity: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(velocity);
        }

        let before = self.obstacles.len();
        self.obstacles.retain(Obstacle::on_screen);
        self.retired += before - self.obstacles.len();
    }

    /// See [`collides_with_player`](super::collision::collides_with_player)
    pub fn collides_with_player(&self, player_x: f32, player_y: f32, floor_y: f32) -> bool {
        collision::collides_with_player(&self.obstacles, player_x, player_y, floor_y)
    }

    /// See [`colliding_obstacle`](super::collision::colliding_obstacle)
    pub fn colliding_obstacle(
        &self,
        player_x: f32,
        player_y: f32,
        floor_y: f32,
    ) -> Option<&Obstacle> {
        collision::colliding_obstacle(&self.obstacles, player_x, player_y, floor_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::AssetTable;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// Rng that returns the same word forever
    struct FixedRng(u64);

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(self.0 as u8);
        }
    }

    fn field() -> ObstacleField {
        ObstacleField::new(&Settings::default())
    }

    /// An rng whose every draw lands at the bottom of the range
    fn low_roll() -> FixedRng {
        FixedRng(0)
    }

    /// An rng whose every draw lands at the top of the range
    fn high_roll() -> FixedRng {
        FixedRng(u64::MAX)
    }

    #[test]
    fn test_empty_field_always_spawns() {
        let f = field();
        assert!(f.should_spawn(&mut high_roll()));
        assert!(f.should_spawn(&mut low_roll()));
    }

    #[test]
    fn test_spacing_gate() {
        let assets = AssetTable::default();
        let mut f = field();
        let mut rng = Pcg32::seed_from_u64(1);
        f.spawn(&mut rng, &assets);
        assert_eq!(f.last().unwrap().x, WINDOW_WIDTH);

        let threshold = WINDOW_WIDTH - OBSTACLES_MIN_DISTANCE;
        while f.last().unwrap().x > threshold {
            assert!(!f.should_spawn(&mut rng));
            f.advance(-INITIAL_BACKGROUND_SPEED);
        }
        assert!(f.should_spawn(&mut rng));
    }

    #[test]
    fn test_soft_cap_is_probabilistic() {
        let assets = AssetTable::default();
        let mut f = field();
        for _ in 0..MAX_OBSTACLES {
            f.spawn_kind(ObstacleKind::Small, 100.0, &assets);
        }
        assert_eq!(f.count(), MAX_OBSTACLES);

        // Spacing is satisfied, so only the roll decides
        assert!(f.should_spawn(&mut low_roll()));
        assert!(!f.should_spawn(&mut high_roll()));
    }

    #[test]
    fn test_soft_cap_rate() {
        let assets = AssetTable::default();
        let mut f = field();
        for _ in 0..MAX_OBSTACLES {
            f.spawn_kind(ObstacleKind::Medium, 0.0, &assets);
        }
        let mut rng = Pcg32::seed_from_u64(42);
        let allowed = (0..10_000).filter(|_| f.should_spawn(&mut rng)).count();
        // 4% of 10k, with generous slack
        assert!((300..500).contains(&allowed), "allowed {allowed}");
    }

    #[test]
    fn test_spawn_uses_metrics() {
        let assets = AssetTable::default();
        let mut f = field();
        let o = f.spawn_kind(ObstacleKind::Big, 500.0, &assets).clone();
        assert_eq!((o.width, o.height), assets.size(ObstacleKind::Big));
        assert_eq!(o.x, 500.0);
    }

    #[test]
    fn test_random_kinds_cover_all() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(ObstacleKind::random(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_prune_keeps_count() {
        let assets = AssetTable::default();
        let mut f = field();
        f.spawn_kind(ObstacleKind::Small, 10.0, &assets);
        f.spawn_kind(ObstacleKind::Small, 600.0, &assets);
        f.advance(-60.0);
        assert_eq!(f.obstacles().len(), 1);
        assert_eq!(f.count(), 2);

        f.clear();
        assert_eq!(f.count(), 0);
        assert!(f.is_empty());
    }

    #[test]
    fn test_spans_x_is_inclusive() {
        let o = Obstacle::new(ObstacleKind::Small, 336.0, &AssetTable::default());
        assert!(o.spans_x(300.0));
        assert!(o.spans_x(336.0));
        assert!(!o.spans_x(299.9));
        assert!(!o.spans_x(336.1));
    }
}
