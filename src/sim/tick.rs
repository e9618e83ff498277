//! Per-frame simulation tick
//!
//! Core game loop that advances the run by one frame.

use super::player::PlayerPhase;
use super::state::{GameEvent, GameState, RunPhase};

/// How far ahead (in ticks of travel at the current speed) the autopilot
/// looks before jumping
pub const AUTOPILOT_LEAD_TICKS: f32 = 30.0;

/// Input commands for a single tick
///
/// Signals are level-triggered: holding jump re-requests it every tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump key is down
    pub jump_held: bool,
    /// Restart key is down (only honored after game over)
    pub restart_requested: bool,
    /// Quit key is down
    pub quit_requested: bool,
    /// Demo mode - the simulation decides when to jump
    pub autopilot: bool,
}

/// What the frame driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Continue,
    Quit,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> TickStatus {
    state.events.clear();

    if input.quit_requested {
        log::info!("Quit requested after {} ticks", state.time_ticks);
        return TickStatus::Quit;
    }

    if state.phase == RunPhase::GameOver {
        // Frozen world: restart is the only way out
        if input.restart_requested {
            state.restart();
        }
        return TickStatus::Continue;
    }

    // Something may have been placed on the player since the last tick
    if let Some(kind) = state.collision_kind() {
        state.game_over(kind);
        return TickStatus::Continue;
    }

    state.time_ticks += 1;

    // 1. Jump request
    let wants_jump = input.jump_held || (input.autopilot && autopilot_wants_jump(state));
    if wants_jump && state.player.request_jump() {
        log::debug!("Jump at tick {}", state.time_ticks);
        state.events.push(GameEvent::JumpStarted);
    }

    // 2. Player
    let was_airborne = state.player.is_airborne();
    state.player.tick();
    if was_airborne && state.player.phase == PlayerPhase::Resting {
        state.events.push(GameEvent::Landed);
    }

    // 3. Scroller
    state.scroller.accelerate();
    state.scroller.advance();

    // 4. Obstacles
    if state.obstacles.should_spawn(&mut state.rng) {
        let kind = state
            .obstacles
            .spawn(&mut state.rng, &state.settings.assets)
            .kind;
        log::debug!(
            "Spawned {} obstacle at tick {} ({} this run)",
            kind.as_str(),
            state.time_ticks,
            state.obstacles.count()
        );
        state.events.push(GameEvent::ObstacleSpawned { kind });
    }
    state.obstacles.advance(state.scroller.velocity);

    // 5. Collision
    if let Some(kind) = state.collision_kind() {
        state.game_over(kind);
    }

    TickStatus::Continue
}

/// Jump when the nearest obstacle ahead is about to reach the player
///
/// Also holds jump while a landing is still bouncing off the floor: the
/// request can't launch yet, but its upward impulse soaks up the leftover
/// downward velocity so the next real jump isn't delayed.
fn autopilot_wants_jump(state: &GameState) -> bool {
    let player = &state.player;
    if player.phase == PlayerPhase::Resting
        && player.vel_y > PlayerPhase::Falling.vertical_impulse()
    {
        return true;
    }

    let player_x = state.settings.player_x;
    let lookahead = state.scroller.speed() * AUTOPILOT_LEAD_TICKS;

    state
        .obstacles
        .obstacles()
        .iter()
        .map(|o| o.x - o.width - player_x)
        .filter(|gap| *gap >= 0.0)
        .min_by(|a, b| a.total_cmp(b))
        .is_some_and(|gap| gap <= lookahead)
}
