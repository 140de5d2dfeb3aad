//! Escalating frustration effects
//!
//! Runs every frame, Active or not: screen-shake decay, the timed inversion
//! flag, the decoy cursor chasing the real pointer's trail, and the idle
//! auto-drift that moves the player when they stop moving themselves.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Phase};
use crate::consts::*;

/// Mutable effect state. Timed effects carry expire-at stamps on the sim
/// clock instead of independent callbacks; a new death simply overwrites
/// the inversion stamp (last death wins).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EffectState {
    /// Screen-shake intensity; decays toward zero but is never zeroed
    pub shake: f32,
    /// Offset sampled for this frame, zero while shake is below epsilon
    pub shake_offset: Vec2,
    /// Decoy cursor position, eased toward sampled trail points
    pub fake_cursor: Vec2,
    /// Inversion stays on until the clock passes this stamp
    pub inverted_until: Option<f64>,
    /// Clock value of the last intentional player movement
    pub last_moved_ms: f64,
}

impl Default for EffectState {
    fn default() -> Self {
        Self {
            shake: 0.0,
            shake_offset: Vec2::ZERO,
            fake_cursor: Vec2::ZERO,
            inverted_until: None,
            last_moved_ms: 0.0,
        }
    }
}

impl EffectState {
    /// Whether the screen is inverted at the given clock value
    pub fn inverted(&self, clock_ms: f64) -> bool {
        self.inverted_until.is_some_and(|until| clock_ms < until)
    }
}

/// Per-frame effect update. Must run before the movement step so the idle
/// drift lands on the same frame cadence as the original host loop.
pub fn tick_effects(state: &mut GameState) {
    let GameState {
        effects,
        rng,
        trail,
        player,
        level,
        phase,
        clock_ms,
        tuning,
        ..
    } = state;

    effects.shake *= SHAKE_DECAY;
    effects.shake_offset = if effects.shake > SHAKE_EPSILON {
        Vec2::new(
            rng.random::<f32>() * effects.shake - effects.shake / 2.0,
            rng.random::<f32>() * effects.shake - effects.shake / 2.0,
        )
    } else {
        Vec2::ZERO
    };

    if effects.inverted_until.is_some_and(|until| *clock_ms >= until) {
        effects.inverted_until = None;
    }

    // Decoy cursor eases toward a random recent trail sample.
    if *level >= tuning.fake_cursor_level && !trail.is_empty() {
        let target = trail[rng.random_range(0..trail.len())];
        effects.fake_cursor += (target - effects.fake_cursor) * FAKE_CURSOR_EASE;
    }

    // Idle drift: one small nudge in a random cardinal direction, every
    // frame until genuine input resets the idle clock.
    if *level >= tuning.nudge_level
        && *phase == Phase::Active
        && *clock_ms - effects.last_moved_ms > tuning.idle_nudge_ms as f64
    {
        match rng.random_range(0..4u8) {
            0 => player.pos.y -= NUDGE_AMOUNT,
            1 => player.pos.y += NUDGE_AMOUNT,
            2 => player.pos.x -= NUDGE_AMOUNT,
            _ => player.pos.x += NUDGE_AMOUNT,
        }
    }
}
