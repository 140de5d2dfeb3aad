//! Per-frame simulation step
//!
//! Host calls [`tick`] once per animation frame with the current input
//! intent and the frame's dt in milliseconds. Effects run every frame;
//! movement, collisions and the obstacle field only while Active.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Bounds, GameEvent, GameState, Phase};
use super::{collision, effects, level, obstacles};
use crate::consts::*;
use crate::clamp_point;

/// Directional input flags for a single tick, updated asynchronously by the
/// host's keyboard collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    pub fn pressed(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Advance the game by one frame. Returns the events the host should
/// reflect in the UI (death counter, level display, game-over screen).
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.clock_ms += dt as f64;
    effects::tick_effects(state);

    if state.phase != Phase::Active {
        return events;
    }
    state.elapsed_ms += dt as f64;

    let move_speed = state.player.speed * (dt / FRAME_REF_MS);
    let resist = state.level >= state.tuning.resistance_level;
    let mut moved = false;

    // Primary displacement, with per-direction random resistance once the
    // level is high enough to make inputs unreliable.
    if input.up {
        let f = resistance(&mut state.rng, resist);
        state.player.pos.y -= move_speed * f;
        moved = true;
    }
    if input.down {
        let f = resistance(&mut state.rng, resist);
        state.player.pos.y += move_speed * f;
        moved = true;
    }
    if input.left {
        let f = resistance(&mut state.rng, resist);
        state.player.pos.x -= move_speed * f;
        moved = true;
    }
    if input.right {
        let f = resistance(&mut state.rng, resist);
        state.player.pos.x += move_speed * f;
        moved = true;
    }

    if moved {
        state.effects.last_moved_ms = state.clock_ms;
    }

    // Inertia overshoot compounds on top of the primary displacement and is
    // NOT resistance-scaled.
    let inertia = state.tuning.inertia_factor(state.level);
    if moved && inertia > 0.0 {
        if input.up {
            state.player.pos.y -= move_speed * inertia;
        }
        if input.down {
            state.player.pos.y += move_speed * inertia;
        }
        if input.left {
            state.player.pos.x -= move_speed * inertia;
        }
        if input.right {
            state.player.pos.x += move_speed * inertia;
        }
    }

    state.player.pos = clamp_to_bounds(state.player.pos, state.player.size, state.bounds);

    // Walls first, then obstacles; a death short-circuits the goal check
    // for this tick (the player is already back at spawn).
    let half = state.player.size / 2.0;
    let died = state
        .walls
        .iter()
        .any(|w| collision::player_wall_overlap(state.player.pos, state.player.size, w))
        || state
            .obstacles
            .iter()
            .any(|o| collision::circles_overlap(state.player.pos, half, o.pos, o.radius));

    if died {
        handle_death(state, &mut events);
    } else if collision::circles_overlap(
        state.player.pos,
        half,
        state.goal.pos,
        state.goal.size / 2.0,
    ) {
        advance_level(state);
        events.push(GameEvent::LevelComplete);
    }

    obstacles::tick_field(
        &mut state.obstacles,
        &mut state.rng,
        state.player.pos,
        state.bounds,
        state.level,
        &state.tuning,
        dt,
    );

    events
}

fn resistance(rng: &mut Pcg32, active: bool) -> f32 {
    if active {
        rng.random::<f32>() * 0.5 + 0.5
    } else {
        1.0
    }
}

/// Clamp the player's center so the bounding square stays inside the play
/// area. Degenerate bounds collapse to a valid point instead of panicking.
pub fn clamp_to_bounds(pos: Vec2, size: f32, bounds: Bounds) -> Vec2 {
    let half = size / 2.0;
    let max = Vec2::new(
        (bounds.width - half).max(half),
        (bounds.height - half).max(half),
    );
    clamp_point(pos, Vec2::splat(half), max)
}

fn handle_death(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.deaths += 1;
    events.push(GameEvent::Death);

    state.effects.shake = DEATH_SHAKE;
    state.player.pos = SPAWN;

    // Each death restarts the inversion window; the latest stamp wins.
    if state.level >= state.tuning.inversion_level {
        state.effects.inverted_until = Some(state.clock_ms + state.tuning.inversion_ms as f64);
    }

    log::debug!("death {} on level {}", state.deaths, state.level);

    if state.deaths >= state.tuning.max_deaths {
        state.phase = Phase::Inactive;
        events.push(GameEvent::GameOver);
        log::info!(
            "game over: {} deaths, level {}, {}s played",
            state.deaths,
            state.level,
            state.elapsed_secs()
        );
    }
}

fn advance_level(state: &mut GameState) {
    state.level += 1;
    state.player.speed += state.tuning.speed_increment;
    level::generate(state);
    log::info!("level {} reached", state.level);
}
