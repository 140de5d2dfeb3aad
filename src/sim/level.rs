//! Level planning
//!
//! Derives maze dimensions, goal placement and the obstacle field from the
//! level counter. The opening level is a fixed 10x10 maze with the goal in
//! the far corner; every generation after that (level completes and
//! restarts) samples goal candidates and scales the maze with the level.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::maze::{self, Maze};
use super::obstacles;
use super::state::{Bounds, GameState};
use crate::consts::{FIRST_MAZE_SIZE, SPAWN, WALL_THICKNESS};

/// Build the fixed opening level: 10x10 maze, player tucked into the
/// top-left corner, goal at the far corner cell center, no obstacles yet.
pub fn generate_first(state: &mut GameState) {
    let maze = Maze::carve(FIRST_MAZE_SIZE, FIRST_MAZE_SIZE, &mut state.rng);
    state.walls = maze::emit_walls(
        &maze,
        state.bounds,
        state.tuning.inner_wall_probability,
        &mut state.rng,
    );

    state.player.pos = Vec2::splat(WALL_THICKNESS * 2.0);

    let cell = maze::cell_size(state.bounds, maze.width, maze.height);
    state.goal.pos = Vec2::new(
        WALL_THICKNESS + (maze.width - 1) as f32 * cell + cell / 2.0,
        WALL_THICKNESS + (maze.height - 1) as f32 * cell + cell / 2.0,
    );

    state.maze = maze;
    state.obstacles.clear();

    log::debug!(
        "first level generated: {} walls, goal at {}",
        state.walls.len(),
        state.goal.pos
    );
}

/// Regenerate geometry for the current level counter: `(5+level)`-square
/// maze, sampled far goal, `2 * level` obstacles.
pub fn generate(state: &mut GameState) {
    state.player.pos = SPAWN;

    let dim = 5 + state.level as usize;
    let maze = Maze::carve(dim, dim, &mut state.rng);
    state.walls = maze::emit_walls(
        &maze,
        state.bounds,
        state.tuning.inner_wall_probability,
        &mut state.rng,
    );
    state.maze = maze;

    state.goal.pos = sample_goal(
        &mut state.rng,
        state.bounds,
        state.player.pos,
        state.goal.size,
        state.tuning.goal_samples,
    );

    state.obstacles = obstacles::spawn_field(
        &mut state.rng,
        state.bounds,
        state.level,
        &state.tuning,
    );

    log::debug!(
        "level {} generated: {}x{} maze, {} walls, {} obstacles",
        state.level,
        dim,
        dim,
        state.walls.len(),
        state.obstacles.len()
    );
}

/// Sample `samples` candidate goal positions uniformly inside the bounds
/// (inset by the goal radius) and keep the one farthest from `origin`.
/// Ties break toward the first maximum encountered.
pub fn sample_goal(
    rng: &mut Pcg32,
    bounds: Bounds,
    origin: Vec2,
    goal_size: f32,
    samples: u32,
) -> Vec2 {
    let mut best = Vec2::ZERO;
    let mut best_dist = 0.0;

    for _ in 0..samples {
        let candidate = Vec2::new(
            rng.random::<f32>() * (bounds.width - goal_size) + goal_size / 2.0,
            rng.random::<f32>() * (bounds.height - goal_size) + goal_size / 2.0,
        );
        let dist = candidate.distance(origin);
        if dist > best_dist {
            best_dist = dist;
            best = candidate;
        }
    }

    best
}
