//! Game state and core simulation types
//!
//! Everything the sim mutates lives in one owned aggregate passed by
//! exclusive reference into the tick functions. No ambient globals, and no
//! asynchronous timers: timed effects are expire-at stamps on the sim clock.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::EffectState;
use super::level;
use super::maze::{Maze, Wall};
use super::obstacles::Obstacle;
use crate::consts::*;
use crate::tuning::Tuning;

/// Whether gameplay is running. `Inactive` covers both "not started yet"
/// and "run over"; the deaths counter tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Inactive,
    Active,
}

/// Events emitted by a tick for the host to reflect in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Death,
    LevelComplete,
    GameOver,
}

/// Play-area pixel dimensions, supplied by the host's resize collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

/// The player dot
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Bounding square side; radius for circle tests is `size / 2`
    pub size: f32,
    /// Pixels per reference frame, grows each level
    pub speed: f32,
}

/// The level goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec2,
    pub size: f32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; every random draw in the sim goes through this
    pub rng: Pcg32,
    /// Difficulty knobs
    pub tuning: Tuning,
    /// Play-area dimensions; changes take effect on the next generation
    pub bounds: Bounds,
    pub phase: Phase,
    /// Level counter, monotonically increasing within a run
    pub level: u32,
    pub deaths: u32,
    /// Sim clock in milliseconds, advanced by dt every tick
    pub clock_ms: f64,
    /// Accumulated Active play time (the elapsed-time display)
    pub elapsed_ms: f64,
    pub player: Player,
    pub goal: Goal,
    /// Grid from the last carve, kept for cell-size math
    pub maze: Maze,
    pub walls: Vec<Wall>,
    pub obstacles: Vec<Obstacle>,
    pub effects: EffectState,
    /// Recent real-pointer samples, newest last (host-fed, transient)
    #[serde(skip)]
    pub trail: VecDeque<Vec2>,
}

impl GameState {
    /// Create a new run with the first level generated, not yet started
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self::with_tuning(seed, width, height, Tuning::default())
    }

    pub fn with_tuning(seed: u64, width: f32, height: f32, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            bounds: Bounds { width, height },
            phase: Phase::Inactive,
            level: 1,
            deaths: 0,
            clock_ms: 0.0,
            elapsed_ms: 0.0,
            player: Player {
                pos: SPAWN,
                size: PLAYER_SIZE,
                speed: INITIAL_SPEED,
            },
            goal: Goal {
                pos: Vec2::ZERO,
                size: GOAL_SIZE,
            },
            maze: Maze::default(),
            walls: Vec::new(),
            obstacles: Vec::new(),
            effects: EffectState::default(),
            trail: VecDeque::with_capacity(TRAIL_CAPACITY),
        };
        level::generate_first(&mut state);
        state
    }

    /// Begin gameplay on the already-generated first level
    pub fn start(&mut self) {
        self.phase = Phase::Active;
        log::info!("run started (seed {})", self.seed);
    }

    /// Reset the session and begin a fresh run.
    ///
    /// Goes through the generic level generator, so the restarted level 1 is
    /// a 6x6 maze with a sampled goal and two obstacles rather than the
    /// fixed 10x10 opener.
    pub fn restart(&mut self) {
        self.deaths = 0;
        self.level = 1;
        self.elapsed_ms = 0.0;
        self.player.speed = INITIAL_SPEED;
        level::generate(self);
        self.phase = Phase::Active;
        log::info!("run restarted (seed {})", self.seed);
    }

    /// Resize collaborator entry point. Dimensions apply to clamping
    /// immediately and to geometry on the next level generation.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds = Bounds { width, height };
    }

    /// Pointer-move collaborator entry point: record a real-cursor sample
    /// in the bounded trail ring buffer.
    pub fn push_trail_sample(&mut self, pos: Vec2) {
        self.trail.push_back(pos);
        if self.trail.len() > TRAIL_CAPACITY {
            self.trail.pop_front();
        }
    }

    /// Whole seconds of Active play, for the elapsed-time display
    pub fn elapsed_secs(&self) -> u64 {
        (self.elapsed_ms / 1000.0) as u64
    }

    /// Read-only renderable state for the drawing collaborator
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: self.player,
            goal: self.goal,
            walls: &self.walls,
            obstacles: &self.obstacles,
            fake_cursor: self.effects.fake_cursor,
            fake_cursor_active: self.level >= self.tuning.fake_cursor_level
                && self.phase == Phase::Active,
            shake_offset: self.effects.shake_offset,
            inverted: self.effects.inverted(self.clock_ms),
            level: self.level,
            deaths: self.deaths,
            elapsed_secs: self.elapsed_secs(),
        }
    }
}

/// Per-frame view of everything the renderer needs
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub player: Player,
    pub goal: Goal,
    pub walls: &'a [Wall],
    pub obstacles: &'a [Obstacle],
    pub fake_cursor: Vec2,
    pub fake_cursor_active: bool,
    pub shake_offset: Vec2,
    pub inverted: bool,
    pub level: u32,
    pub deaths: u32,
    pub elapsed_secs: u64,
}
