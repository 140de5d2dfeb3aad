//! Rage Maze - a deliberately frustrating maze game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze generation, movement, collisions,
//!   obstacle AI, frustration effects)
//! - `tuning`: Data-driven difficulty knobs
//!
//! This crate is the simulation core only. Rendering, DOM/input wiring and
//! the animation-frame loop live in the host, which feeds [`sim::tick`] with
//! a [`sim::TickInput`] each frame and draws from
//! [`sim::GameState::snapshot`].

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Player bounding square side (collision box and draw diameter)
    pub const PLAYER_SIZE: f32 = 15.0;
    /// Goal circle diameter
    pub const GOAL_SIZE: f32 = 30.0;
    /// Player speed at level 1 (pixels per reference frame)
    pub const INITIAL_SPEED: f32 = 3.0;
    /// Maze wall thickness in pixels
    pub const WALL_THICKNESS: f32 = 5.0;

    /// Reference frame interval: dt is normalized against a 60 Hz frame
    pub const FRAME_REF_MS: f32 = 16.0;

    /// Respawn point after death and on level generation
    pub const SPAWN: Vec2 = Vec2::new(50.0, 50.0);

    /// Screen shake intensity set on death
    pub const DEATH_SHAKE: f32 = 10.0;
    /// Per-frame shake decay factor
    pub const SHAKE_DECAY: f32 = 0.9;
    /// Shake below this is treated as inactive for rendering
    pub const SHAKE_EPSILON: f32 = 0.01;

    /// Fake cursor easing factor toward its trail target
    pub const FAKE_CURSOR_EASE: f32 = 0.1;
    /// Pointer trail ring buffer capacity
    pub const TRAIL_CAPACITY: usize = 20;

    /// Idle auto-nudge displacement per tick
    pub const NUDGE_AMOUNT: f32 = 0.5;

    /// First level maze grid dimensions
    pub const FIRST_MAZE_SIZE: usize = 10;
}

/// Clamp a point into `[min, max]` per axis
#[inline]
pub fn clamp_point(p: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    Vec2::new(p.x.clamp(min.x, max.x), p.y.clamp(min.y, max.y))
}
