//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Host-driven ticks with explicit dt only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod effects;
pub mod level;
pub mod maze;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, player_wall_overlap};
pub use effects::EffectState;
pub use maze::{Maze, Wall};
pub use obstacles::Obstacle;
pub use state::{Bounds, GameEvent, GameState, Goal, Phase, Player, Snapshot};
pub use tick::{TickInput, tick};
