//! Difficulty tuning knobs
//!
//! Everything that shapes how mean a run feels lives here, so the host can
//! persist or override it as JSON without touching the sim.

use serde::{Deserialize, Serialize};

/// Difficulty parameters consulted by level generation, obstacle AI and the
/// frustration effects. Defaults reproduce the stock game balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Maze generation ===
    /// Chance of emitting each inner wall segment (per cell, per axis)
    pub inner_wall_probability: f32,
    /// Goal candidates sampled per level; farthest from spawn wins
    pub goal_samples: u32,

    // === Obstacles ===
    /// Obstacles spawned per level number
    pub obstacles_per_level: u32,
    /// Per-tick chance an obstacle homes toward the player
    pub homing_chance: f32,
    /// Velocity bias applied when homing triggers
    pub homing_factor: f32,
    /// Obstacle speed cap: `cap_base + cap_per_level * level`
    pub speed_cap_base: f32,
    pub speed_cap_per_level: f32,

    // === Player scaling ===
    /// Speed gained on each level complete
    pub speed_increment: f32,
    /// Extra displacement per level above the inertia threshold
    pub inertia_per_level: f32,

    // === Effect level thresholds ===
    pub fake_cursor_level: u32,
    pub inversion_level: u32,
    pub inertia_level: u32,
    pub homing_level: u32,
    pub nudge_level: u32,
    pub resistance_level: u32,

    // === Timers (milliseconds) ===
    /// How long the screen stays inverted after a death
    pub inversion_ms: f32,
    /// Idle time before the auto-nudge drift kicks in
    pub idle_nudge_ms: f32,

    // === Session ===
    /// Deaths that end the run
    pub max_deaths: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            inner_wall_probability: 0.25,
            goal_samples: 10,

            obstacles_per_level: 2,
            homing_chance: 0.02,
            homing_factor: 0.05,
            speed_cap_base: 2.0,
            speed_cap_per_level: 0.5,

            speed_increment: 0.5,
            inertia_per_level: 0.1,

            fake_cursor_level: 2,
            inversion_level: 3,
            inertia_level: 3,
            homing_level: 4,
            nudge_level: 4,
            resistance_level: 5,

            inversion_ms: 1000.0,
            idle_nudge_ms: 2000.0,

            max_deaths: 50,
        }
    }
}

impl Tuning {
    /// Inertia overshoot factor for a level (0 below the threshold)
    pub fn inertia_factor(&self, level: u32) -> f32 {
        if level >= self.inertia_level {
            self.inertia_per_level * (level - 2) as f32
        } else {
            0.0
        }
    }

    /// Obstacle speed cap for a level
    pub fn obstacle_speed_cap(&self, level: u32) -> f32 {
        self.speed_cap_base + self.speed_cap_per_level * level as f32
    }

    /// Parse tuning from a JSON document (host-persisted)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize tuning for host persistence
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inertia_factor_thresholds() {
        let t = Tuning::default();
        assert_eq!(t.inertia_factor(1), 0.0);
        assert_eq!(t.inertia_factor(2), 0.0);
        assert!((t.inertia_factor(3) - 0.1).abs() < 1e-6);
        assert!((t.inertia_factor(5) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_speed_cap_scales_with_level() {
        let t = Tuning::default();
        assert!((t.obstacle_speed_cap(4) - 4.0).abs() < 1e-6);
        assert!((t.obstacle_speed_cap(10) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_json_round_trip_and_partial() {
        let t = Tuning::default();
        let json = t.to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.max_deaths, t.max_deaths);

        // Missing fields fall back to defaults
        let partial = Tuning::from_json(r#"{"max_deaths": 10}"#).unwrap();
        assert_eq!(partial.max_deaths, 10);
        assert_eq!(partial.goal_samples, 10);
    }
}
