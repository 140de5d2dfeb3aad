//! Moving circular obstacles
//!
//! Obstacles drift, bounce off the play-area boundary, and from the homing
//! level onward occasionally accelerate toward the player with a capped
//! speed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Bounds;
use crate::consts::FRAME_REF_MS;
use crate::tuning::Tuning;

/// A moving circular hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

/// Populate a fresh obstacle field for a level: `obstacles_per_level *
/// level` obstacles at uniform positions, radius in [10, 25), velocity
/// components in `[-0.5, 0.5] * (1 + 0.5 * level)`.
pub fn spawn_field(rng: &mut Pcg32, bounds: Bounds, level: u32, tuning: &Tuning) -> Vec<Obstacle> {
    let count = tuning.obstacles_per_level * level;
    let vel_scale = 1.0 + level as f32 * 0.5;

    (0..count)
        .map(|_| Obstacle {
            pos: Vec2::new(
                rng.random::<f32>() * bounds.width,
                rng.random::<f32>() * bounds.height,
            ),
            radius: 10.0 + rng.random::<f32>() * 15.0,
            vel: Vec2::new(
                (rng.random::<f32>() - 0.5) * vel_scale,
                (rng.random::<f32>() - 0.5) * vel_scale,
            ),
        })
        .collect()
}

/// Advance the field by one frame. Velocities are per reference frame, so
/// positions integrate by `vel * dt / 16`. Each boundary penetration negates
/// the offending velocity component, per axis independently.
#[allow(clippy::too_many_arguments)]
pub fn tick_field(
    obstacles: &mut [Obstacle],
    rng: &mut Pcg32,
    player_pos: Vec2,
    bounds: Bounds,
    level: u32,
    tuning: &Tuning,
    dt: f32,
) {
    let scale = dt / FRAME_REF_MS;
    let homing = level >= tuning.homing_level;
    let max_speed = tuning.obstacle_speed_cap(level);

    for ob in obstacles.iter_mut() {
        ob.pos += ob.vel * scale;

        if ob.pos.x - ob.radius < 0.0 || ob.pos.x + ob.radius > bounds.width {
            ob.vel.x = -ob.vel.x;
        }
        if ob.pos.y - ob.radius < 0.0 || ob.pos.y + ob.radius > bounds.height {
            ob.vel.y = -ob.vel.y;
        }

        if homing && rng.random::<f32>() < tuning.homing_chance {
            apply_homing(ob, player_pos, tuning.homing_factor, max_speed);
        }
    }
}

/// Bias velocity toward a target, then rescale to `max_speed` when the
/// result exceeds it (direction preserved).
pub fn apply_homing(ob: &mut Obstacle, target: Vec2, factor: f32, max_speed: f32) {
    ob.vel += (target - ob.pos) * factor;

    let speed = ob.vel.length();
    if speed > max_speed {
        ob.vel = ob.vel / speed * max_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_spawn_count_scales_with_level() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        assert_eq!(spawn_field(&mut rng, BOUNDS, 1, &tuning).len(), 2);
        assert_eq!(spawn_field(&mut rng, BOUNDS, 7, &tuning).len(), 14);
    }

    #[test]
    fn test_spawn_radius_range() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(5);
        for ob in spawn_field(&mut rng, BOUNDS, 10, &tuning) {
            assert!(ob.radius >= 10.0 && ob.radius < 25.0);
        }
    }

    #[test]
    fn test_integration_normalizes_dt() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = [Obstacle {
            pos: Vec2::new(400.0, 300.0),
            radius: 10.0,
            vel: Vec2::new(2.0, -1.0),
        }];

        // 32ms frame = two reference frames of travel
        tick_field(&mut field, &mut rng, Vec2::ZERO, BOUNDS, 1, &tuning, 32.0);
        assert!((field[0].pos.x - 404.0).abs() < 1e-4);
        assert!((field[0].pos.y - 298.0).abs() < 1e-4);
    }

    #[test]
    fn test_boundary_bounce_negates_velocity() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = [Obstacle {
            pos: Vec2::new(9.0, 300.0),
            radius: 10.0,
            vel: Vec2::new(-1.0, 0.5),
        }];

        tick_field(&mut field, &mut rng, Vec2::ZERO, BOUNDS, 1, &tuning, 16.0);
        assert!(field[0].vel.x > 0.0);
        assert_eq!(field[0].vel.y, 0.5);
    }

    #[test]
    fn test_empty_field_is_noop() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field: [Obstacle; 0] = [];
        tick_field(&mut field, &mut rng, Vec2::ZERO, BOUNDS, 9, &tuning, 16.0);
    }

    proptest! {
        #[test]
        fn prop_homing_respects_speed_cap(
            px in -500.0f32..500.0, py in -500.0f32..500.0,
            ox in 0.0f32..800.0, oy in 0.0f32..600.0,
            vx in -50.0f32..50.0, vy in -50.0f32..50.0,
            level in 4u32..20,
        ) {
            let tuning = Tuning::default();
            let cap = tuning.obstacle_speed_cap(level);
            let mut ob = Obstacle {
                pos: Vec2::new(ox, oy),
                radius: 12.0,
                vel: Vec2::new(vx, vy),
            };
            apply_homing(&mut ob, Vec2::new(px, py), tuning.homing_factor, cap);
            prop_assert!(ob.vel.length() <= cap * 1.0001);
        }

        #[test]
        fn prop_homing_below_cap_unscaled(seed in 0u64..500) {
            // When the biased velocity stays under the cap it is kept as-is.
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut ob = Obstacle {
                pos: Vec2::new(rng.random::<f32>() * 100.0, rng.random::<f32>() * 100.0),
                radius: 12.0,
                vel: Vec2::ZERO,
            };
            let target = ob.pos + Vec2::new(1.0, 1.0);
            let expected = (target - ob.pos) * 0.05;
            apply_homing(&mut ob, target, 0.05, 100.0);
            prop_assert!((ob.vel - expected).length() < 1e-5);
        }
    }
}
