//! Collision tests
//!
//! The player is a `size x size` axis-aligned box against walls and a
//! circle of radius `size / 2` against obstacles and the goal.

use glam::Vec2;

use super::maze::Wall;

/// AABB overlap between the player's bounding square and a wall rectangle
pub fn player_wall_overlap(pos: Vec2, size: f32, wall: &Wall) -> bool {
    let half = size / 2.0;
    pos.x + half > wall.x
        && pos.x - half < wall.x + wall.width
        && pos.y + half > wall.y
        && pos.y - half < wall.y + wall.height
}

/// Circle-circle overlap via Euclidean distance
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_overlap_edges() {
        let wall = Wall::new(100.0, 100.0, 50.0, 5.0);

        // Center of the wall
        assert!(player_wall_overlap(Vec2::new(125.0, 102.5), 15.0, &wall));
        // Just grazing from above (player bottom edge at 100.0 exactly: no hit)
        assert!(!player_wall_overlap(Vec2::new(125.0, 92.5), 15.0, &wall));
        // Slightly lower: hit
        assert!(player_wall_overlap(Vec2::new(125.0, 93.0), 15.0, &wall));
        // Left of the wall
        assert!(!player_wall_overlap(Vec2::new(90.0, 102.5), 15.0, &wall));
    }

    #[test]
    fn test_circles_overlap_threshold() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        // Sum of radii exactly equals distance: no overlap (strict less-than)
        assert!(!circles_overlap(a, 5.0, b, 5.0));
        assert!(circles_overlap(a, 5.0, b, 5.1));
    }
}
