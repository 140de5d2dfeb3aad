//! Procedural maze generation
//!
//! A randomized depth-first carve over a grid, followed by a probabilistic
//! wall-emission pass. The carve guarantees every cell gets visited; the
//! emission step deliberately does NOT preserve the carved passages. Levels
//! should feel maze-like but stay open enough to be beatable, so each cell
//! edge becomes a wall independently with a fixed chance and no solvability
//! check is run.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Bounds;
use crate::consts::WALL_THICKNESS;

/// An axis-aligned wall rectangle. Immutable once emitted; the whole set is
/// replaced on every level generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Wall {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Carved maze grid. `cells` is row-major visited flags; after a carve all
/// of them are true, but the grid dimensions stay relevant for cell-size and
/// goal-placement math.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Maze {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Maze {
    /// Randomized depth-first carve starting at cell (0,0).
    ///
    /// Keeps a visit stack; from the top cell it picks an unvisited
    /// 4-neighbor uniformly at random, marks it and pushes, or backtracks
    /// when none remain. Terminates with every cell visited exactly once.
    pub fn carve(width: usize, height: usize, rng: &mut Pcg32) -> Self {
        debug_assert!(width >= 1 && height >= 1);
        let mut cells = vec![false; width * height];
        let mut stack = Vec::with_capacity(width * height);

        cells[0] = true;
        stack.push((0usize, 0usize));

        while let Some(&(x, y)) = stack.last() {
            let mut neighbors: [(usize, usize); 4] = [(0, 0); 4];
            let mut count = 0;

            if x > 0 && !cells[y * width + (x - 1)] {
                neighbors[count] = (x - 1, y);
                count += 1;
            }
            if x + 1 < width && !cells[y * width + (x + 1)] {
                neighbors[count] = (x + 1, y);
                count += 1;
            }
            if y > 0 && !cells[(y - 1) * width + x] {
                neighbors[count] = (x, y - 1);
                count += 1;
            }
            if y + 1 < height && !cells[(y + 1) * width + x] {
                neighbors[count] = (x, y + 1);
                count += 1;
            }

            if count > 0 {
                let (nx, ny) = neighbors[rng.random_range(0..count)];
                cells[ny * width + nx] = true;
                stack.push((nx, ny));
            } else {
                stack.pop();
            }
        }

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn visited(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }
}

/// Pixel size of one grid cell, clamped to a minimum of 1 so degenerate
/// (zero-area) play bounds never divide into zero or negative cells.
pub fn cell_size(bounds: Bounds, width: usize, height: usize) -> f32 {
    let t2 = WALL_THICKNESS * 2.0;
    let cell = ((bounds.width - t2) / width as f32).min((bounds.height - t2) / height as f32);
    cell.max(1.0)
}

/// Convert a carved maze into wall rectangles.
///
/// Emits the four boundary walls first (top, bottom, left, right), then
/// walks the cells row-major and rolls the vertical (left-edge) segment
/// before the horizontal (top-edge) one, each with `probability`.
pub fn emit_walls(maze: &Maze, bounds: Bounds, probability: f32, rng: &mut Pcg32) -> Vec<Wall> {
    let t = WALL_THICKNESS;
    let cell = cell_size(bounds, maze.width, maze.height);

    let mut walls = vec![
        Wall::new(0.0, 0.0, bounds.width, t),
        Wall::new(0.0, bounds.height - t, bounds.width, t),
        Wall::new(0.0, 0.0, t, bounds.height),
        Wall::new(bounds.width - t, 0.0, t, bounds.height),
    ];

    for y in 0..maze.height {
        for x in 0..maze.width {
            let cx = t + x as f32 * cell;
            let cy = t + y as f32 * cell;

            if rng.random::<f32>() < probability {
                walls.push(Wall::new(cx, cy, t, cell));
            }
            if rng.random::<f32>() < probability {
                walls.push(Wall::new(cx, cy, cell, t));
            }
        }
    }

    walls
}
