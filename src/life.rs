// life.rs - B3/S23 stepping over a bounded grid

use crate::grid::Grid;

/// Offsets of the 8 Moore neighbors.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A running simulation. Owns its grid and counts generations.
#[derive(Clone, Debug, Default)]
pub struct Life {
    grid: Grid,
    generation: u64,
}

impl Life {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            generation: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn set_alive(&mut self, x: i32, y: i32) {
        self.grid.set_alive(x, y);
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.grid.is_alive(x, y)
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Kills every cell and restarts the generation count.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Live neighbors of `(x, y)`. Cells past the edge count as dead.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        NEIGHBORS
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(nx, ny)| self.grid.is_alive(nx, ny))
            .count() as u8
    }

    /// Advances one generation. Every cell of the back buffer is written
    /// from the front buffer before the swap.
    pub fn step(&mut self) {
        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let (cx, cy) = (x as i32, y as i32);
                let alive = self.grid.is_alive(cx, cy);
                let next_state = match (alive, self.count_neighbors(cx, cy)) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3)            => true, // Birth
                    _                     => false, // Death or stays dead
                };
                self.grid.set_next(x, y, next_state);
            }
        }
        self.grid.swap_buffers();
        self.generation += 1;
    }

    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }
}
