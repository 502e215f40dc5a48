// grid.rs - Double-buffered cell storage for Conway's Game of Life

use std::mem;

/// Default playing area, matching a 800x640 window at 8px per cell.
pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 80;

/// Two equally sized row-major buffers of cell state.
///
/// Reads and writes go to `current`. The stepper fills `next` and then
/// swaps. Coordinates outside the grid read as dead and ignore writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<bool>,
    next: Vec<bool>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            current: vec![false; width * height],
            next: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn set_alive(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.current[i] = true;
        }
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.current[i])
    }

    pub fn clear(&mut self) {
        self.current.fill(false);
    }

    /// Exchanges `current` and `next` without touching any cell.
    pub fn swap_buffers(&mut self) {
        mem::swap(&mut self.current, &mut self.next);
    }

    /// Writes into the back buffer. Only the stepper needs this.
    pub(crate) fn set_next(&mut self, x: usize, y: usize, alive: bool) {
        let i = y * self.width + x;
        self.next[i] = alive;
    }

    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    /// Live cells of `current` in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let width = self.width;
        self.current
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| ((i % width) as i32, (i / width) as i32))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
