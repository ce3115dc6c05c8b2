//! Food placement - picks a free grid cell for the next food.
//!
//! Rejection sampling over the whole grid, bounded by
//! [`FoodPlacer::sample_attempts`]. When the bound is hit (a nearly full board)
//! the placer falls back to scanning the free cells and choosing one of them
//! uniformly, so placement always terminates.

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::Cell;

/// Picks food cells off the snake for an `n x n` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoodPlacer {
    grid_size: u16,
}

impl FoodPlacer {
    pub fn new(grid_size: u16) -> Self {
        Self { grid_size }
    }

    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    /// Random draws before switching to the free-cell scan (4 * N^2).
    pub fn sample_attempts(&self) -> usize {
        4 * self.cell_count()
    }

    fn cell_count(&self) -> usize {
        (self.grid_size as usize) * (self.grid_size as usize)
    }

    /// Place food on a cell not covered by `snake`.
    ///
    /// Returns `None` only when the snake occupies every cell.
    pub fn place(&self, snake: &Snake, rng: &mut SimpleRng) -> Option<Cell> {
        let n = self.grid_size as u32;
        if snake.len() >= self.cell_count() {
            return None;
        }

        for _ in 0..self.sample_attempts() {
            let cell = Cell::new(rng.next_range(n) as i16, rng.next_range(n) as i16);
            if !snake.contains(cell) {
                return Some(cell);
            }
        }

        self.place_by_scan(snake, rng)
    }

    fn place_by_scan(&self, snake: &Snake, rng: &mut SimpleRng) -> Option<Cell> {
        let mut occupied = vec![false; self.cell_count()];
        for c in snake.iter() {
            if c.in_bounds(self.grid_size) {
                occupied[c.index(self.grid_size)] = true;
            }
        }

        let free: Vec<usize> = occupied
            .iter()
            .enumerate()
            .filter(|(_, &taken)| !taken)
            .map(|(i, _)| i)
            .collect();
        if free.is_empty() {
            return None;
        }

        let pick = free[rng.next_range(free.len() as u32) as usize];
        tracing::debug!(free = free.len(), "food placed by free-cell scan");
        Some(Cell::from_index(pick, self.grid_size))
    }
}
