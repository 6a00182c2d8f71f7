use std::fmt;

use crate::games::SessionRng;
use super::snake::Snake;
use super::types::{Cell, GridSize};

/// Rejection sampling gives up after this many draws and scans the grid instead.
pub const MAX_SAMPLING_ATTEMPTS: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    NoFreeCell,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NoFreeCell => write!(f, "No free cell left for food"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Picks a cell uniformly among the cells the snake does not occupy.
pub fn place_food(
    grid: &GridSize,
    snake: &Snake,
    rng: &mut SessionRng,
) -> Result<Cell, PlacementError> {
    // Start bodies on tiny grids may hang off the board.
    let occupied = snake.body().iter().filter(|cell| grid.contains(**cell)).count();
    if grid.area() <= occupied {
        return Err(PlacementError::NoFreeCell);
    }

    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let x = rng.random_range(0..grid.cols);
        let y = rng.random_range(0..grid.rows);
        let candidate = Cell::new(x, y);

        if !snake.occupies(&candidate) {
            return Ok(candidate);
        }
    }

    let free: Vec<Cell> = grid.cells().filter(|cell| !snake.occupies(cell)).collect();
    if free.is_empty() {
        return Err(PlacementError::NoFreeCell);
    }
    Ok(free[rng.random_range(0..free.len())])
}
