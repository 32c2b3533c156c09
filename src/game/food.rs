use rand::Rng;

use super::grid::Position;
use super::snake::Snake;

/// The single food item on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Place a fresh food item on a cell the snake does not occupy.
    pub fn spawn(rng: &mut impl Rng, cell_count: i32, snake: &Snake) -> Self {
        Self {
            position: random_free_cell(rng, cell_count, snake),
        }
    }

    /// Move the food to a new free cell after it was eaten or the round
    /// ended.
    pub fn respawn(&mut self, rng: &mut impl Rng, cell_count: i32, snake: &Snake) {
        self.position = random_free_cell(rng, cell_count, snake);
    }
}

/// Uniform draw over the full grid, both coordinates in [0, cell_count - 1].
pub fn random_cell(rng: &mut impl Rng, cell_count: i32) -> Position {
    Position::new(rng.gen_range(0..cell_count), rng.gen_range(0..cell_count))
}

// Re-rolls until the cell is off the snake. The body cannot cover the grid
// in a live round, so this terminates.
fn random_free_cell(rng: &mut impl Rng, cell_count: i32, snake: &Snake) -> Position {
    loop {
        let pos = random_cell(rng, cell_count);
        if !snake.covers(pos) {
            return pos;
        }
    }
}
