//! Module for the square [`Block`] used by both the snake and the snack.

use super::snake_game::{HEIGHT, WIDTH};

/// Axis-aligned square centred on `position`.
///
/// Blocks are never mutated. Moving a block means building a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    pub position: (i32, i32),
    pub size: (i32, i32),
}

impl Block {
    #[must_use]
    pub fn new(position: (i32, i32), size: (i32, i32)) -> Self {
        Self { position, size }
    }

    /// Checks if the whole block lies on the board. Touching the edge counts as on the board.
    #[must_use]
    pub fn on_board(&self) -> bool {
        // doubled so odd sizes do not lose the half
        let (x, y) = (2 * self.position.0, 2 * self.position.1);
        let (w, h) = self.size;
        let x_in_bounds = x - w >= 0 && x + w <= 2 * WIDTH;
        let y_in_bounds = y - h >= 0 && y + h <= 2 * HEIGHT;
        x_in_bounds && y_in_bounds
    }

    /// Checks if the two blocks overlap. Blocks that only share an edge do not collide.
    #[must_use]
    pub fn collides_with(&self, other: &Block) -> bool {
        let x_dist = 2 * (self.position.0 - other.position.0).abs();
        let y_dist = 2 * (self.position.1 - other.position.1).abs();
        x_dist < self.size.0 + other.size.0 && y_dist < self.size.1 + other.size.1
    }
}
