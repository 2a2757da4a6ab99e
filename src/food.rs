use rand::Rng;

use crate::geometry::{Board, Coordinate};
use crate::snake::Snake;

/// Cells `food_position` could pick: on the board, off the snake and not the
/// current food.
pub fn free_cells(board: &Board, snake: &Snake, current_food: Option<Coordinate>) -> usize {
    board
        .cells()
        .filter(|&c| !snake.contains(c) && current_food != Some(c))
        .count()
}

/// Samples random cells until one is free. The caller guarantees that
/// `free_cells` is non-zero, otherwise this never returns.
pub fn food_position<R: Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    snake: &Snake,
    current_food: Option<Coordinate>,
) -> Coordinate {
    loop {
        let candidate = Coordinate::new(
            rng.gen_range(0..board.width()),
            rng.gen_range(0..board.height()),
        );

        if !snake.contains(candidate) && current_food != Some(candidate) {
            return candidate;
        }
    }
}
