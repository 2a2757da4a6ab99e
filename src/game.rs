use crossterm::event::KeyCode;
use log::{debug, info};
use rand::Rng;

use crate::config::ConfigError;
use crate::food::{food_position, free_cells};
use crate::geometry::{Board, Coordinate, Direction};
use crate::input::{direction_for_key, resolve_direction};
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InGame,
    Won,
    Lost,
}

impl GameStatus {
    /// No tick changes a game once it is won or lost.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InGame)
    }
}

/// What a board cell shows. The snake hides food underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Snake,
    Food,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub head: Coordinate,
    pub fed: bool,
    pub status: GameStatus,
}

/// The authoritative snapshot of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub status: GameStatus,
    pub snake: Snake,
    pub food: Coordinate,
    /// Heading used by the last tick.
    pub direction: Direction,
    /// Heading the next tick will use; written by input, last write wins.
    pub next_direction: Direction,
}

impl GameState {
    pub fn new(board: Board, snake: Snake, food: Coordinate, direction: Direction) -> Self {
        Self {
            board,
            status: GameStatus::InGame,
            snake,
            food,
            direction,
            next_direction: direction,
        }
    }

    /// Three cells stacked downward from the board center, heading up, with
    /// freshly placed food.
    pub fn base<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Result<Self, ConfigError> {
        let center = board.center();
        let snake = Snake::with_head(
            center,
            [
                Coordinate::new(center.x, center.y + 1),
                Coordinate::new(center.x, center.y + 2),
            ],
        );

        if snake.iter().any(|&c| board.is_out_of_bounds(c))
            || free_cells(&board, &snake, None) == 0
        {
            return Err(ConfigError::TooSmall {
                width: board.width(),
                height: board.height(),
            });
        }

        let food = food_position(rng, &board, &snake, None);
        Ok(Self::new(board, snake, food, Direction::Up))
    }

    /// Queues the heading for `key` unless it is not an arrow or would
    /// reverse the current heading. Returns whether the key was taken.
    pub fn steer(&mut self, key: KeyCode) -> bool {
        let Some(requested) = direction_for_key(key) else {
            return false;
        };

        let resolved = resolve_direction(key, self.direction);
        if resolved != requested {
            debug!(
                "Ignoring reversal to {:?} while heading {:?}",
                requested, self.direction
            );
            return false;
        }

        self.next_direction = resolved;
        true
    }

    /// Advances the game by one cell. Does nothing once the game is over.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TickReport {
        if self.status.is_terminal() {
            return TickReport {
                head: self.snake.head(),
                fed: false,
                status: self.status,
            };
        }

        self.direction = self.next_direction;
        let new_head = self.snake.head().moved(self.direction);

        // Checked against the body before the move, tail cell included.
        if self.board.is_out_of_bounds(new_head) || self.snake.contains(new_head) {
            self.status = GameStatus::Lost;
            info!(
                "Snake crashed at ({}, {}) with length {}",
                new_head.x,
                new_head.y,
                self.snake.len()
            );
        }

        let fed = self.status == GameStatus::InGame && new_head == self.food;
        self.snake.advance(new_head, fed);

        if fed {
            debug!(
                "Ate food at ({}, {}). Length: {}",
                new_head.x,
                new_head.y,
                self.snake.len()
            );
            if free_cells(&self.board, &self.snake, Some(self.food)) == 0 {
                self.status = GameStatus::Won;
                info!("Snake filled the board with length {}", self.snake.len());
            } else {
                self.food = food_position(rng, &self.board, &self.snake, Some(self.food));
            }
        }

        TickReport {
            head: new_head,
            fed,
            status: self.status,
        }
    }

    pub fn classify(&self, c: Coordinate) -> CellKind {
        if self.snake.contains(c) {
            CellKind::Snake
        } else if c == self.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}
