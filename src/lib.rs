//! Snektick - a tick-driven terminal snake game
//!
//! The game logic (`geometry`, `snake`, `food`, `game`, `input`) has no I/O
//! and can be driven directly from tests. `scheduler` and `session` own the
//! timer and the event loop, and `render` draws snapshots with crossterm.

pub mod config;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod snake;

pub use config::{ConfigError, GameConfig};
pub use game::{CellKind, GameState, GameStatus, TickReport};
pub use geometry::{Board, Coordinate, Direction};
pub use session::{Control, Session};
pub use snake::Snake;
