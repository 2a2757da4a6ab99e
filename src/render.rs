use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::game::{CellKind, GameState, GameStatus};
use crate::geometry::Coordinate;

const WALL: char = '#';
const HEAD: char = 'O';
const BODY: char = 'o';
const FOOD: char = '*';
const EMPTY: char = ' ';

/// Receives every new snapshot of the game.
pub trait View {
    fn present(&mut self, state: &GameState) -> io::Result<()>;
}

/// The board with its wall, one string per terminal row.
pub fn grid_lines(state: &GameState) -> Vec<String> {
    let width = state.board.width() as usize;
    let wall: String = std::iter::repeat(WALL).take(width + 2).collect();

    let mut lines = Vec::with_capacity(state.board.height() as usize + 2);
    lines.push(wall.clone());
    for y in 0..state.board.height() {
        let mut line = String::with_capacity(width + 2);
        line.push(WALL);
        for x in 0..state.board.width() {
            line.push(cell_char(state, Coordinate::new(x, y)));
        }
        line.push(WALL);
        lines.push(line);
    }
    lines.push(wall);
    lines
}

fn cell_char(state: &GameState, c: Coordinate) -> char {
    match state.classify(c) {
        CellKind::Snake if c == state.snake.head() => HEAD,
        CellKind::Snake => BODY,
        CellKind::Food => FOOD,
        CellKind::Empty => EMPTY,
    }
}

pub fn status_line(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InGame => "Use arrow keys to move, 'q' to quit",
        GameStatus::Won => "You filled the board! Press any key to exit",
        GameStatus::Lost => "Game over! Press any key to exit",
    }
}

/// Draws the board on a crossterm terminal.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> View for TerminalView<W> {
    fn present(&mut self, state: &GameState) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;

        let lines = grid_lines(state);
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, MoveTo(0, row as u16), Print(line))?;
        }

        queue!(
            self.out,
            MoveTo(0, lines.len() as u16),
            Print(status_line(state.status))
        )?;

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Board, Direction};
    use crate::snake::Snake;

    fn state() -> GameState {
        GameState::new(
            Board::new(4, 3).unwrap(),
            Snake::new([Coordinate::new(1, 0), Coordinate::new(1, 1), Coordinate::new(2, 1)])
                .unwrap(),
            Coordinate::new(3, 2),
            Direction::Up,
        )
    }

    #[test]
    fn test_grid_lines() {
        assert_eq!(
            grid_lines(&state()),
            vec!["######", "# O  #", "# oo #", "#   *#", "######"]
        );
    }

    #[test]
    fn test_status_line_follows_status() {
        assert!(status_line(GameStatus::InGame).contains("arrow keys"));
        assert!(status_line(GameStatus::Lost).starts_with("Game over"));
        assert!(status_line(GameStatus::Won).contains("filled"));
    }

    #[test]
    fn test_terminal_view_writes_board() {
        let mut view = TerminalView::new(Vec::new());
        view.present(&state()).unwrap();

        let written = String::from_utf8(view.into_inner()).unwrap();
        assert!(written.contains("# oo #"));
        assert!(written.contains("#   *#"));
        assert!(written.contains(status_line(GameStatus::InGame)));
    }
}
