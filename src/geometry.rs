//! Grid coordinates, headings and the fixed-size board the snake moves on.

use crate::config::ConfigError;

/// A cell on the board. Signed so a head that left the board is still
/// representable after the losing tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `direction`. No wraparound.
    pub fn moved(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::new(self.x, self.y - 1),
            Direction::Right => Self::new(self.x + 1, self.y),
            Direction::Down => Self::new(self.x, self.y + 1),
            Direction::Left => Self::new(self.x - 1, self.y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Playing field dimensions, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    pub fn new(width: u16, height: u16) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }

        Ok(Self {
            width: i32::from(width),
            height: i32::from(height),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn area(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// The far edges are exclusive: `x == width` is already off the board.
    pub fn is_out_of_bounds(&self, c: Coordinate) -> bool {
        c.x < 0 || c.x >= self.width || c.y < 0 || c.y >= self.height
    }

    /// Board midpoint, halves rounded to even: 17 cells center on 8, 5 on 2.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(half_to_even(self.width), half_to_even(self.height))
    }

    /// Every cell, row by row from the top-left corner.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }
}

/// `n / 2` with a .5 remainder rounded to the even neighbour.
fn half_to_even(n: i32) -> i32 {
    let half = n / 2;
    if n % 2 == 1 && half % 2 == 1 {
        half + 1
    } else {
        half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: u16, height: u16) -> Board {
        Board::new(width, height).unwrap()
    }

    #[test]
    fn test_moved_translates_one_cell() {
        let c = Coordinate::new(3, 3);
        assert_eq!(c.moved(Direction::Up), Coordinate::new(3, 2));
        assert_eq!(c.moved(Direction::Down), Coordinate::new(3, 4));
        assert_eq!(c.moved(Direction::Left), Coordinate::new(2, 3));
        assert_eq!(c.moved(Direction::Right), Coordinate::new(4, 3));
    }

    #[test]
    fn test_moved_does_not_wrap() {
        assert_eq!(
            Coordinate::new(0, 0).moved(Direction::Left),
            Coordinate::new(-1, 0)
        );
        assert_eq!(
            Coordinate::new(0, 0).moved(Direction::Up),
            Coordinate::new(0, -1)
        );
    }

    #[test]
    fn test_opposites() {
        for direction in Direction::ALL {
            assert!(direction.is_opposite(direction.opposite()));
            assert!(!direction.is_opposite(direction));
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
    }

    #[test]
    fn test_every_cell_is_in_bounds() {
        let board = board(5, 4);
        assert_eq!(board.cells().count(), board.area());
        assert!(board.cells().all(|c| !board.is_out_of_bounds(c)));
    }

    #[test]
    fn test_far_edges_are_out_of_bounds() {
        let board = board(5, 4);
        assert!(!board.is_out_of_bounds(Coordinate::new(4, 3)));
        assert!(board.is_out_of_bounds(Coordinate::new(5, 0)));
        assert!(board.is_out_of_bounds(Coordinate::new(0, 4)));
        assert!(board.is_out_of_bounds(Coordinate::new(-1, 0)));
        assert!(board.is_out_of_bounds(Coordinate::new(0, -1)));
    }

    #[test]
    fn test_center_rounds_half_to_even() {
        assert_eq!(board(17, 17).center(), Coordinate::new(8, 8));
        assert_eq!(board(5, 5).center(), Coordinate::new(2, 2));
        assert_eq!(board(7, 3).center(), Coordinate::new(4, 2));
        assert_eq!(board(6, 6).center(), Coordinate::new(3, 3));
        assert_eq!(board(1, 1).center(), Coordinate::new(0, 0));
    }

    #[test]
    fn test_empty_board_rejected() {
        assert_eq!(
            Board::new(0, 5),
            Err(ConfigError::EmptyBoard {
                width: 0,
                height: 5
            })
        );
        assert!(Board::new(5, 0).is_err());
    }

    #[test]
    fn test_cells_are_row_major() {
        let cells: Vec<_> = board(2, 2).cells().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1),
            ]
        );
    }
}
