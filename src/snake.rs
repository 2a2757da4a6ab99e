use std::collections::VecDeque;

use crate::geometry::Coordinate;

/// Snake body, head at the front and tail at the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Coordinate>,
}

impl Snake {
    /// Builds a snake from head to tail. `None` when no cells are given.
    pub fn new(cells: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let body: VecDeque<Coordinate> = cells.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        Some(Self { body })
    }

    /// Builds a snake from its head and the cells behind it, in order.
    pub fn with_head(head: Coordinate, rest: impl IntoIterator<Item = Coordinate>) -> Self {
        let mut body = VecDeque::from([head]);
        body.extend(rest);
        Self { body }
    }

    pub fn head(&self) -> Coordinate {
        self.body[0]
    }

    pub fn tail(&self) -> Coordinate {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.body.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.body.iter()
    }

    /// Puts `new_head` in front. The tail is dropped unless the snake fed,
    /// so length grows by exactly one on a feeding move and is kept otherwise.
    pub fn advance(&mut self, new_head: Coordinate, fed: bool) {
        self.body.push_front(new_head);
        if !fed {
            self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Direction;

    fn vertical(x: i32, y: i32, len: i32) -> Snake {
        Snake::new((0..len).map(|i| Coordinate::new(x, y + i))).unwrap()
    }

    #[test]
    fn test_empty_snake_rejected() {
        assert!(Snake::new(std::iter::empty()).is_none());
    }

    #[test]
    fn test_with_head_keeps_order() {
        let snake = Snake::with_head(
            Coordinate::new(2, 2),
            [Coordinate::new(2, 3), Coordinate::new(2, 4)],
        );
        assert_eq!(snake, vertical(2, 2, 3));
        assert_eq!(Snake::with_head(Coordinate::new(0, 0), std::iter::empty()).len(), 1);
    }

    #[test]
    fn test_head_and_tail() {
        let snake = vertical(2, 2, 3);
        assert_eq!(snake.head(), Coordinate::new(2, 2));
        assert_eq!(snake.tail(), Coordinate::new(2, 4));
        assert_eq!(snake.len(), 3);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_advance_keeps_length() {
        let mut snake = vertical(2, 2, 3);
        let next = snake.head().moved(Direction::Up);
        snake.advance(next, false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Coordinate::new(2, 1));
        assert_eq!(snake.tail(), Coordinate::new(2, 3));
        assert!(!snake.contains(Coordinate::new(2, 4)));
    }

    #[test]
    fn test_advance_fed_grows_by_one() {
        let mut snake = vertical(2, 2, 3);
        snake.advance(Coordinate::new(2, 1), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Coordinate::new(2, 4));
        let cells: Vec<_> = snake.iter().copied().collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(2, 1),
                Coordinate::new(2, 2),
                Coordinate::new(2, 3),
                Coordinate::new(2, 4),
            ]
        );
    }

    #[test]
    fn test_contains() {
        let snake = vertical(1, 1, 3);
        assert!(snake.contains(Coordinate::new(1, 1)));
        assert!(snake.contains(Coordinate::new(1, 3)));
        assert!(!snake.contains(Coordinate::new(1, 4)));
        assert!(!snake.contains(Coordinate::new(0, 1)));
    }
}
