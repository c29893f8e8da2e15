use std::collections::VecDeque;

use crate::grid::{Cell, GridSize};
use crate::input::{Direction, direction_change_is_valid};

/// Segment sequence (front is head) plus committed and buffered direction.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    buffered_direction: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            buffered_direction: direction,
        }
    }

    /// Starting layout: head in the grid centre facing right, with the rest
    /// of the body trailing to the left.
    ///
    /// `length` must be non-zero and fit left of the centre column; config
    /// validation guarantees both.
    #[must_use]
    pub fn initial(bounds: GridSize, length: u16) -> Self {
        let head = initial_head(bounds);
        let segments = (0..i32::from(length.max(1)))
            .map(|offset| Cell::new(head.x - offset, head.y))
            .collect();

        Self::from_segments(segments, Direction::Right)
    }

    /// The head after one unit step in `direction`.
    #[must_use]
    pub fn candidate_head(&self, direction: Direction) -> Cell {
        let head = self.head();
        let (dx, dy) = direction.delta();
        Cell::new(head.x + dx, head.y + dy)
    }

    /// Promotes the buffered direction to the committed one and returns it.
    pub fn commit_direction(&mut self) -> Direction {
        self.direction = self.buffered_direction;
        self.direction
    }

    /// Prepends `head`; drops the tail unless the snake just ate.
    pub fn advance(&mut self, head: Cell, ate_fruit: bool) {
        self.body.push_front(head);
        if !ate_fruit {
            let _ = self.body.pop_back();
        }
    }

    /// Buffers `requested` as the next direction unless it reverses the
    /// committed one, and returns the direction now buffered.
    ///
    /// The buffer has a single slot: the last valid request before a step
    /// wins, earlier ones are overwritten.
    pub fn buffer_direction(&mut self, requested: Direction) -> Direction {
        if direction_change_is_valid(self.direction, requested) {
            self.buffered_direction = requested;
        }
        self.buffered_direction
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        // `from_segments` rejects empty bodies and `advance` pushes before it pops.
        self.body[0]
    }

    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept alongside `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction the next step will take.
    #[must_use]
    pub fn buffered_direction(&self) -> Direction {
        self.buffered_direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    #[must_use]
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }
}

/// Head cell of a freshly reset snake.
#[must_use]
pub fn initial_head(bounds: GridSize) -> Cell {
    Cell::new(i32::from(bounds.width / 2), i32::from(bounds.height / 2))
}

#[cfg(test)]
mod tests {
    use crate::grid::{Cell, GridSize};
    use crate::input::Direction;

    use super::Snake;

    #[test]
    fn initial_layout_trails_left_of_centre() {
        let snake = Snake::initial(
            GridSize {
                width: 20,
                height: 20,
            },
            3,
        );

        let cells: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            cells,
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]
        );
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn candidate_head_applies_unit_step() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right);

        assert_eq!(snake.candidate_head(Direction::Up), Cell::new(5, 4));
        assert_eq!(snake.candidate_head(Direction::Down), Cell::new(5, 6));
        assert_eq!(snake.candidate_head(Direction::Left), Cell::new(4, 5));
        assert_eq!(snake.candidate_head(Direction::Right), Cell::new(6, 5));
        assert_eq!(snake.head(), Cell::new(5, 5));
    }

    #[test]
    fn advance_without_fruit_keeps_length() {
        let mut snake = Snake::from_segments(
            vec![Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)],
            Direction::Right,
        );

        snake.advance(Cell::new(3, 0), false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(3, 0));
        assert_eq!(snake.tail(), Cell::new(1, 0));
    }

    #[test]
    fn advance_with_fruit_keeps_previous_tail() {
        let mut snake = Snake::from_segments(
            vec![Cell::new(2, 0), Cell::new(1, 0)],
            Direction::Right,
        );

        snake.advance(Cell::new(3, 0), true);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Cell::new(1, 0));
    }

    #[test]
    fn direction_buffer_rejects_reverse() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        assert_eq!(snake.buffer_direction(Direction::Left), Direction::Right);
        assert_eq!(snake.commit_direction(), Direction::Right);
    }

    #[test]
    fn direction_buffer_keeps_earlier_valid_request_after_rejection() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Left);

        assert_eq!(snake.buffered_direction(), Direction::Up);
    }

    #[test]
    fn direction_buffer_last_valid_request_wins() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        snake.buffer_direction(Direction::Up);
        snake.buffer_direction(Direction::Down);

        assert_eq!(snake.commit_direction(), Direction::Down);
    }

    #[test]
    fn reversal_is_judged_against_committed_direction() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);

        // Up is buffered but not committed, so Down is still a legal turn.
        snake.buffer_direction(Direction::Up);
        assert_eq!(snake.buffer_direction(Direction::Down), Direction::Down);

        snake.commit_direction();
        assert_eq!(snake.buffer_direction(Direction::Up), Direction::Down);
    }
}
