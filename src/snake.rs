use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Snake body, velocity and the one-slot turn buffer.
///
/// The heading is `None` while the snake stands still, which is the
/// `(0, 0)` velocity of a fresh game.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Option<Direction>,
    pending: Option<Direction>,
}

impl Snake {
    /// Creates a one-cell, motionless snake at `start`.
    #[must_use]
    pub fn new(start: Position) -> Self {
        Self {
            body: VecDeque::from([start]),
            heading: None,
            pending: None,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Option<Direction>) -> Self {
        debug_assert!(!segments.is_empty(), "snake needs at least a head");

        Self {
            body: VecDeque::from(segments),
            heading,
            pending: None,
        }
    }

    /// Queues a turn for the next tick.
    ///
    /// The turn is checked against the current heading, not against an
    /// already queued turn, so a later key press within the same tick
    /// replaces the earlier one. Returns whether the turn was accepted.
    pub fn buffer_direction(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.heading, direction) {
            return false;
        }

        self.pending = Some(direction);
        true
    }

    /// Moves the queued turn into the heading and clears the buffer.
    pub fn apply_pending(&mut self) {
        if let Some(direction) = self.pending.take() {
            self.heading = Some(direction);
        }
    }

    /// Pushes a new head one cell along the heading.
    ///
    /// The tail is left in place; callers drop it with [`Snake::drop_tail`]
    /// unless the snake grows this tick. Returns `None` when standing still.
    pub fn advance(&mut self) -> Option<Position> {
        let heading = self.heading?;
        let next_head = self.head().step(heading);
        self.body.push_front(next_head);
        Some(next_head)
    }

    /// Removes the last segment, never the head.
    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    #[must_use]
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Returns the velocity as a `(dx, dy)` grid step, `(0, 0)` when still.
    #[must_use]
    pub fn velocity(&self) -> (i32, i32) {
        self.heading.map_or((0, 0), Direction::delta)
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn bounds_check_covers_every_edge() {
        let bounds = GridSize {
            width: 20,
            height: 20,
        };

        assert!(Position::new(0, 0).is_within_bounds(bounds));
        assert!(Position::new(19, 19).is_within_bounds(bounds));
        assert!(!Position::new(-1, 5).is_within_bounds(bounds));
        assert!(!Position::new(5, -1).is_within_bounds(bounds));
        assert!(!Position::new(20, 5).is_within_bounds(bounds));
        assert!(!Position::new(5, 20).is_within_bounds(bounds));
    }

    #[test]
    fn still_snake_does_not_advance() {
        let mut snake = Snake::new(Position::new(10, 10));

        assert_eq!(snake.velocity(), (0, 0));
        assert_eq!(snake.advance(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn snake_moves_one_cell_per_advance() {
        let mut snake = Snake::new(Position::new(5, 5));
        assert!(snake.buffer_direction(Direction::Right));

        snake.apply_pending();
        assert_eq!(snake.advance(), Some(Position::new(6, 5)));
        snake.drop_tail();

        assert_eq!(snake.head(), Position::new(6, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.pending(), None);
    }

    #[test]
    fn keeping_the_tail_grows_the_snake() {
        let mut snake = Snake::new(Position::new(5, 5));
        snake.buffer_direction(Direction::Down);
        snake.apply_pending();

        let _ = snake.advance();

        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.segments().copied().collect::<Vec<_>>(),
            vec![Position::new(5, 6), Position::new(5, 5)]
        );
    }

    #[test]
    fn direction_buffer_rejects_reverse() {
        let mut snake = Snake::from_segments(
            vec![Position::new(5, 5), Position::new(4, 5)],
            Some(Direction::Right),
        );

        assert!(!snake.buffer_direction(Direction::Left));
        assert_eq!(snake.pending(), None);

        snake.apply_pending();
        assert_eq!(snake.advance(), Some(Position::new(6, 5)));
    }

    #[test]
    fn later_turn_in_the_same_tick_replaces_the_earlier_one() {
        let mut snake = Snake::from_segments(vec![Position::new(5, 5)], Some(Direction::Right));

        assert!(snake.buffer_direction(Direction::Up));
        assert!(snake.buffer_direction(Direction::Down));
        snake.apply_pending();

        assert_eq!(snake.heading(), Some(Direction::Down));
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let snake = Snake::from_segments(vec![Position::new(1, 1)], Some(Direction::Up));
        assert!(!snake.head_overlaps_body());

        let bitten = Snake::from_segments(
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 1),
            ],
            Some(Direction::Up),
        );
        assert!(bitten.head_overlaps_body());
    }

    #[test]
    fn drop_tail_keeps_the_head() {
        let mut snake = Snake::new(Position::new(3, 3));
        snake.drop_tail();
        assert_eq!(snake.len(), 1);
    }
}
