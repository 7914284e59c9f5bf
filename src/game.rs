use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{BOARD, GridSize, START_X, START_Y};
use crate::food::Food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GamePhase {
    NotStarted,
    Running,
    Over,
}

/// What ended the last game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Result of one simulation tick, for sound cues and logging.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Nothing moved: the game is not running or the snake stands still.
    Idle,
    Moved,
    Ate,
    Collided(Collision),
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// Always `Some` unless the snake has filled the board.
    pub food: Option<Food>,
    pub score: u32,
    pub phase: GamePhase,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game on the standard board with an OS-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(BOARD, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(BOARD, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        let snake = Snake::new(start_position());
        let mut state = Self {
            snake,
            food: None,
            score: 0,
            phase: GamePhase::NotStarted,
            bounds,
            rng,
        };
        state.food = Food::spawn(&mut state.rng, state.bounds, &state.snake);
        state
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Buffers a turn and starts the game on the first directional input.
    ///
    /// Turns along the current axis are ignored. Returns whether the turn
    /// was buffered.
    pub fn handle_direction_input(&mut self, direction: Direction) -> bool {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
        }

        self.snake.buffer_direction(direction)
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Idle;
        }

        self.snake.apply_pending();
        let Some(head) = self.snake.advance() else {
            return TickOutcome::Idle;
        };

        let ate = self.food.is_some_and(|food| food.position == head);
        if ate {
            self.score += 1;
            self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
        } else {
            self.snake.drop_tail();
        }

        if !head.is_within_bounds(self.bounds) {
            self.phase = GamePhase::Over;
            return TickOutcome::Collided(Collision::Wall);
        }

        if self.snake.head_overlaps_body() {
            self.phase = GamePhase::Over;
            return TickOutcome::Collided(Collision::SelfBite);
        }

        if self.food.is_none() {
            self.phase = GamePhase::Over;
            return TickOutcome::BoardFilled;
        }

        if ate { TickOutcome::Ate } else { TickOutcome::Moved }
    }

    /// Puts the session back on the start screen with a fresh snake and food.
    ///
    /// The RNG keeps its stream, so a seeded session stays reproducible
    /// across restarts.
    pub fn reset(&mut self) {
        self.score = 0;
        self.phase = GamePhase::NotStarted;
        self.snake = Snake::new(start_position());
        self.food = Food::spawn(&mut self.rng, self.bounds, &self.snake);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn start_position() -> Position {
    Position {
        x: START_X,
        y: START_Y,
    }
}
