use canvas_snake::food::Food;
use canvas_snake::game::{Collision, GamePhase, GameState, TickOutcome};
use canvas_snake::input::Direction;
use canvas_snake::snake::Position;

#[test]
fn first_right_press_moves_head_one_cell() {
    let mut state = GameState::new_with_seed(42);
    state.food = Some(Food::new(Position::new(0, 0)));

    assert_eq!(state.phase, GamePhase::NotStarted);
    assert_eq!(state.snake.velocity(), (0, 0));

    state.handle_direction_input(Direction::Right);
    assert_eq!(state.phase, GamePhase::Running);

    assert_eq!(state.tick(), TickOutcome::Moved);
    assert_eq!(state.snake.head(), Position::new(11, 10));
    assert_eq!(state.snake.len(), 1);
}

#[test]
fn food_at_next_head_is_eaten() {
    let mut state = GameState::new_with_seed(7);
    state.food = Some(Food::new(Position::new(10, 9)));

    state.handle_direction_input(Direction::Up);
    assert_eq!(state.tick(), TickOutcome::Ate);

    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);
    let food = state.food.expect("new food is placed");
    assert_ne!(food.position, Position::new(10, 9));
    assert!(!state.snake.occupies(food.position));
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let mut state = GameState::new_with_seed(42);
    state.food = Some(Food::new(Position::new(11, 10)));

    state.handle_direction_input(Direction::Right);
    assert_eq!(state.tick(), TickOutcome::Ate);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);
    state.food = Some(Food::new(Position::new(0, 19)));

    state.handle_direction_input(Direction::Up);
    for _ in 0..10 {
        assert_eq!(state.tick(), TickOutcome::Moved);
        assert_eq!(state.phase, GamePhase::Running);
    }
    assert_eq!(state.snake.head(), Position::new(11, 0));

    assert_eq!(state.tick(), TickOutcome::Collided(Collision::Wall));
    assert_eq!(state.phase, GamePhase::Over);

    // Movement is frozen once the game is over.
    assert_eq!(state.tick(), TickOutcome::Idle);
    assert_eq!(state.snake.head(), Position::new(11, -1));
}

#[test]
fn reversal_never_changes_velocity() {
    let mut state = GameState::new_with_seed(3);
    state.food = Some(Food::new(Position::new(0, 0)));
    state.handle_direction_input(Direction::Right);
    state.tick();

    assert!(!state.handle_direction_input(Direction::Left));
    state.tick();

    assert_eq!(state.snake.velocity(), (1, 0));
    assert_eq!(state.snake.head(), Position::new(12, 10));
}

#[test]
fn quick_turn_sequence_cannot_reverse_through_the_buffer() {
    let mut state = GameState::new_with_seed(5);
    state.food = Some(Food::new(Position::new(0, 0)));
    state.handle_direction_input(Direction::Right);
    state.tick();

    // Up then Left inside one tick: Left is checked against the current
    // heading (Right) and rejected, so the snake turns up.
    assert!(state.handle_direction_input(Direction::Up));
    assert!(!state.handle_direction_input(Direction::Left));
    state.tick();

    assert_eq!(state.snake.velocity(), (0, -1));
    assert_eq!(state.snake.head(), Position::new(11, 9));
}

#[test]
fn self_collision_ends_the_game() {
    let mut state = GameState::new_with_seed(9);
    state.handle_direction_input(Direction::Right);

    // Grow to five segments by feeding the snake along its path.
    for x in 11..=14 {
        state.food = Some(Food::new(Position::new(x, 10)));
        assert_eq!(state.tick(), TickOutcome::Ate);
    }
    state.food = Some(Food::new(Position::new(0, 0)));
    assert_eq!(state.snake.len(), 5);

    state.handle_direction_input(Direction::Down);
    assert_eq!(state.tick(), TickOutcome::Moved);
    state.handle_direction_input(Direction::Left);
    assert_eq!(state.tick(), TickOutcome::Moved);
    state.handle_direction_input(Direction::Up);

    assert_eq!(state.tick(), TickOutcome::Collided(Collision::SelfBite));
    assert_eq!(state.phase, GamePhase::Over);
}

#[test]
fn reset_after_game_over_restores_start() {
    let mut state = GameState::new_with_seed(11);
    state.food = Some(Food::new(Position::new(11, 10)));
    state.handle_direction_input(Direction::Right);
    state.tick();
    state.food = Some(Food::new(Position::new(0, 0)));
    while state.phase == GamePhase::Running {
        state.tick();
    }

    state.reset();

    assert_eq!(state.phase, GamePhase::NotStarted);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.len(), 1);
    assert_eq!(state.snake.head(), Position::new(10, 10));
    assert_eq!(state.snake.velocity(), (0, 0));
    let food = state.food.expect("fresh food");
    assert!(!state.snake.occupies(food.position));
}
