use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::collision::{detect_collision, Collision};
use crate::config::{FOOD_REWARD, INITIAL_SNAKE_LENGTH};
use crate::food::place_food;
use crate::grid::{GridSize, Position};
use crate::input::{Direction, GameInput};
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    GameOver,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    Quit,
    WallCollision,
    SelfCollision,
    /// The snake grew into the last free cell.
    BoardFull,
}

impl From<Collision> for GameOverReason {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Wall => Self::WallCollision,
            Collision::SelfCollision => Self::SelfCollision,
        }
    }
}

/// Outcome of a single call to [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickEvent {
    /// Not running; nothing changed.
    Idle,
    Moved,
    Ate,
    Collided(Collision),
    BoardFilled,
}

/// Whether the outer loop keeps going after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub status: GameStatus,
    pub game_over_reason: Option<GameOverReason>,
    pub tick_count: u64,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh game seeded from OS entropy.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    /// # Panics
    ///
    /// Panics when the board cannot hold the starting snake plus one food cell.
    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        assert!(
            fits_starting_snake(bounds),
            "board {}x{} is too small for the starting snake",
            bounds.width,
            bounds.height,
        );
        let snake = initial_snake(bounds);
        let food = place_food(&mut rng, bounds, |p| snake.occupies(p));

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            game_over_reason: None,
            tick_count: 0,
            bounds,
            rng,
        }
    }

    /// Restores the start-of-game layout, keeping bounds and the random stream.
    pub fn reset(&mut self) {
        self.snake = initial_snake(self.bounds);
        let snake = &self.snake;
        self.food = place_food(&mut self.rng, self.bounds, |p| snake.occupies(p));
        self.score = 0;
        self.status = GameStatus::Running;
        self.game_over_reason = None;
        self.tick_count = 0;
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    /// Applies one external input event.
    ///
    /// Directions only steer while running. Quit ends a live game and, once
    /// the game is over, asks the loop to exit. Interrupt always exits.
    pub fn apply_input(&mut self, input: GameInput) -> Flow {
        match input {
            GameInput::Interrupt => return Flow::Exit,
            GameInput::Quit => {
                if self.is_game_over() {
                    return Flow::Exit;
                }
                self.end(GameOverReason::Quit);
            }
            GameInput::Pause => self.toggle_pause(),
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running {
                    self.steer(direction);
                }
            }
        }

        Flow::Continue
    }

    /// Flips between running and paused. No effect once the game is over.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::GameOver => GameStatus::GameOver,
        };
        debug!(status = ?self.status, "pause toggled");
    }

    fn steer(&mut self, direction: Direction) {
        if !self.snake.change_direction(direction) {
            debug!(?direction, current = ?self.snake.direction(), "reversal ignored");
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickEvent {
        if self.status != GameStatus::Running {
            return TickEvent::Idle;
        }

        self.tick_count += 1;
        let next_head = self.snake.next_head_position();

        if let Some(collision) = detect_collision(next_head, self.bounds, &self.snake) {
            self.end(collision.into());
            return TickEvent::Collided(collision);
        }

        if next_head != self.food {
            self.snake.advance(next_head, false);
            return TickEvent::Moved;
        }

        self.score += FOOD_REWARD;
        self.snake.advance(next_head, true);
        debug!(score = self.score, length = self.snake.len(), "food eaten");

        if self.snake.len() >= self.bounds.total_cells() {
            self.end(GameOverReason::BoardFull);
            return TickEvent::BoardFilled;
        }

        let snake = &self.snake;
        self.food = place_food(&mut self.rng, self.bounds, |p| snake.occupies(p));
        TickEvent::Ate
    }

    fn end(&mut self, reason: GameOverReason) {
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        info!(
            ?reason,
            score = self.score,
            length = self.snake.len(),
            ticks = self.tick_count,
            "game over"
        );
    }
}

/// The centered starting snake stays on the board and leaves a free cell.
#[must_use]
pub fn fits_starting_snake(bounds: GridSize) -> bool {
    bounds.height > 0 && usize::from(bounds.width) > INITIAL_SNAKE_LENGTH
}

/// Horizontal snake centered on the board, heading right.
fn initial_snake(bounds: GridSize) -> Snake {
    let center = bounds.center();
    let segments = (0..INITIAL_SNAKE_LENGTH as i32)
        .map(|i| center.offset((0, -i)))
        .collect();

    Snake::from_segments(segments, Direction::Right)
}

#[cfg(test)]
mod tests {
    use crate::collision::Collision;
    use crate::config::FOOD_REWARD;
    use crate::grid::{GridSize, Position};
    use crate::input::{Direction, GameInput};
    use crate::snake::Snake;

    use super::{fits_starting_snake, Flow, GameOverReason, GameState, GameStatus, TickEvent};

    fn board() -> GridSize {
        GridSize::new(10, 10)
    }

    fn body(state: &GameState) -> Vec<Position> {
        state.snake.segments().copied().collect()
    }

    #[test]
    fn new_game_starts_centered_and_running() {
        let state = GameState::new_with_seed(GridSize::new(7, 38), 1);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(
            body(&state),
            vec![
                Position::new(3, 19),
                Position::new(3, 18),
                Position::new(3, 17),
            ]
        );
        assert_eq!(state.snake.direction(), Direction::Right);
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn eating_food_grows_scores_and_relocates_food() {
        let mut state = GameState::new_with_seed(board(), 4);
        state.snake = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(5, 3),
            ],
            Direction::Right,
        );
        state.food = Position::new(5, 6);

        assert_eq!(state.tick(), TickEvent::Ate);

        assert_eq!(
            body(&state),
            vec![
                Position::new(5, 6),
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(5, 3),
            ]
        );
        assert_eq!(state.score, FOOD_REWARD);
        assert!(!state.snake.occupies(state.food));
        assert!(state.food.is_within_bounds(board()));
        assert!(!state.is_game_over());
    }

    #[test]
    fn plain_move_shifts_body_without_scoring() {
        let mut state = GameState::new_with_seed(board(), 5);
        state.snake = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(5, 3),
            ],
            Direction::Right,
        );
        state.food = Position::new(0, 0);

        assert_eq!(state.tick(), TickEvent::Moved);

        assert_eq!(
            body(&state),
            vec![
                Position::new(5, 6),
                Position::new(5, 5),
                Position::new(5, 4),
            ]
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.food, Position::new(0, 0));
    }

    #[test]
    fn wall_collision_ends_game_without_moving() {
        let mut state = GameState::new_with_seed(board(), 2);
        state.snake = Snake::from_segments(
            vec![Position::new(0, 5), Position::new(1, 5)],
            Direction::Up,
        );
        let before = body(&state);

        assert_eq!(state.tick(), TickEvent::Collided(Collision::Wall));

        assert!(state.is_game_over());
        assert_eq!(state.game_over_reason, Some(GameOverReason::WallCollision));
        assert_eq!(body(&state), before);
    }

    #[test]
    fn turning_into_own_body_ends_game() {
        let mut state = GameState::new_with_seed(board(), 3);
        state.snake = Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(5, 4),
                Position::new(5, 3),
                Position::new(5, 2),
            ],
            Direction::Left,
        );

        assert_eq!(state.tick(), TickEvent::Collided(Collision::SelfCollision));
        assert_eq!(state.game_over_reason, Some(GameOverReason::SelfCollision));
    }

    #[test]
    fn moving_into_current_tail_cell_is_a_collision() {
        // A 2x2 loop: the head's next cell is the tail that would be vacated.
        let mut state = GameState::new_with_seed(board(), 6);
        state.snake = Snake::from_segments(
            vec![
                Position::new(4, 4),
                Position::new(4, 5),
                Position::new(5, 5),
                Position::new(5, 4),
            ],
            Direction::Down,
        );
        state.food = Position::new(0, 0);

        assert_eq!(state.tick(), TickEvent::Collided(Collision::SelfCollision));
    }

    #[test]
    fn quit_while_running_ends_game_immediately() {
        let mut state = GameState::new_with_seed(board(), 7);

        assert_eq!(state.apply_input(GameInput::Quit), Flow::Continue);
        assert!(state.is_game_over());
        assert_eq!(state.game_over_reason, Some(GameOverReason::Quit));

        assert_eq!(state.tick(), TickEvent::Idle);
        assert_eq!(state.apply_input(GameInput::Quit), Flow::Exit);
    }

    #[test]
    fn game_over_ignores_everything_but_quit() {
        let mut state = GameState::new_with_seed(board(), 8);
        state.apply_input(GameInput::Quit);
        let before = body(&state);

        state.apply_input(GameInput::Pause);
        state.apply_input(GameInput::Direction(Direction::Up));

        assert!(state.is_game_over());
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.tick(), TickEvent::Idle);
        assert_eq!(body(&state), before);
    }

    #[test]
    fn interrupt_exits_from_any_state() {
        let mut state = GameState::new_with_seed(board(), 9);
        assert_eq!(state.apply_input(GameInput::Interrupt), Flow::Exit);

        state.apply_input(GameInput::Pause);
        assert_eq!(state.apply_input(GameInput::Interrupt), Flow::Exit);
    }

    #[test]
    fn double_pause_toggle_is_a_no_op() {
        let mut state = GameState::new_with_seed(board(), 10);
        let snake = body(&state);
        let food = state.food;

        state.apply_input(GameInput::Pause);
        assert!(state.is_paused());
        state.apply_input(GameInput::Pause);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(body(&state), snake);
        assert_eq!(state.food, food);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn paused_game_ignores_ticks_and_steering() {
        let mut state = GameState::new_with_seed(board(), 11);
        let before = body(&state);
        state.apply_input(GameInput::Pause);

        state.apply_input(GameInput::Direction(Direction::Up));
        assert_eq!(state.tick(), TickEvent::Idle);

        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(body(&state), before);
        assert_eq!(state.tick_count, 0);
    }

    #[test]
    fn quit_while_paused_ends_game() {
        let mut state = GameState::new_with_seed(board(), 12);
        state.apply_input(GameInput::Pause);

        assert_eq!(state.apply_input(GameInput::Quit), Flow::Continue);
        assert!(state.is_game_over());
    }

    #[test]
    fn reversal_input_keeps_heading() {
        let mut state = GameState::new_with_seed(board(), 13);

        state.apply_input(GameInput::Direction(Direction::Left));
        assert_eq!(state.snake.direction(), Direction::Right);

        state.apply_input(GameInput::Direction(Direction::Down));
        assert_eq!(state.snake.direction(), Direction::Down);
    }

    #[test]
    fn filling_the_board_ends_the_game() {
        let mut state = GameState::new_with_seed(GridSize::new(1, 4), 14);
        assert_eq!(state.food, Position::new(0, 3));

        assert_eq!(state.tick(), TickEvent::BoardFilled);
        assert_eq!(state.game_over_reason, Some(GameOverReason::BoardFull));
        assert_eq!(state.score, FOOD_REWARD);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn starting_snake_needs_a_spare_cell() {
        assert!(fits_starting_snake(GridSize::new(1, 4)));
        assert!(!fits_starting_snake(GridSize::new(1, 3)));
        assert!(!fits_starting_snake(GridSize::new(1, 2)));
        assert!(!fits_starting_snake(GridSize::new(0, 18)));
    }

    #[test]
    #[should_panic(expected = "too small for the starting snake")]
    fn board_without_room_is_refused_instead_of_spinning() {
        let _ = GameState::new_with_seed(GridSize::new(1, 2), 1);
    }

    #[test]
    fn reset_restores_starting_layout() {
        let mut state = GameState::new_with_seed(board(), 15);
        let start = body(&state);
        state.apply_input(GameInput::Direction(Direction::Up));
        state.tick();
        state.apply_input(GameInput::Quit);

        state.reset();

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.game_over_reason, None);
        assert_eq!(state.score, 0);
        assert_eq!(body(&state), start);
        assert!(!state.snake.occupies(state.food));
    }
}
