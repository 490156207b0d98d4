use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{Board, INITIAL_BODY_PARTS};
use crate::food::Food;
use crate::input::{Direction, GameInput};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Collision {
    Wall,
    SelfBite,
}

/// Result of one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Step {
    /// The game was not running, nothing changed.
    Idle,
    Moved,
    Ate,
    Collided(Collision),
}

/// How the state reacted to one input signal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Reaction {
    Ignored,
    Turned,
    Started,
}

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub running: bool,
    pub food: Position,
    pub body: Vec<Position>,
    pub apples_eaten: u32,
    pub collision: Option<Collision>,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// Direction the next move will take.
    pub direction: Direction,
    pub food: Food,
    pub apples_eaten: u32,
    pub status: GameStatus,
    pub collision: Option<Collision>,
    board: Board,
    rng: StdRng,
}

impl GameState {
    /// Creates a not-yet-started state seeded from system entropy.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_rng(board, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(board: Board, seed: u64) -> Self {
        Self::with_rng(board, StdRng::seed_from_u64(seed))
    }

    fn with_rng(board: Board, rng: StdRng) -> Self {
        let mut state = Self {
            snake: fresh_snake(board),
            direction: Direction::Right,
            food: Food::new(Position::ORIGIN),
            apples_eaten: 0,
            status: GameStatus::GameOver,
            collision: None,
            board,
            rng,
        };
        state.initialize();
        state
    }

    /// Resets snake, direction and score. Leaves the game stopped.
    pub fn initialize(&mut self) {
        self.snake = fresh_snake(self.board);
        self.direction = Direction::Right;
        self.apples_eaten = 0;
        self.collision = None;
        self.status = GameStatus::GameOver;
    }

    /// Begins a fresh round with newly placed food.
    pub fn start(&mut self) {
        self.initialize();
        self.spawn_food();
        self.status = GameStatus::Running;
        info!(
            "round started, food at ({}, {})",
            self.food.position.x, self.food.position.y
        );
    }

    /// Moves the food to a random cell.
    pub fn spawn_food(&mut self) {
        self.food = Food::spawn(&mut self.rng, self.board);
    }

    /// Sets the direction for the next move.
    ///
    /// Ignored while stopped, and when `direction` is the exact opposite of
    /// the current one. Returns whether the direction was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() || self.direction.is_opposite(direction) {
            return false;
        }

        self.direction = direction;
        true
    }

    /// Runs one tick: move, then eat, then check for collisions.
    pub fn advance(&mut self) -> Step {
        if !self.is_running() {
            return Step::Idle;
        }

        self.snake.move_toward(self.direction, self.board.unit_size);
        let ate = self.check_food();

        if let Some(collision) = self.check_collisions() {
            return Step::Collided(collision);
        }

        if ate { Step::Ate } else { Step::Moved }
    }

    /// Routes one input signal according to the current status.
    pub fn apply_input(&mut self, input: GameInput) -> Reaction {
        match (self.status, input) {
            (GameStatus::Running, GameInput::Direction(direction)) => {
                if self.set_direction(direction) {
                    Reaction::Turned
                } else {
                    Reaction::Ignored
                }
            }
            (GameStatus::GameOver, GameInput::Confirm) => {
                self.start();
                Reaction::Started
            }
            _ => Reaction::Ignored,
        }
    }

    /// Copies out everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            running: self.is_running(),
            food: self.food.position,
            body: self.snake.segments().copied().collect(),
            apples_eaten: self.apples_eaten,
            collision: self.collision,
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Returns the board geometry.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    fn check_food(&mut self) -> bool {
        if self.snake.head() != self.food.position {
            return false;
        }

        self.apples_eaten += 1;
        self.snake.grow();
        self.spawn_food();
        debug!(
            "apple eaten, score {} length {}",
            self.apples_eaten,
            self.snake.len()
        );
        true
    }

    fn check_collisions(&mut self) -> Option<Collision> {
        let collision = if self.snake.head_overlaps_body() {
            Collision::SelfBite
        } else if !self.snake.head().is_within_bounds(self.board) {
            Collision::Wall
        } else {
            return None;
        };

        self.status = GameStatus::GameOver;
        self.collision = Some(collision);
        info!(
            "game over ({collision:?}), final score {}",
            self.apples_eaten
        );
        Some(collision)
    }
}

fn fresh_snake(board: Board) -> Snake {
    Snake::new(Position::ORIGIN, INITIAL_BODY_PARTS, board.game_units())
}
