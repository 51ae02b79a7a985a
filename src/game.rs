//! The game engine: board, snake, food, scoring and speed.
//!
//! Nothing in here knows about the terminal. Rule violations are not errors,
//! they move the game into its terminal `over` state.

use std::time::Duration;

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::snake::{Direction, Position, Snake};
use crate::TermInt;

pub const INITIAL_SNAKE_LENGTH: usize = 4;
pub const FOOD_COUNT: usize = 2;
pub const DEFAULT_BOARD_SIZE: TermInt = 13;

const BASE_TICK: Duration = Duration::from_secs(3);
const BASE_TICK_DIVISOR: u32 = 10;
const POINTS_PER_SPEEDUP: u32 = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Crash {
    Wall,
    Body,
}

/// What a single call to `step` did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The game was already over; nothing changed.
    Frozen,
    Crashed(Crash),
    Ate { slot: usize },
    Moved,
}

pub struct SnakeGame<R: Rng = ThreadRng> {
    width: TermInt,
    height: TermInt,
    snake: Snake,
    food: Vec<Position>,
    direction: Direction,
    over: bool,
    score: u32,
    rng: R,
}

impl SnakeGame<ThreadRng> {
    pub fn new(width: TermInt, height: TermInt) -> Self {
        Self::with_rng(width, height, rand::thread_rng())
    }
}

impl<R: Rng> SnakeGame<R> {
    /// The board must have room for the snake, all food and more; food placement
    /// does not terminate otherwise.
    pub fn with_rng(width: TermInt, height: TermInt, rng: R) -> Self {
        let mut game = SnakeGame {
            width,
            height,
            snake: Snake::new(Position::new(0, 0), INITIAL_SNAKE_LENGTH),
            food: Vec::with_capacity(FOOD_COUNT),
            direction: Direction::Down,
            over: false,
            score: 0,
            rng,
        };

        for _ in 0..FOOD_COUNT {
            let pos = game.random_free_cell();
            game.food.push(pos);
        }

        debug!("new {}x{} game, food at {:?}", width, height, game.food);
        game
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    /// Tail first, head last.
    pub fn snake(&self) -> &[Position] {
        self.snake.body()
    }

    pub fn food(&self) -> &[Position] {
        &self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Ignores a request to turn straight back into the snake's neck.
    pub fn set_direction(&mut self, direction: Direction) {
        if direction == self.direction.reverse() {
            return;
        }
        self.direction = direction;
    }

    pub fn step(&mut self) -> StepOutcome {
        if self.over {
            return StepOutcome::Frozen;
        }

        let new_head = self.snake.head().moved(self.direction);

        if !self.in_bounds(new_head) {
            return self.crash(Crash::Wall);
        }
        if self.snake.contains(new_head) {
            return self.crash(Crash::Body);
        }

        match self.food.iter().position(|&f| f == new_head) {
            Some(slot) => {
                self.snake.grow(new_head);
                self.food[slot] = self.random_free_cell();
                self.score += 1;
                debug!("ate food at {:?}, score {}, new food at {:?}", new_head, self.score, self.food[slot]);
                StepOutcome::Ate { slot }
            }
            None => {
                self.snake.slide(new_head);
                StepOutcome::Moved
            }
        }
    }

    /// The game speeds up every few points, without a lower bound.
    pub fn tick_duration(&self) -> Duration {
        BASE_TICK / (BASE_TICK_DIVISOR + self.score / POINTS_PER_SPEEDUP)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn crash(&mut self, kind: Crash) -> StepOutcome {
        self.over = true;
        info!("game over ({:?}), score {}, length {}", kind, self.score, self.snake.len());
        StepOutcome::Crashed(kind)
    }

    fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width as i32 && pos.y < self.height as i32
    }

    // Rejection sampling with no attempt cap.
    fn random_free_cell(&mut self) -> Position {
        loop {
            let pos = Position::new(
                self.rng.gen_range(0..self.width as i32),
                self.rng.gen_range(0..self.height as i32),
            );
            if !self.snake.contains(pos) && !self.food.contains(&pos) {
                return pos;
            }
        }
    }
}
