use std::time::Duration;

use rand::rngs::ThreadRng;

use super::config::GameConfig;
use super::food::Food;
use super::grid::Direction;
use super::snake::Snake;

/// The controller is a two-mode state machine: frozen after a reset until
/// the first directional input, then ticking until a collision resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Paused,
    Active,
}

/// What ended a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// Round summary produced at the moment of a collision, before the reset
/// wipes the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub cause: Collision,
    pub final_score: u32,
}

/// What happened during one logic tick. The presentation layer drives sound
/// cues and session stats from this, so each event fires exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub ate_food: bool,
    pub game_over: Option<GameOver>,
}

/// Owns the snake and the food, runs the per-tick rules, and resets the
/// round on collision.
pub struct Game {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub mode: Mode,
    first_tick: bool,
    config: GameConfig,
    rng: ThreadRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let snake = Snake::new();
        let mut rng = rand::thread_rng();
        let food = Food::spawn(&mut rng, config.cell_count, &snake);

        Self {
            snake,
            food,
            score: 0,
            mode: Mode::Paused,
            first_tick: true,
            config,
            rng,
        }
    }

    pub fn cell_count(&self) -> i32 {
        self.config.cell_count
    }

    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Apply a directional input. A request for the exact reverse of the
    /// current direction is ignored; anything else takes effect immediately
    /// and wakes the game from Paused.
    pub fn steer(&mut self, direction: Direction) {
        if direction.is_opposite(self.snake.direction) {
            return;
        }
        self.snake.direction = direction;
        self.mode = Mode::Active;
    }

    /// Run one logic tick: advance, then check food, border, and self
    /// collision in that order. No-op while Paused.
    pub fn update(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.mode == Mode::Paused {
            return outcome;
        }

        // Self-collision is skipped on the first advance after a reset.
        let skip_self_check = self.first_tick;
        self.first_tick = false;

        self.snake.advance();

        if self.snake.head() == self.food.position {
            self.snake.grow();
            self.food
                .respawn(&mut self.rng, self.config.cell_count, &self.snake);
            self.score += 1;
            outcome.ate_food = true;
        }

        // The head may have left the grid by one cell, either by the advance
        // or by the growth push above.
        if self.hit_border() {
            outcome.game_over = Some(self.end_round(Collision::Wall));
            return outcome;
        }

        if !skip_self_check && self.snake.head_hits_body() {
            outcome.game_over = Some(self.end_round(Collision::SelfCollision));
        }

        outcome
    }

    /// Reset the round without a collision (player-requested restart).
    pub fn restart(&mut self) {
        self.reset_round();
    }

    fn hit_border(&self) -> bool {
        let head = self.snake.head();
        let edge = self.config.cell_count;
        head.x == -1 || head.x == edge || head.y == -1 || head.y == edge
    }

    fn end_round(&mut self, cause: Collision) -> GameOver {
        let over = GameOver {
            cause,
            final_score: self.score,
        };
        self.reset_round();
        over
    }

    fn reset_round(&mut self) {
        self.score = 0;
        self.snake.reset();
        self.food
            .respawn(&mut self.rng, self.config.cell_count, &self.snake);
        self.mode = Mode::Paused;
        self.first_tick = true;
    }
}
