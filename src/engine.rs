use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace, warn};

use crate::collision::self_collision;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::fruit::{Fruit, place_fruit};
use crate::grid::{Cell, GridSize, in_bounds};
use crate::input::Direction;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Over,
}

/// Why an episode ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

/// What a single `update` call did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrameOutcome {
    /// The episode is over; nothing moved.
    Idle,
    /// The tick counter advanced but no step was due.
    Waiting,
    Moved,
    Ate,
    Died(DeathReason),
}

/// Read-only view handed to the render collaborator each frame.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Head first.
    pub segments: &'a VecDeque<Cell>,
    pub fruit: Cell,
    pub score: u32,
    pub status: GameStatus,
    pub direction: Direction,
    pub death_reason: Option<DeathReason>,
    pub bounds: GridSize,
}

/// Complete state for one session, driven by one `update` call per frame.
#[derive(Debug, Clone)]
pub struct GameEngine<R = StdRng> {
    pub snake: Snake,
    pub fruit: Fruit,
    config: GameConfig,
    score: u32,
    tick_counter: u32,
    steps: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Builds an engine seeded from `config.seed`, or from OS entropy when
    /// no seed is configured.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Creates a deterministic engine for tests and reproducible simulations.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Builds an engine drawing fruit positions from `rng`.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let bounds = config.bounds();
        let snake = Snake::initial(bounds, config.initial_length);
        let fruit = Fruit::new(place_fruit(&mut rng, bounds, snake.segments(), snake.tail()));

        info!(
            width = bounds.width,
            height = bounds.height,
            move_delay = config.move_delay_frames,
            ?fruit,
            "episode started"
        );

        Ok(Self {
            snake,
            fruit,
            config,
            score: 0,
            tick_counter: 0,
            steps: 0,
            status: GameStatus::Playing,
            death_reason: None,
            rng,
        })
    }

    /// Starts a new episode: initial body, zero score, fresh fruit, timer
    /// cleared. Valid from any state.
    pub fn reset(&mut self) {
        let bounds = self.bounds();
        self.snake = Snake::initial(bounds, self.config.initial_length);
        self.fruit = Fruit::new(place_fruit(
            &mut self.rng,
            bounds,
            self.snake.segments(),
            self.snake.tail(),
        ));
        self.score = 0;
        self.tick_counter = 0;
        self.steps = 0;
        self.status = GameStatus::Playing;
        self.death_reason = None;

        info!(fruit = ?self.fruit.position, "episode reset");
    }

    /// Advances one frame. `input` is buffered first; a step is taken only
    /// when the tick counter reaches the configured move delay.
    pub fn update(&mut self, input: Option<Direction>) -> FrameOutcome {
        if self.status == GameStatus::Over {
            return FrameOutcome::Idle;
        }

        if let Some(requested) = input {
            self.buffer_direction(requested);
        }

        self.tick_counter += 1;
        if self.tick_counter < self.config.move_delay_frames {
            return FrameOutcome::Waiting;
        }
        self.tick_counter = 0;

        self.step()
    }

    /// Like [`update`](Self::update) but takes a raw direction code.
    /// Unknown codes are logged and the frame runs with no direction.
    pub fn update_raw(&mut self, code: Option<u8>) -> FrameOutcome {
        let direction = code.and_then(|code| match Direction::try_from(code) {
            Ok(direction) => Some(direction),
            Err(error) => {
                warn!(%error, "ignoring malformed direction input");
                None
            }
        });

        self.update(direction)
    }

    fn buffer_direction(&mut self, requested: Direction) {
        let accepted = self.snake.buffer_direction(requested);
        if accepted == requested {
            debug!(direction = ?accepted, "direction buffered");
        } else {
            trace!(?requested, current = ?self.snake.direction(), "reversal rejected");
        }
    }

    fn step(&mut self) -> FrameOutcome {
        let direction = self.snake.commit_direction();
        let candidate = self.snake.candidate_head(direction);

        if !in_bounds(candidate, self.bounds()) {
            return self.end_episode(DeathReason::Wall, candidate);
        }

        if self_collision(candidate, self.snake.segments()) {
            return self.end_episode(DeathReason::SelfCollision, candidate);
        }

        self.steps += 1;
        let ate_fruit = candidate == self.fruit.position;
        self.snake
            .advance(candidate, ate_fruit && self.config.grows_on_eat);

        if !ate_fruit {
            debug!(head = ?candidate, "moved");
            return FrameOutcome::Moved;
        }

        self.score += 1;
        let bounds = self.bounds();
        if !self
            .fruit
            .relocate(&mut self.rng, bounds, self.snake.segments())
        {
            warn!(length = self.snake.len(), "no free cell left, fruit stays put");
        }

        info!(
            score = self.score,
            length = self.snake.len(),
            fruit = ?self.fruit.position,
            "fruit eaten"
        );
        FrameOutcome::Ate
    }

    fn end_episode(&mut self, reason: DeathReason, candidate: Cell) -> FrameOutcome {
        self.status = GameStatus::Over;
        self.death_reason = Some(reason);

        info!(
            ?reason,
            head = ?candidate,
            score = self.score,
            length = self.snake.len(),
            steps = self.steps,
            "game over"
        );
        FrameOutcome::Died(reason)
    }

    /// Read-only state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            segments: self.snake.body(),
            fruit: self.fruit.position,
            score: self.score,
            status: self.status,
            direction: self.snake.direction(),
            death_reason: self.death_reason,
            bounds: self.bounds(),
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Frames counted towards the next step.
    #[must_use]
    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    /// Steps committed this episode.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.bounds()
    }
}
