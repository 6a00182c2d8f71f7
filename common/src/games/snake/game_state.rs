use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use super::food::{place_food, PlacementError};
use super::settings::{EngineSettings, MIN_DIMENSION};
use super::snake::Snake;
use super::types::{BorderMode, Cell, Collision, Direction, EngineCommand, GridSize, TickOutcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    InvalidDimensions { cols: i32, rows: i32 },
    InvalidSettings(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidDimensions { cols, rows } => write!(
                f,
                "Invalid grid {}x{}: both dimensions must be at least {}",
                cols, rows, MIN_DIMENSION
            ),
            EngineError::InvalidSettings(reason) => write!(f, "Invalid engine settings: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}

/// Read-only copy of the engine state, taken once per frame by a host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub cols: i32,
    pub rows: i32,
    /// Tail first, head last.
    pub body: Vec<Cell>,
    pub food: Option<Cell>,
    pub direction: Direction,
    pub border_mode: BorderMode,
    pub score: u32,
    pub game_over: bool,
    pub end_reason: Option<Collision>,
}

/// Single-snake game on a fixed C x R grid, advanced one step per `tick`.
///
/// The engine never reads the clock; the host decides when to tick and
/// forwards direction requests in between. Only the latest request before a
/// tick is applied.
#[derive(Clone, Debug)]
pub struct GridEngine {
    grid: GridSize,
    snake: Snake,
    food: Option<Cell>,
    border_mode: BorderMode,
    end_reason: Option<Collision>,
    score: u32,
    rng: SessionRng,
}

impl GridEngine {
    pub fn new(cols: i32, rows: i32, rng: SessionRng) -> Result<Self, EngineError> {
        if cols < MIN_DIMENSION || rows < MIN_DIMENSION {
            return Err(EngineError::InvalidDimensions { cols, rows });
        }

        let grid = GridSize { cols, rows };
        let mut engine = Self {
            grid,
            snake: Snake::new(grid.center()),
            food: None,
            border_mode: BorderMode::Wrap,
            end_reason: None,
            score: 0,
            rng,
        };
        engine.reset();
        Ok(engine)
    }

    pub fn from_settings(settings: &EngineSettings, rng: SessionRng) -> Result<Self, EngineError> {
        settings.validate().map_err(EngineError::InvalidSettings)?;

        let mut engine = Self::new(settings.cols, settings.rows, rng)?;
        engine.set_border_mode(settings.border_mode);
        Ok(engine)
    }

    /// Restores the canonical start. The food source is reseeded, so every
    /// reset of the same engine yields the same state.
    pub fn reset(&mut self) {
        self.rng = SessionRng::new(self.rng.seed());
        self.snake = Snake::new(self.grid.center());
        self.end_reason = None;
        self.score = 0;
        self.food = self.spawn_food();
    }

    /// Queues a turn for the next tick. A reversal of the current direction is
    /// dropped silently.
    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    pub fn set_border_mode(&mut self, border_mode: BorderMode) {
        self.border_mode = border_mode;
    }

    pub fn apply(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Turn(direction) => self.request_direction(direction),
            EngineCommand::Reset => self.reset(),
            EngineCommand::SetBorderMode(border_mode) => self.set_border_mode(border_mode),
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }

        let next_head = match self.next_head() {
            Ok(cell) => cell,
            Err(collision) => return self.end_game(collision),
        };

        let grow = self.food == Some(next_head);
        if self.snake.blocks(next_head, grow) {
            return self.end_game(Collision::SelfBody);
        }

        self.snake.advance(next_head, grow);

        if grow {
            self.score += 1;
            log!(
                "Ate food at ({}, {}). Score: {}",
                next_head.x,
                next_head.y,
                self.score
            );
            self.food = self.spawn_food();
        }

        TickOutcome::Moved { grew: grow }
    }

    fn next_head(&self) -> Result<Cell, Collision> {
        let candidate = self
            .snake
            .head()
            .translated(self.snake.pending_direction.delta());

        match self.border_mode {
            BorderMode::Wrap => Ok(self.grid.wrap(candidate)),
            BorderMode::Walls if self.grid.contains(candidate) => Ok(candidate),
            BorderMode::Walls => Err(Collision::Wall),
        }
    }

    fn end_game(&mut self, collision: Collision) -> TickOutcome {
        let head = self.snake.head();
        log!(
            "Game over: {:?} collision with head at ({}, {}). Score: {}",
            collision,
            head.x,
            head.y,
            self.score
        );
        self.end_reason = Some(collision);
        TickOutcome::Blocked(collision)
    }

    fn spawn_food(&mut self) -> Option<Cell> {
        match place_food(&self.grid, &self.snake, &mut self.rng) {
            Ok(cell) => {
                log!("Food spawned at ({}, {})", cell.x, cell.y);
                Some(cell)
            }
            Err(PlacementError::NoFreeCell) => {
                log!("Board is full, no food placed");
                None
            }
        }
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        self.snake.body()
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    pub fn tail(&self) -> Cell {
        self.snake.tail()
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.snake.pending_direction
    }

    pub fn is_game_over(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn end_reason(&self) -> Option<Collision> {
        self.end_reason
    }

    pub fn cols(&self) -> i32 {
        self.grid.cols
    }

    pub fn rows(&self) -> i32 {
        self.grid.rows
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn border_mode(&self) -> BorderMode {
        self.border_mode
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            cols: self.grid.cols,
            rows: self.grid.rows,
            body: self.snake.body().iter().copied().collect(),
            food: self.food,
            direction: self.snake.direction,
            border_mode: self.border_mode,
            score: self.score,
            game_over: self.is_game_over(),
            end_reason: self.end_reason,
        }
    }

    #[cfg(test)]
    fn set_snake(&mut self, cells: Vec<Cell>, direction: Direction) {
        self.snake = Snake::from_cells(cells, direction);
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Option<Cell>) {
        self.food = food;
    }
}
