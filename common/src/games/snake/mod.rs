mod food;
mod game_state;
mod session;
mod settings;
mod shared;
mod snake;
mod types;

pub use food::{place_food, PlacementError, MAX_SAMPLING_ATTEMPTS};
pub use game_state::{EngineError, EngineSnapshot, GridEngine};
pub use session::SnakeSession;
pub use settings::{EngineSettings, MAX_DIMENSION, MIN_DIMENSION};
pub use shared::SharedGridEngine;
pub use snake::Snake;
pub use types::{BorderMode, Cell, Collision, Direction, EngineCommand, GridSize, TickOutcome};
