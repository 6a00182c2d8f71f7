use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::game_state::{EngineSnapshot, GridEngine};
use super::types::{BorderMode, Direction, TickOutcome};

/// Cloneable handle for hosts that read input on one thread and tick on another.
/// The direction slot and the tick share one lock, so a request lands either
/// wholly before or wholly after a tick.
#[derive(Clone)]
pub struct SharedGridEngine {
    engine: Arc<Mutex<GridEngine>>,
}

impl SharedGridEngine {
    pub fn new(engine: GridEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GridEngine> {
        // The engine never panics mid-tick, so a poisoned lock still holds a consistent state.
        self.engine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn request_direction(&self, direction: Direction) {
        self.lock().request_direction(direction);
    }

    pub fn tick(&self) -> TickOutcome {
        self.lock().tick()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn set_border_mode(&self, border_mode: BorderMode) {
        self.lock().set_border_mode(border_mode);
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        self.lock().snapshot()
    }

    pub fn with_engine<R>(&self, f: impl FnOnce(&GridEngine) -> R) -> R {
        f(&self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use std::thread;

    #[test]
    fn test_requests_from_other_thread_are_seen_by_tick() {
        let engine = GridEngine::new(20, 20, SessionRng::new(11)).unwrap();
        let shared = SharedGridEngine::new(engine);

        let input = shared.clone();
        thread::spawn(move || input.request_direction(Direction::Down))
            .join()
            .unwrap();

        shared.tick();
        assert_eq!(shared.with_engine(|e| e.direction()), Direction::Down);
        assert_eq!(shared.snapshot().body.last(), Some(&crate::games::snake::Cell::new(10, 11)));
    }

    #[test]
    fn test_latest_request_wins() {
        let engine = GridEngine::new(20, 20, SessionRng::new(11)).unwrap();
        let shared = SharedGridEngine::new(engine);
        shared.request_direction(Direction::Up);
        shared.request_direction(Direction::Down);
        shared.tick();
        assert_eq!(shared.with_engine(|e| e.direction()), Direction::Down);
    }
}
