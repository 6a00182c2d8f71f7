use crate::games::SessionRng;
use crate::games::snake::{EngineError, GridEngine, TickOutcome};
use super::{Replay, ReplayAction, ReplayMetadata};

/// Re-runs a recorded session: same seed, same settings, same commands at the
/// same ticks, hence the same final state.
pub struct ReplayPlayer {
    replay: Replay,
    current_action_index: usize,
    engine: GridEngine,
    tick: u64,
}

impl ReplayPlayer {
    pub fn new(replay: Replay) -> Result<Self, EngineError> {
        let engine = GridEngine::from_settings(
            &replay.metadata.settings,
            SessionRng::new(replay.metadata.seed),
        )?;

        Ok(Self {
            replay,
            current_action_index: 0,
            engine,
            tick: 0,
        })
    }

    fn metadata(&self) -> &ReplayMetadata {
        &self.replay.metadata
    }

    pub fn engine_version(&self) -> &str {
        &self.metadata().engine_version
    }

    pub fn seed(&self) -> u64 {
        self.metadata().seed
    }

    pub fn game_started_timestamp_ms(&self) -> i64 {
        self.metadata().game_started_timestamp_ms
    }

    pub fn total_actions(&self) -> usize {
        self.replay.actions.len()
    }

    pub fn total_ticks(&self) -> u64 {
        self.replay.total_ticks
    }

    pub fn current_action_index(&self) -> usize {
        self.current_action_index
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn is_finished(&self) -> bool {
        self.tick >= self.replay.total_ticks
            && self.current_action_index >= self.replay.actions.len()
    }

    pub fn actions_for_tick(&mut self, tick: u64) -> Vec<ReplayAction> {
        let mut actions = Vec::new();
        while let Some(action) = self.replay.actions.get(self.current_action_index) {
            if action.tick > tick {
                break;
            }
            if action.tick == tick {
                actions.push(*action);
            }
            self.current_action_index += 1;
        }
        actions
    }

    /// Applies the commands recorded before the next tick, then runs it.
    /// Returns `None` once every recorded tick has been played.
    pub fn step(&mut self) -> Option<TickOutcome> {
        if self.tick >= self.replay.total_ticks {
            return None;
        }

        for action in self.actions_for_tick(self.tick) {
            self.engine.apply(action.command);
        }
        let outcome = self.engine.tick();
        self.tick += 1;
        Some(outcome)
    }

    pub fn run_to_end(&mut self) -> &GridEngine {
        while self.step().is_some() {}

        // Commands submitted after the final tick.
        for action in self.actions_for_tick(self.tick) {
            self.engine.apply(action.command);
        }
        &self.engine
    }
}
