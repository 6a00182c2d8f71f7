use chrono::Utc;

use crate::games::snake::{EngineCommand, EngineSettings};
use super::{Replay, ReplayAction, ReplayMetadata};

pub struct ReplayRecorder {
    engine_version: String,
    game_started_timestamp_ms: i64,
    seed: u64,
    settings: EngineSettings,
    actions: Vec<ReplayAction>,
}

impl ReplayRecorder {
    pub fn new(engine_version: String, seed: u64, settings: EngineSettings) -> Self {
        Self {
            engine_version,
            game_started_timestamp_ms: Utc::now().timestamp_millis(),
            seed,
            settings,
            actions: Vec::new(),
        }
    }

    pub fn record_command(&mut self, tick: u64, command: EngineCommand) {
        self.actions.push(ReplayAction { tick, command });
    }

    pub fn finalize(&mut self, total_ticks: u64) -> Replay {
        let mut actions = std::mem::take(&mut self.actions);
        // Stable sort keeps same-tick commands in submission order.
        actions.sort_by_key(|a| a.tick);

        Replay {
            metadata: ReplayMetadata {
                engine_version: std::mem::take(&mut self.engine_version),
                game_started_timestamp_ms: self.game_started_timestamp_ms,
                seed: self.seed,
                settings: self.settings,
            },
            total_ticks,
            actions,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn actions_count(&self) -> usize {
        self.actions.len()
    }
}
