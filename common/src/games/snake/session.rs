use crate::games::SessionRng;
use crate::log;
use crate::replay::{Replay, ReplayRecorder};
use crate::version::VERSION;
use super::game_state::{EngineError, GridEngine};
use super::settings::EngineSettings;
use super::types::{EngineCommand, TickOutcome};

/// An engine plus the bookkeeping a host needs around it: a logical tick
/// counter and, optionally, a recorder for the commands it forwards.
pub struct SnakeSession {
    engine: GridEngine,
    tick: u64,
    replay_recorder: Option<ReplayRecorder>,
}

impl SnakeSession {
    pub fn create(
        settings: &EngineSettings,
        rng: SessionRng,
        record_replay: bool,
    ) -> Result<Self, EngineError> {
        let seed = rng.seed();
        let engine = GridEngine::from_settings(settings, rng)?;
        let replay_recorder =
            record_replay.then(|| ReplayRecorder::new(VERSION.to_string(), seed, *settings));

        log!(
            "Session created: {}x{} grid, {:?} borders, seed {}",
            settings.cols,
            settings.rows,
            settings.border_mode,
            seed
        );

        Ok(Self {
            engine,
            tick: 0,
            replay_recorder,
        })
    }

    pub fn submit(&mut self, command: EngineCommand) {
        if let Some(recorder) = self.replay_recorder.as_mut() {
            recorder.record_command(self.tick, command);
        }
        self.engine.apply(command);
    }

    pub fn advance(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();
        self.tick += 1;

        if let TickOutcome::Blocked(collision) = outcome {
            log!(
                "Tick {}: game over ({:?}), final score {}",
                self.tick,
                collision,
                self.engine.score()
            );
        }
        outcome
    }

    pub fn engine(&self) -> &GridEngine {
        &self.engine
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_recording(&self) -> bool {
        self.replay_recorder.is_some()
    }

    pub fn finish(self) -> Option<Replay> {
        let total_ticks = self.tick;
        self.replay_recorder
            .map(|mut recorder| recorder.finalize(total_ticks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::{BorderMode, Direction};

    #[test]
    fn test_commands_recorded_under_current_tick() {
        let mut session = SnakeSession::create(&EngineSettings::default(), SessionRng::new(3), true).unwrap();
        session.submit(EngineCommand::Turn(Direction::Up));
        session.advance();
        session.advance();
        session.submit(EngineCommand::SetBorderMode(BorderMode::Walls));
        session.advance();

        assert_eq!(session.tick(), 3);
        let replay = session.finish().unwrap();
        assert_eq!(replay.total_ticks, 3);
        let ticks: Vec<u64> = replay.actions.iter().map(|a| a.tick).collect();
        assert_eq!(ticks, vec![0, 2]);
        assert_eq!(replay.metadata.seed, 3);
    }

    #[test]
    fn test_without_recording_finish_is_empty() {
        let mut session = SnakeSession::create(&EngineSettings::default(), SessionRng::new(3), false).unwrap();
        assert!(!session.is_recording());
        session.submit(EngineCommand::Reset);
        session.advance();
        assert!(session.finish().is_none());
    }
}
