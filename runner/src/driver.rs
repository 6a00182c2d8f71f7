use std::path::{Path, PathBuf};

use snake_common::games::SessionRng;
use snake_common::games::snake::{EngineCommand, EngineError, SnakeSession, TickOutcome};
use snake_common::log;
use snake_common::replay::{
    generate_replay_filename, load_replay, save_replay, ReplayError, ReplayPlayer,
};
use snake_common::version::VERSION;

use crate::config::{Config, ReplayConfig};
use crate::script::ScriptStep;

/// Runs one tick per script step and returns the session for inspection.
pub fn run_script(config: &Config, rng: SessionRng, steps: &[ScriptStep]) -> Result<SnakeSession, EngineError> {
    let mut session = SnakeSession::create(&config.engine, rng, config.replay.save)?;

    for step in steps {
        if let Some(command) = resolve_step(&session, *step) {
            session.submit(command);
        }
        let outcome = session.advance();
        log_tick(&session, outcome);
    }

    Ok(session)
}

fn resolve_step(session: &SnakeSession, step: ScriptStep) -> Option<EngineCommand> {
    match step {
        ScriptStep::Idle => None,
        ScriptStep::Turn(direction) => Some(EngineCommand::Turn(direction)),
        ScriptStep::Reset => Some(EngineCommand::Reset),
        // Resolved against the live engine so the replay records a concrete mode.
        ScriptStep::ToggleBorder => Some(EngineCommand::SetBorderMode(
            session.engine().border_mode().toggled(),
        )),
    }
}

fn log_tick(session: &SnakeSession, outcome: TickOutcome) {
    if let TickOutcome::Moved { .. } = outcome {
        let head = session.engine().head();
        log!("Head: ({},{})", head.x, head.y);
    }
}

pub fn save_session_replay(session: SnakeSession, replay_config: &ReplayConfig) -> Result<Option<PathBuf>, ReplayError> {
    let Some(replay) = session.finish() else {
        return Ok(None);
    };

    let replay_dir = Path::new(&replay_config.location);
    std::fs::create_dir_all(replay_dir)?;

    let file_path = replay_dir.join(generate_replay_filename(VERSION));
    save_replay(&file_path, &replay)?;
    log!("Replay saved to: {}", file_path.display());
    Ok(Some(file_path))
}

pub fn run_replay(path: &Path) -> Result<ReplayPlayer, Box<dyn std::error::Error>> {
    let replay = load_replay(path)?;
    let mut player = ReplayPlayer::new(replay)?;

    log!(
        "Playing replay {} (engine {}, seed {}, {} ticks, {} commands, started at {} ms)",
        path.display(),
        player.engine_version(),
        player.seed(),
        player.total_ticks(),
        player.total_actions(),
        player.game_started_timestamp_ms()
    );
    if player.engine_version() != VERSION {
        log!(
            "Replay was recorded with engine {}, running {}",
            player.engine_version(),
            VERSION
        );
    }

    while let Some(outcome) = player.step() {
        if let TickOutcome::Moved { .. } = outcome {
            let head = player.engine().head();
            log!("Head: ({},{})", head.x, head.y);
        }
    }
    player.run_to_end();

    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use snake_common::games::snake::{BorderMode, Cell, Collision, EngineSettings};

    fn config(border_mode: BorderMode, save: bool, location: String) -> Config {
        Config {
            engine: EngineSettings {
                cols: 10,
                rows: 10,
                border_mode,
            },
            seed: Some(8),
            replay: ReplayConfig { save, location },
        }
    }

    #[test]
    fn test_script_drives_head() {
        let steps = parse_script("D..L").unwrap();
        let session = run_script(&config(BorderMode::Wrap, false, String::new()), SessionRng::new(8), &steps).unwrap();
        assert_eq!(session.tick(), 4);
        assert_eq!(session.engine().head(), Cell::new(4, 8));
    }

    #[test]
    fn test_toggle_then_run_into_wall() {
        let steps = parse_script("w.....").unwrap();
        let session = run_script(&config(BorderMode::Wrap, false, String::new()), SessionRng::new(8), &steps).unwrap();
        assert_eq!(session.engine().border_mode(), BorderMode::Walls);
        assert_eq!(session.engine().end_reason(), Some(Collision::Wall));
    }

    #[test]
    fn test_saved_replay_plays_back_identically() {
        let random_number: u32 = rand::random();
        let location = std::env::temp_dir()
            .join(format!("temp_snake_runner_replays_{}", random_number))
            .to_str()
            .unwrap()
            .to_string();
        let cfg = config(BorderMode::Walls, true, location.clone());

        let steps = parse_script("D.L..U.R.rDDw......").unwrap();
        let session = run_script(&cfg, SessionRng::new(8), &steps).unwrap();
        let expected = session.engine().snapshot();

        let path = save_session_replay(session, &cfg.replay).unwrap().unwrap();
        let player = run_replay(&path).unwrap();
        std::fs::remove_dir_all(&location).unwrap();

        assert_eq!(player.engine().snapshot(), expected);
    }

    #[test]
    fn test_no_replay_saved_when_disabled() {
        let steps = parse_script("..").unwrap();
        let cfg = config(BorderMode::Wrap, false, "unused".to_string());
        let session = run_script(&cfg, SessionRng::new(8), &steps).unwrap();
        assert_eq!(save_session_replay(session, &cfg.replay).unwrap(), None);
    }
}
