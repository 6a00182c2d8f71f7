mod config;
mod driver;
mod script;

use std::path::PathBuf;

use clap::Parser;
use snake_common::games::SessionRng;
use snake_common::games::snake::EngineSnapshot;
use snake_common::{log, logger};

use config::{get_config_manager, CONFIG_FILE};
use script::parse_script;

const DEFAULT_SCRIPT: &str = "....D....L....U....R....";

#[derive(Parser)]
#[command(name = "snake_runner", about = "Drives the grid snake engine from a scripted input string")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// One step per character: U D L R turn, `.` idles, `r` resets, `w` toggles borders.
    #[arg(long)]
    script: Option<String>,

    /// Play back a recorded replay instead of a script.
    #[arg(long, conflicts_with = "script")]
    replay: Option<PathBuf>,

    /// Overrides the seed from the config file.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(path) = args.replay {
        let player = driver::run_replay(&path)?;
        report(&player.engine().snapshot())?;
        return Ok(());
    }

    let config = get_config_manager(&args.config).get_config()?;
    let steps = parse_script(args.script.as_deref().unwrap_or(DEFAULT_SCRIPT))?;
    let rng = SessionRng::from_optional_seed(args.seed.or(config.seed));

    let session = driver::run_script(&config, rng, &steps)?;
    report(&session.engine().snapshot())?;

    if let Some(path) = driver::save_session_replay(session, &config.replay)? {
        log!("Replay it with: snake_runner --replay {}", path.display());
    }

    Ok(())
}

fn report(snapshot: &EngineSnapshot) -> Result<(), Box<dyn std::error::Error>> {
    if snapshot.game_over {
        log!("Game over ({:?}). Score: {}", snapshot.end_reason, snapshot.score);
    } else {
        log!("Still running. Score: {}", snapshot.score);
    }
    print!("{}", serde_yaml_ng::to_string(snapshot)?);
    Ok(())
}
