use std::path::Path;

use super::{Replay, REPLAY_FILE_EXTENSION, REPLAY_VERSION};

/// First line of every replay file; keeps the file a valid YAML document.
const HEADER_PREFIX: &str = "# snakereplay v";

#[derive(Debug)]
pub enum ReplayError {
    IoError(std::io::Error),
    EncodeError(serde_yaml_ng::Error),
    DecodeError(serde_yaml_ng::Error),
    MissingHeader,
    UnsupportedVersion { found: u8, expected: u8 },
    EmptyFile,
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplayError::IoError(e) => write!(f, "IO error: {}", e),
            ReplayError::EncodeError(e) => write!(f, "Encode error: {}", e),
            ReplayError::DecodeError(e) => write!(f, "Decode error: {}", e),
            ReplayError::MissingHeader => write!(f, "Missing replay header"),
            ReplayError::UnsupportedVersion { found, expected } => {
                write!(f, "Unsupported replay version: found {}, expected {}", found, expected)
            }
            ReplayError::EmptyFile => write!(f, "Empty replay file"),
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        ReplayError::IoError(e)
    }
}

impl From<serde_yaml_ng::Error> for ReplayError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        ReplayError::DecodeError(e)
    }
}

pub fn save_replay(path: &Path, replay: &Replay) -> Result<(), ReplayError> {
    let content = save_replay_to_string(replay)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn save_replay_to_string(replay: &Replay) -> Result<String, ReplayError> {
    let body = serde_yaml_ng::to_string(replay).map_err(ReplayError::EncodeError)?;
    Ok(format!("{}{}\n{}", HEADER_PREFIX, REPLAY_VERSION, body))
}

pub fn load_replay(path: &Path) -> Result<Replay, ReplayError> {
    let content = std::fs::read_to_string(path)?;
    load_replay_from_str(&content)
}

pub fn load_replay_from_str(content: &str) -> Result<Replay, ReplayError> {
    if content.trim().is_empty() {
        return Err(ReplayError::EmptyFile);
    }

    let (header, body) = content.split_once('\n').unwrap_or((content, ""));
    let version = header
        .trim()
        .strip_prefix(HEADER_PREFIX)
        .and_then(|v| v.parse::<u8>().ok())
        .ok_or(ReplayError::MissingHeader)?;

    if version != REPLAY_VERSION {
        return Err(ReplayError::UnsupportedVersion {
            found: version,
            expected: REPLAY_VERSION,
        });
    }

    let replay = serde_yaml_ng::from_str(body)?;
    Ok(replay)
}

pub fn generate_replay_filename(version: &str) -> String {
    let now = chrono::Local::now();
    let timestamp = now.format("%Y%m%d%H%M%S");
    let sanitized_version = version.replace('.', "_");

    format!("{}_SNAKE_{}.{}", timestamp, sanitized_version, REPLAY_FILE_EXTENSION)
}
