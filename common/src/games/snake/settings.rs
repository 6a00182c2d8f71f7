use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::BorderMode;

pub const MIN_DIMENSION: i32 = 1;
pub const MAX_DIMENSION: i32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub cols: i32,
    pub rows: i32,
    #[serde(default)]
    pub border_mode: BorderMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            cols: 30,
            rows: 20,
            border_mode: BorderMode::Wrap,
        }
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<(), String> {
        if self.cols < MIN_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(format!(
                "cols must be between {} and {}, got {}",
                MIN_DIMENSION, MAX_DIMENSION, self.cols
            ));
        }
        if self.rows < MIN_DIMENSION || self.rows > MAX_DIMENSION {
            return Err(format!(
                "rows must be between {} and {}, got {}",
                MIN_DIMENSION, MAX_DIMENSION, self.rows
            ));
        }
        Ok(())
    }
}
