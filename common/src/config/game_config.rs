use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

const MAX_WIN_THRESHOLD: u32 = 99;
const MAX_AI_MOVE_DELAY_MS: u32 = 5000;

pub fn get_config_manager(
    file_path: impl Into<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    /// Round wins that end a match.
    pub win_threshold: u32,
    /// Pause before the computer's mark appears; 0 plays it immediately.
    pub ai_move_delay_ms: u32,
    /// Who opens the very first round. Every reset hands the opening move over.
    pub player_one_starts: bool,
}

impl GameConfig {
    pub fn ai_move_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.ai_move_delay_ms))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: 5,
            ai_move_delay_ms: 500,
            player_one_starts: true,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.win_threshold == 0 {
            return Err("win_threshold must be greater than 0".to_string());
        }
        if self.win_threshold > MAX_WIN_THRESHOLD {
            return Err(format!(
                "win_threshold must not exceed {}",
                MAX_WIN_THRESHOLD
            ));
        }
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "ai_move_delay_ms must not exceed {}",
                MAX_AI_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}
