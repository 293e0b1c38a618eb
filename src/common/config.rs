use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::common::error::{PlayerError, Result};
use crate::common::frame_rate::{FrameRate, DEFAULT_FPS};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PlaybackConfig {
    #[serde(default = "default_file")]
    pub file: PathBuf,
    #[serde(default = "default_fps")]
    pub fps: i64,
    #[serde(default = "default_true")]
    pub wait_for_key: bool,
    #[serde(default = "default_true")]
    pub hide_cursor: bool,
}

fn default_file() -> PathBuf { PathBuf::from("data.txt") }
fn default_fps() -> i64 { i64::from(DEFAULT_FPS) }
fn default_true() -> bool { true }

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            fps: default_fps(),
            wait_for_key: true,
            hide_cursor: true,
        }
    }
}

impl PlaybackConfig {
    /// Configured rate, with the same non-positive fallback as the CLI argument.
    pub fn frame_rate(&self) -> FrameRate {
        FrameRate::from_raw(self.fps)
    }
}

impl Config {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PlayerError::Config(format!(
                "Config file not found: {}", path.display()
            )));
        }

        tracing::debug!("Loading config from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| PlayerError::Config(format!("Config parse error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.playback.file.as_os_str().is_empty() {
            return Err(PlayerError::Config(
                "Playback file must not be empty".to_string()
            ));
        }

        Ok(())
    }
}
