use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cell_size must be at least 1")]
    ZeroCellSize,
}

/// Startup configuration. Loaded once; nothing here changes at runtime.
///
/// Grid dimensions are derived from the viewport and cell size, so the
/// board always fills as much of the window as whole cells allow.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Viewport size in pixels.
    pub window_width: i32,
    pub window_height: i32,
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
    /// Thickness of the gridlines in pixels.
    pub gridline_width: u32,
    /// Host-loop iterations between generations, minus one: the simulation
    /// advances once every `speed_divisor + 1` iterations.
    pub speed_divisor: u32,
    /// Fixed delay appended to every host-loop iteration.
    pub frame_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1200,
            window_height: 800,
            cell_size: 20,
            gridline_width: 4,
            speed_divisor: 11,
            frame_delay_ms: 30,
        }
    }
}

impl Config {
    pub const DEFAULT_PATH: &'static str = "life.toml";

    /// Load configuration from a TOML file. A missing file yields the
    /// defaults; a file that exists but cannot be read or parsed is an
    /// error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        if config.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        Ok(config)
    }

    /// Grid width in cells.
    pub fn cols(&self) -> usize {
        (self.window_width.max(0) as u32 / self.cell_size) as usize
    }

    /// Grid height in cells.
    pub fn rows(&self) -> usize {
        (self.window_height.max(0) as u32 / self.cell_size) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_fills_the_window() {
        let config = Config::default();
        assert_eq!(config.cols(), 60);
        assert_eq!(config.rows(), 40);
    }

    #[test]
    fn derived_dimensions_truncate() {
        let config = Config {
            window_width: 1190,
            window_height: 799,
            ..Config::default()
        };
        assert_eq!(config.cols(), 59);
        assert_eq!(config.rows(), 39);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: Config = toml::from_str("cell_size = 10\nspeed_divisor = 5\n").unwrap();
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.speed_divisor, 5);
        assert_eq!(config.window_width, 1200);
        assert_eq!(config.frame_delay_ms, 30);
    }

    #[test]
    fn garbage_toml_is_rejected() {
        assert!(toml::from_str::<Config>("cell_size = \"big\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load("definitely/not/a/real/path.toml").unwrap();
        assert_eq!(config.cell_size, Config::default().cell_size);
    }
}
