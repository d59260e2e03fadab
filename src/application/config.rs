use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use super::Speed;
use crate::domain::{Algorithm, GridGeometry};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0} must be greater than zero")]
    ZeroDimension(&'static str),
    #[error("block size {block_size} is larger than the {width}x{height} board")]
    BlockLargerThanGrid {
        width: u32,
        height: u32,
        block_size: u32,
    },
    #[error("{axis} {extent} is not a multiple of block size {block_size}")]
    Misaligned {
        axis: &'static str,
        extent: u32,
        block_size: u32,
    },
    #[error("speed {0} is outside [{min}, {max}]", min = Speed::MIN, max = Speed::MAX)]
    SpeedOutOfRange(u32),
    #[error("ticks_per_second must be greater than zero")]
    InvalidTickRate,
}

/// Board and pacing settings, loaded from TOML.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board width in pixels
    pub width: u32,
    /// Board height in pixels
    pub height: u32,
    /// Side of one square cell in pixels
    pub block_size: u32,
    /// Initial inverse speed
    pub speed: u32,
    /// Host ticks per second fed to the speed counter
    pub ticks_per_second: u32,
    pub algorithm: Algorithm,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            block_size: 10,
            speed: Speed::DEFAULT,
            ticks_per_second: 60,
            algorithm: Algorithm::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("block_size", self.block_size),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDimension(name));
            }
        }

        if self.block_size > self.width || self.block_size > self.height {
            return Err(ConfigError::BlockLargerThanGrid {
                width: self.width,
                height: self.height,
                block_size: self.block_size,
            });
        }

        for (axis, extent) in [("width", self.width), ("height", self.height)] {
            if extent % self.block_size != 0 {
                return Err(ConfigError::Misaligned {
                    axis,
                    extent,
                    block_size: self.block_size,
                });
            }
        }

        if !(Speed::MIN..=Speed::MAX).contains(&self.speed) {
            return Err(ConfigError::SpeedOutOfRange(self.speed));
        }

        if self.ticks_per_second == 0 {
            return Err(ConfigError::InvalidTickRate);
        }

        Ok(())
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.width as i32, self.height as i32, self.block_size as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("block_size = 20\nspeed = 4").unwrap();
        assert_eq!(config.block_size, 20);
        assert_eq!(config.speed, 4);
        assert_eq!(config.width, 800);
        assert_eq!(config.algorithm, Algorithm::Sparse);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = GameConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_misaligned_width() {
        let err = GameConfig::from_toml_str("width = 805").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Misaligned { axis: "width", extent: 805, block_size: 10 }
        ));
    }

    #[test]
    fn test_zero_block_size() {
        let err = GameConfig::from_toml_str("block_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDimension("block_size")));
    }

    #[test]
    fn test_block_larger_than_grid() {
        let raw = "width = 20\nheight = 20\nblock_size = 40";
        let err = GameConfig::from_toml_str(raw).unwrap_err();
        assert!(matches!(err, ConfigError::BlockLargerThanGrid { .. }));
    }

    #[test]
    fn test_speed_out_of_range() {
        let err = GameConfig::from_toml_str("speed = 61").unwrap_err();
        assert!(matches!(err, ConfigError::SpeedOutOfRange(61)));
        assert_eq!(err.to_string(), "speed 61 is outside [2, 60]");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = GameConfig::load("/nonexistent/life.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/life.toml"));
    }

    #[test]
    fn test_geometry_in_pixels() {
        let geo = GameConfig::default().geometry();
        assert_eq!((geo.width(), geo.height(), geo.block_size()), (800, 600, 10));
    }
}
