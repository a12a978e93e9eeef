//! Session configuration

use serde::{Deserialize, Serialize};

use crate::pieces::validate_catalog;
use crate::types::{ConfigError, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

/// Board dimensions for a session
///
/// Pixel sizes and colors belong to the presentation layer; the engine only
/// needs the grid size for its collision bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub width: u8,
    pub height: u8,
}

impl SessionConfig {
    pub fn new(width: u8, height: u8) -> Self {
        Self { width, height }
    }

    /// Reject zero-sized boards and a piece catalog with an empty shape
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        validate_catalog()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_playfield() {
        let config = SessionConfig::default();
        assert_eq!((config.width, config.height), (10, 20));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_sizes_rejected() {
        assert_eq!(
            SessionConfig::new(0, 20).validate(),
            Err(ConfigError::ZeroWidth)
        );
        assert_eq!(
            SessionConfig::new(10, 0).validate(),
            Err(ConfigError::ZeroHeight)
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"width": 6}"#).unwrap();
        assert_eq!(config, SessionConfig::new(6, 20));
    }
}
