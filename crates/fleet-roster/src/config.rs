//! Roster configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.
//!
//! ```toml
//! default_capacity = 300
//! seed_demo_data = true
//!
//! [thresholds]
//! medium = 0.70
//! high = 0.90
//! ```

use crate::display::OccupancyThresholds;
use crate::error::ConfigError;
use crate::types::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Roster configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Capacity given to drafts that leave it unset
    pub default_capacity: u32,
    /// Occupancy classification cut-offs
    pub thresholds: OccupancyThresholds,
    /// Start dashboards with the demo trains loaded
    pub seed_demo_data: bool,
}

impl RosterConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With default capacity
    #[inline]
    #[must_use]
    pub fn with_default_capacity(mut self, capacity: u32) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// With occupancy thresholds
    #[inline]
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: OccupancyThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// With demo seeding on or off
    #[inline]
    #[must_use]
    pub fn with_seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML and the validation
    /// errors of [`RosterConfig::validate`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise the
    /// errors of [`RosterConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loading roster config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Check invariants
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroDefaultCapacity`] or
    /// [`ConfigError::InvalidThresholds`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_capacity == 0 {
            return Err(ConfigError::ZeroDefaultCapacity);
        }
        if !self.thresholds.is_valid() {
            return Err(ConfigError::InvalidThresholds {
                medium: self.thresholds.medium,
                high: self.thresholds.high,
            });
        }
        Ok(())
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY,
            thresholds: OccupancyThresholds::default(),
            seed_demo_data: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = RosterConfig::from_toml_str("").unwrap();
        assert_eq!(config, RosterConfig::default());
        assert_eq!(config.default_capacity, 300);
    }

    #[test]
    fn partial_thresholds_fill_defaults() {
        let config = RosterConfig::from_toml_str("[thresholds]\nhigh = 0.95\n").unwrap();
        assert_eq!(config.thresholds.medium, 0.70);
        assert_eq!(config.thresholds.high, 0.95);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let err = RosterConfig::from_toml_str("[thresholds]\nmedium = 0.95\nhigh = 0.5\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidThresholds { .. }));
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = RosterConfig::from_toml_str("default_capacity = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDefaultCapacity));
    }

    #[test]
    fn rejects_bad_toml() {
        let err = RosterConfig::from_toml_str("default_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn builders() {
        let config = RosterConfig::new()
            .with_default_capacity(120)
            .with_seed_demo_data(false);
        assert_eq!(config.default_capacity, 120);
        assert!(!config.seed_demo_data);
        assert!(config.validate().is_ok());
    }
}
