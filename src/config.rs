// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run-time configuration, read from TOML.
//!
//! Every field is optional; an empty file gives the standard grid and the
//! full length range.
//!
//! ```toml
//! [grid]
//! coordinates = [[68, 50], [224, 50], [380, 50],
//!                [68, 213], [224, 213], [380, 213],
//!                [68, 376], [224, 376], [380, 376]]
//! overlap_threshold = 310
//!
//! [enumeration]
//! min_length = 4
//! max_length = 9
//! ```

use crate::enumerate::check_range;
use crate::error::ConfigError;
use crate::geometry::constants::{MAX_PATTERN_LENGTH, MIN_PATTERN_LENGTH, NDOTS};
use crate::geometry::GridTopology;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub enumeration: EnumerationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Screen coordinates of dots 1..=9, as `[x, y]` pairs.
    pub coordinates: Option<Vec<[i64; 2]>>,
    pub overlap_threshold: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumerationConfig {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl EnumerationConfig {
    pub fn min_length(&self) -> usize {
        self.min_length.unwrap_or(MIN_PATTERN_LENGTH)
    }

    pub fn max_length(&self) -> usize {
        self.max_length.unwrap_or(MAX_PATTERN_LENGTH)
    }
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check everything `grid()` and the length range depend on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid()?;
        check_range(self.enumeration.min_length(), self.enumeration.max_length())?;
        Ok(())
    }

    /// Build the grid this configuration describes.
    pub fn grid(&self) -> Result<GridTopology, ConfigError> {
        let mut grid = match &self.grid.coordinates {
            None => GridTopology::standard(),
            Some(coordinates) => {
                let table: [[i64; 2]; NDOTS] = coordinates
                    .as_slice()
                    .try_into()
                    .map_err(|_| ConfigError::CoordinateCount(coordinates.len()))?;
                GridTopology::with_coordinates(table.map(|[x, y]| (x, y)))?
            }
        };
        if let Some(threshold) = self.grid.overlap_threshold {
            grid = grid.with_overlap_threshold(threshold)?;
        }
        Ok(grid)
    }

    /// The configured `(min, max)` length range.
    pub fn length_range(&self) -> (usize, usize) {
        (self.enumeration.min_length(), self.enumeration.max_length())
    }
}
