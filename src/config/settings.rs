use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::overrides::IdentityOverride;
use crate::errors::config_context;

/// A run of consecutive placements sharing one point value (e.g. 5-6 → 6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsRange {
    pub from: u32,
    pub to: u32,
    pub points: u32,
}

impl PointsRange {
    pub fn new(from: u32, to: u32, points: u32) -> Self {
        Self { from, to, points }
    }
}

/// Every placement at or past `cutoff` earns `points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailRule {
    pub cutoff: u32,
    pub points: u32,
}

/// Placement → points configuration for one season. A `scoring` section in a
/// config file replaces the reference season as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub points: BTreeMap<u32, u32>,
    #[serde(default)]
    pub ranges: Vec<PointsRange>,
    #[serde(default)]
    pub tail: Option<TailRule>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        // 1 → 11, 2 → 10, 3 → 8, 4 → 7, 5-6 → 6, 7-8 → 5,
        // 9-12 → 4, 13-16 → 3, 17-32 → 2, 33+ → 1
        Self {
            points: BTreeMap::from([(1, 11), (2, 10), (3, 8), (4, 7)]),
            ranges: vec![
                PointsRange::new(5, 6, 6),
                PointsRange::new(7, 8, 5),
                PointsRange::new(9, 12, 4),
                PointsRange::new(13, 16, 3),
                PointsRange::new(17, 32, 2),
            ],
            tail: Some(TailRule { cutoff: 33, points: 1 }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub data_dir: PathBuf,
    pub tournaments: Vec<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            tournaments: ["one", "two", "three", "four"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub overrides: Vec<IdentityOverride>,
    pub data: DataSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scoring: ScoringSettings::default(),
            overrides: Vec::new(),
            data: DataSettings::default(),
        }
    }

    /// Load configuration from a JSON file, or fall back to defaults when no
    /// path is given. Sections missing from the file keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::new());
        };

        let json = fs::read_to_string(path).with_context(|| config_context("read", path))?;
        let config: Self =
            serde_json::from_str(&json).with_context(|| config_context("parse", path))?;

        info!(
            "Loaded configuration from {} ({} tournaments, {} identity overrides)",
            path.display(),
            config.data.tournaments.len(),
            config.overrides.len()
        );
        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data.data_dir = dir;
        }
        self
    }
}
