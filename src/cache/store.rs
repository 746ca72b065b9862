use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{ParticipantWrapper, RawParticipant};
use crate::errors::{RecordError, load_context};

/// When a tournament file was last read into memory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataVersion {
    pub version: String,
    pub loaded_at: DateTime<Utc>,
}

impl DataVersion {
    fn now() -> Self {
        let loaded_at = Utc::now();
        Self {
            version: loaded_at.timestamp_millis().to_string(),
            loaded_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedTournament {
    pub name: String,
    /// Used for records that do not carry their own tournament id
    pub fallback_id: i64,
    pub participants: Vec<RawParticipant>,
}

/// The tournaments that loaded, in the order they were requested
#[derive(Debug, Clone, Default)]
pub struct TournamentDataset {
    pub tournaments: Vec<LoadedTournament>,
}

impl TournamentDataset {
    pub fn len(&self) -> usize {
        self.tournaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }
}

/// In-memory cache over a directory of `<name>.json` tournament exports
pub struct TournamentStore {
    data_dir: PathBuf,
    participants: HashMap<String, Vec<RawParticipant>>,
    versions: HashMap<String, DataVersion>,
}

impl TournamentStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            participants: HashMap::new(),
            versions: HashMap::new(),
        }
    }

    /// Load one tournament, from memory unless `force_refresh` is set
    pub fn load_participants(
        &mut self,
        name: &str,
        force_refresh: bool,
    ) -> Result<Vec<RawParticipant>> {
        if !force_refresh {
            if let Some(cached) = self.participants.get(name) {
                return Ok(cached.clone());
            }
        }

        let path = self.build_path(name);
        let participants = read_participants(&path)?;
        let version = DataVersion::now();

        info!(
            "Loaded tournament {} ({} participants, version {})",
            name,
            participants.len(),
            version.version
        );

        self.participants.insert(name.to_string(), participants.clone());
        self.versions.insert(name.to_string(), version);
        Ok(participants)
    }

    /// Load every named tournament. A tournament that cannot be read is
    /// logged and left out; the others still load.
    pub fn load_dataset(&mut self, names: &[String], force_refresh: bool) -> TournamentDataset {
        let mut dataset = TournamentDataset::default();

        for (idx, name) in names.iter().enumerate() {
            match self.load_participants(name, force_refresh) {
                Ok(participants) => dataset.tournaments.push(LoadedTournament {
                    name: name.clone(),
                    fallback_id: idx as i64 + 1,
                    participants,
                }),
                Err(e) => warn!("Could not load tournament {}: {:#}", name, e),
            }
        }

        info!("Loaded {}/{} tournaments", dataset.len(), names.len());
        dataset
    }

    pub fn clear_cache(&mut self) {
        self.participants.clear();
        self.versions.clear();
        info!("Cleared tournament cache");
    }

    pub fn version_info(&self, name: &str) -> Option<&DataVersion> {
        self.versions.get(name)
    }

    pub fn has_in_cache(&self, name: &str) -> bool {
        self.participants.contains_key(name)
    }

    fn build_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }
}

fn read_participants(path: &Path) -> Result<Vec<RawParticipant>> {
    let json = fs::read_to_string(path).with_context(|| load_context("read", path))?;
    let records: Vec<Value> =
        serde_json::from_str(&json).with_context(|| load_context("parse", path))?;

    let mut participants = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        match parse_record(index, record) {
            Ok(participant) => participants.push(participant),
            Err(e) => warn!("{}: {}", path.display(), e),
        }
    }
    Ok(participants)
}

/// Accepts both the wrapped `{"participant": {...}}` shape and bare records.
fn parse_record(index: usize, record: Value) -> Result<RawParticipant, RecordError> {
    let unparseable = |e: serde_json::Error| RecordError::Unparseable {
        index,
        reason: e.to_string(),
    };

    if record.get("participant").is_some() {
        serde_json::from_value::<ParticipantWrapper>(record)
            .map(|wrapper| wrapper.participant)
            .map_err(unparseable)
    } else {
        serde_json::from_value::<RawParticipant>(record).map_err(unparseable)
    }
}
