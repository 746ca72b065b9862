use serde::{Deserialize, Serialize};

use crate::scoring::Points;

/// One entrant as exported by Challonge.
///
/// Every field is optional on the wire; the extractor decides what a usable
/// record looks like. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawParticipant {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub tournament_id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub challonge_username: Option<String>,
    #[serde(default)]
    pub challonge_user_id: Option<i64>,
    #[serde(default)]
    pub final_rank: Option<i64>,
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl RawParticipant {
    /// First non-blank display string: name, display name, then handles.
    pub fn display_name(&self) -> Option<&str> {
        first_non_blank(&[
            &self.name,
            &self.display_name,
            &self.username,
            &self.challonge_username,
        ])
    }

    pub fn handle(&self) -> Option<&str> {
        first_non_blank(&[&self.challonge_username, &self.username])
    }

    pub fn user_id(&self) -> u64 {
        self.challonge_user_id
            .filter(|id| *id > 0)
            .map(|id| id as u64)
            .unwrap_or(0)
    }

    pub fn has_identity(&self) -> bool {
        self.display_name().is_some() || self.user_id() > 0
    }

    /// Placement if one was recorded; zero and negatives mean "unranked".
    pub fn placement(&self) -> Option<u32> {
        self.final_rank
            .filter(|rank| *rank > 0)
            .map(|rank| u32::try_from(rank).unwrap_or(u32::MAX))
    }
}

fn first_non_blank<'a>(fields: &[&'a Option<String>]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| Option::as_deref(*field))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Tournament files wrap each entrant as `{"participant": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantWrapper {
    pub participant: RawParticipant,
}

/// One player's outcome in one tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub tournament_id: i64,
    pub final_rank: u32,
    pub points_earned: Points,
    pub participant_name: String,
    pub challonge_username: String,
    pub challonge_user_id: u64, // 0 when unavailable
}

impl TournamentResult {
    pub fn new(tournament_id: i64, final_rank: u32, points_earned: Points, name: &str) -> Self {
        Self {
            tournament_id,
            final_rank,
            points_earned,
            participant_name: name.to_string(),
            challonge_username: String::new(),
            challonge_user_id: 0,
        }
    }

    pub fn with_username(mut self, username: &str) -> Self {
        self.challonge_username = username.to_string();
        self
    }

    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.challonge_user_id = user_id;
        self
    }
}
