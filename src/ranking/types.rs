use serde::{Deserialize, Serialize};

use crate::scoring::TotalPoints;

/// Aggregate of one resolved player across every tournament they entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub username: String,
    pub challonge_user_id: u64,
    pub tournaments_participated: usize,
    pub best_rank: Option<u32>,
    pub worst_rank: Option<u32>,
    pub average_rank: Option<f64>,
    pub total_tournaments: usize,
    pub participation_rate: f64,
    pub total_points: TotalPoints,
    pub average_points: f64,
}

/// A player's place in the standings. `position` is 1-based and belongs to
/// the ordering it was assigned in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRanking {
    pub player: PlayerSummary,
    pub points: TotalPoints,
    pub position: usize,
    pub key: String,
}

/// Round half up to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
