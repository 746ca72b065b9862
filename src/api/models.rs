use serde::Serialize;
use std::collections::BTreeMap;

use crate::cache::DataVersion;
use crate::config::TailRule;
use crate::ranking::PlayerRanking;
use crate::statistics::{PointsStatistics, TournamentStatistics};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub items: Vec<PlayerRanking>,
    pub total: usize,
    pub total_tournaments: usize,
    pub versions: BTreeMap<String, DataVersion>,
    pub generated_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub points: PointsStatistics,
    pub overall: PointsStatistics,
    pub tournaments: TournamentStatistics,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResponse {
    pub points: BTreeMap<u32, u32>,
    pub tail: Option<TailRule>,
    pub max_points_per_tournament: u32,
}
