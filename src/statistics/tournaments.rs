use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::points::{PointsStatistics, result_statistics};
use crate::domain::TournamentResult;
use crate::ranking::{PlayerRanking, round2};

/// One tournament as shown on its own card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub name: String,
    pub tournament_id: Option<i64>,
    pub participants_count: usize,
    pub results: Vec<TournamentResult>,
    pub statistics: PointsStatistics,
}

/// Dataset-wide participation figures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentStatistics {
    pub total_tournaments: usize,
    pub total_participants: usize,
    pub unique_players: usize,
    pub most_active_player: String,
    pub average_participants_per_tournament: f64,
}

/// `participants_count` counts every entrant, placed or not.
pub fn tournament_summary(
    name: &str,
    participants_count: usize,
    mut results: Vec<TournamentResult>,
) -> TournamentSummary {
    results.sort_by(|a, b| a.final_rank.cmp(&b.final_rank));

    TournamentSummary {
        name: name.to_string(),
        tournament_id: results.first().map(|r| r.tournament_id),
        participants_count,
        statistics: result_statistics(&results),
        results,
    }
}

pub fn tournament_statistics(
    summaries: &[TournamentSummary],
    ranking: &[PlayerRanking],
) -> TournamentStatistics {
    let total_tournaments = summaries.len();
    let total_participants: usize = summaries.iter().map(|s| s.participants_count).sum();

    let average_participants_per_tournament = if total_tournaments == 0 {
        0.0
    } else {
        round2(total_participants as f64 / total_tournaments as f64)
    };

    TournamentStatistics {
        total_tournaments,
        total_participants,
        unique_players: ranking.len(),
        most_active_player: most_active_player(ranking),
        average_participants_per_tournament,
    }
}

/// Most participations; the better-placed player wins a tie.
fn most_active_player(ranking: &[PlayerRanking]) -> String {
    ranking
        .iter()
        .min_by_key(|r| (Reverse(r.player.tournaments_participated), r.position))
        .map(|r| r.player.name.clone())
        .unwrap_or_default()
}
