use serde::{Deserialize, Serialize};

use crate::domain::TournamentResult;
use crate::ranking::{PlayerRanking, round2};
use crate::scoring::TotalPoints;

/// Summary of how points are spread over a ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointsStatistics {
    pub total_players: usize,
    pub players_with_points: usize,
    pub max_points: TotalPoints,
    pub min_points: TotalPoints,
    pub average_points: f64,
    pub total_points_distributed: TotalPoints,
}

pub fn statistics(ranking: &[PlayerRanking]) -> PointsStatistics {
    summarize_points(ranking.iter().map(|r| r.points))
}

/// Statistics over individual results, each counted as its own entry.
pub fn result_statistics(results: &[TournamentResult]) -> PointsStatistics {
    summarize_points(results.iter().map(|r| TotalPoints::from(r.points_earned)))
}

/// Statistics over every result of the dataset, with the player counts taken
/// from the resolved ranking so a player counts once.
pub fn overall_statistics(
    results: &[TournamentResult],
    ranking: &[PlayerRanking],
) -> PointsStatistics {
    let mut overall = result_statistics(results);
    overall.total_players = ranking.len();
    overall.players_with_points = count_with_points(ranking.iter().map(|r| r.points));
    overall
}

fn summarize_points(points: impl Iterator<Item = TotalPoints> + Clone) -> PointsStatistics {
    let total_players = points.clone().count();
    if total_players == 0 {
        return PointsStatistics::default();
    }

    let total: TotalPoints = points.clone().sum();

    PointsStatistics {
        total_players,
        players_with_points: count_with_points(points.clone()),
        max_points: points.clone().max().unwrap_or(0),
        min_points: points.min().unwrap_or(0),
        average_points: round2(total as f64 / total_players as f64),
        total_points_distributed: total,
    }
}

fn count_with_points(points: impl Iterator<Item = TotalPoints>) -> usize {
    points.filter(|p| *p > 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::HeuristicResolver;
    use crate::ranking::build_ranking;
    use crate::scoring::Points;

    fn ranking_of(points: &[(&str, Points)]) -> Vec<PlayerRanking> {
        let results: Vec<TournamentResult> = points
            .iter()
            .enumerate()
            .map(|(idx, (name, p))| TournamentResult::new(1, idx as u32 + 1, *p, name))
            .collect();
        build_ranking(&results, 1, &HeuristicResolver::default())
    }

    #[test]
    fn test_empty_ranking_is_all_zero() {
        assert_eq!(statistics(&[]), PointsStatistics::default());
    }

    #[test]
    fn test_statistics_over_ranking() {
        let ranking = ranking_of(&[("Kunimitsu", 11), ("Yoshimitsu", 10), ("Bob", 0)]);

        let stats = statistics(&ranking);

        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.players_with_points, 2);
        assert_eq!(stats.max_points, 11);
        assert_eq!(stats.min_points, 0);
        assert_eq!(stats.average_points, 7.0);
        assert_eq!(stats.total_points_distributed, 21);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let ranking = ranking_of(&[
            ("Ganryu", 1),
            ("Marduk", 0),
            ("Roger", 0),
            ("Alex", 0),
            ("Kuma", 0),
            ("Jack", 0),
            ("Wang", 0),
            ("Lei", 0),
        ]);

        // 1 / 8 = 0.125
        assert_eq!(statistics(&ranking).average_points, 0.13);
    }

    #[test]
    fn test_distributed_total_matches_player_points() {
        let ranking = ranking_of(&[("Eliza", 8), ("Miguel", 7), ("Leroy", 6), ("Fahkumram", 2)]);
        let sum: TotalPoints = ranking.iter().map(|r| r.player.total_points).sum();

        assert_eq!(statistics(&ranking).total_points_distributed, sum);
    }

    #[test]
    fn test_overall_counts_unique_players() {
        let results = vec![
            TournamentResult::new(1, 1, 11, "Lidia"),
            TournamentResult::new(2, 1, 11, "Lidia"),
            TournamentResult::new(2, 9, 0, "Shaheen"),
        ];
        let ranking = build_ranking(&results, 2, &HeuristicResolver::default());

        let overall = overall_statistics(&results, &ranking);

        assert_eq!(overall.total_players, 2);
        assert_eq!(overall.players_with_points, 1);
        assert_eq!(overall.max_points, 11);
        assert_eq!(overall.total_points_distributed, 22);
        assert_eq!(overall.average_points, 7.33);
    }

    #[test]
    fn test_large_totals_do_not_overflow() {
        let results = vec![
            TournamentResult::new(1, 1, u32::MAX, "Kazuya"),
            TournamentResult::new(2, 1, u32::MAX, "Jun"),
        ];

        let stats = result_statistics(&results);

        assert_eq!(stats.total_points_distributed, 2 * u64::from(u32::MAX));
        assert_eq!(stats.max_points, u64::from(u32::MAX));
    }
}
