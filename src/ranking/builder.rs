use log::info;
use std::cmp::Ordering;

use super::collation::compare_names;
use super::types::{PlayerRanking, PlayerSummary, round2};
use crate::domain::TournamentResult;
use crate::identity::{DisplayIdentity, PlayerKey, PlayerResolver};
use crate::scoring::TotalPoints;

/// Build the standings: group results per player, aggregate, sort by points
/// (name breaks ties) and number the positions from 1.
pub fn build_ranking(
    results: &[TournamentResult],
    total_tournaments: usize,
    resolver: &dyn PlayerResolver,
) -> Vec<PlayerRanking> {
    let groups = resolver.group_by_player(results);

    let mut rankings: Vec<PlayerRanking> = groups
        .iter()
        .map(|(key, group)| {
            let identity = resolver.display_identity(key, group);
            let player = create_player_summary(key, identity, group, total_tournaments);
            PlayerRanking {
                points: player.total_points,
                player,
                position: 0,
                key: key.to_string(),
            }
        })
        .collect();

    sort_rankings(&mut rankings);

    info!(
        "Ranked {} players from {} results across {} tournaments",
        rankings.len(),
        results.len(),
        total_tournaments
    );
    rankings
}

/// Sort by points descending, then by name, and renumber positions.
pub fn sort_rankings(rankings: &mut [PlayerRanking]) {
    rankings.sort_by(compare_rankings);
    assign_positions(rankings);
}

pub fn assign_positions(rankings: &mut [PlayerRanking]) {
    for (idx, ranking) in rankings.iter_mut().enumerate() {
        ranking.position = idx + 1;
    }
}

fn compare_rankings(a: &PlayerRanking, b: &PlayerRanking) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| compare_names(&a.player.name, &b.player.name))
        .then_with(|| compare_names(&a.player.username, &b.player.username))
        .then_with(|| a.key.cmp(&b.key))
}

pub fn create_player_summary(
    key: &PlayerKey,
    identity: DisplayIdentity,
    results: &[TournamentResult],
    total_tournaments: usize,
) -> PlayerSummary {
    let ranks: Vec<u32> = results
        .iter()
        .map(|r| r.final_rank)
        .filter(|rank| *rank > 0)
        .collect();
    let total_points: TotalPoints = results
        .iter()
        .map(|r| TotalPoints::from(r.points_earned))
        .sum();

    PlayerSummary {
        name: identity.name,
        username: identity.username,
        challonge_user_id: group_user_id(key, results),
        tournaments_participated: results.len(),
        best_rank: ranks.iter().min().copied(),
        worst_rank: ranks.iter().max().copied(),
        average_rank: average(ranks.iter().map(|rank| f64::from(*rank)), ranks.len()),
        total_tournaments,
        participation_rate: participation_rate(results.len(), total_tournaments),
        total_points,
        average_points: average_points(total_points, results.len()),
    }
}

fn average(values: impl Iterator<Item = f64>, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    let sum: f64 = values.sum();
    Some(round2(sum / count as f64))
}

fn average_points(total_points: TotalPoints, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round2(total_points as f64 / count as f64)
}

fn participation_rate(participated: usize, total_tournaments: usize) -> f64 {
    if total_tournaments == 0 {
        return 0.0;
    }
    round2(participated as f64 / total_tournaments as f64)
}

fn group_user_id(key: &PlayerKey, results: &[TournamentResult]) -> u64 {
    match key {
        PlayerKey::UserId(id) => *id,
        _ => results
            .iter()
            .map(|r| r.challonge_user_id)
            .filter(|id| *id > 0)
            .min()
            .unwrap_or(0),
    }
}
