use log::{debug, warn};

use crate::domain::models::{RawParticipant, TournamentResult};
use crate::errors::RecordError;
use crate::scoring::ScoringTable;

/// Convert one tournament's entrants into scored results.
///
/// Entrants without a final placement are dropped silently; records with no
/// identity at all are logged and skipped. Entrants are not merged here, even
/// if the same person registered twice.
pub fn extract_results(
    tournament_id: i64,
    participants: &[RawParticipant],
    table: &ScoringTable,
) -> Vec<TournamentResult> {
    let mut results = Vec::with_capacity(participants.len());
    let mut unranked = 0;

    for participant in participants {
        match extract_participant(tournament_id, participant, table) {
            Ok(Some(result)) => results.push(result),
            Ok(None) => unranked += 1,
            Err(e) => warn!("Tournament {}: skipping record: {}", tournament_id, e),
        }
    }

    debug!(
        "Tournament {}: {} ranked results, {} unranked entrants",
        tournament_id,
        results.len(),
        unranked
    );
    results
}

/// `Ok(None)` means the entrant finished without a placement.
pub fn extract_participant(
    fallback_tournament_id: i64,
    participant: &RawParticipant,
    table: &ScoringTable,
) -> Result<Option<TournamentResult>, RecordError> {
    let Some(final_rank) = participant.placement() else {
        return Ok(None);
    };

    if !participant.has_identity() {
        return Err(RecordError::MissingIdentity {
            record_id: participant.id,
        });
    }

    Ok(Some(build_result(
        fallback_tournament_id,
        final_rank,
        participant,
        table,
    )))
}

fn build_result(
    fallback_tournament_id: i64,
    final_rank: u32,
    participant: &RawParticipant,
    table: &ScoringTable,
) -> TournamentResult {
    TournamentResult {
        tournament_id: participant.tournament_id.unwrap_or(fallback_tournament_id),
        final_rank,
        points_earned: table.points_for(i64::from(final_rank)),
        participant_name: participant.display_name().unwrap_or_default().to_string(),
        challonge_username: participant.handle().unwrap_or_default().to_string(),
        challonge_user_id: participant.user_id(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn entrant(name: &str, rank: Option<i64>) -> RawParticipant {
        RawParticipant {
            tournament_id: Some(1),
            name: Some(name.to_string()),
            final_rank: rank,
            ..Default::default()
        }
    }

    fn sparse_table() -> ScoringTable {
        ScoringTable::new(
            BTreeMap::from([(1, 11), (2, 10), (3, 8), (4, 7), (5, 6), (7, 5)]),
            None,
        )
    }

    #[test]
    fn test_points_follow_the_table() {
        let participants: Vec<RawParticipant> = (1..=7)
            .map(|rank| entrant(&format!("player{rank}"), Some(rank)))
            .collect();

        let results = extract_results(1, &participants, &sparse_table());
        let points: Vec<u32> = results.iter().map(|r| r.points_earned).collect();

        assert_eq!(points, vec![11, 10, 8, 7, 6, 0, 5]);
    }

    #[test]
    fn test_only_unranked_entrants_yield_nothing() {
        let participants = vec![
            entrant("Paul", None),
            entrant("Law", Some(0)),
            entrant("King", Some(-1)),
        ];

        assert!(extract_results(1, &participants, &sparse_table()).is_empty());
    }

    #[test]
    fn test_record_without_identity_is_skipped() {
        let nameless = RawParticipant {
            id: Some(9),
            final_rank: Some(1),
            ..Default::default()
        };
        let participants = vec![nameless.clone(), entrant("Nina", Some(2))];

        let results = extract_results(1, &participants, &sparse_table());

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].participant_name, "Nina");
        assert_eq!(
            extract_participant(1, &nameless, &sparse_table()),
            Err(RecordError::MissingIdentity { record_id: Some(9) })
        );
    }

    #[test]
    fn test_numeric_identity_alone_is_enough() {
        let participant = RawParticipant {
            challonge_user_id: Some(42),
            final_rank: Some(3),
            ..Default::default()
        };

        let result = extract_participant(5, &participant, &sparse_table())
            .unwrap()
            .unwrap();

        assert_eq!(result.tournament_id, 5);
        assert_eq!(result.challonge_user_id, 42);
        assert_eq!(result.participant_name, "");
        assert_eq!(result.points_earned, 8);
    }

    #[test]
    fn test_duplicates_within_a_tournament_are_kept() {
        let participants = vec![entrant("Asuka", Some(1)), entrant("Asuka", Some(4))];

        assert_eq!(extract_results(1, &participants, &sparse_table()).len(), 2);
    }
}
