use colored::Colorize;
use std::fmt::Write;

use crate::services::standings::Standings;
use crate::statistics::PointsStatistics;

pub fn render_ranking(standings: &Standings, limit: Option<usize>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Player Ranking".bold().underline());
    if standings.ranking.is_empty() {
        let _ = writeln!(out, "{}", "No ranked players".dimmed());
        return out;
    }

    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:>4}  {:<28} {:<20} {:>6} {:>7} {:>5} {:>6}",
            "#", "Player", "Username", "Points", "Events", "Best", "Avg"
        )
        .dimmed()
    );

    for entry in standings.ranking.iter().take(limit.unwrap_or(usize::MAX)) {
        let player = &entry.player;
        let line = format!(
            "{:>4}  {:<28} {:<20} {:>6} {:>7} {:>5} {:>6}",
            entry.position,
            player.name,
            player.username,
            entry.points,
            format!("{}/{}", player.tournaments_participated, player.total_tournaments),
            player.best_rank.map(|r| r.to_string()).unwrap_or_else(|| "-".into()),
            player
                .average_rank
                .map(|r| format!("{r:.2}"))
                .unwrap_or_else(|| "-".into()),
        );

        let line = match entry.position {
            1 => line.yellow().bold(),
            2 | 3 => line.bold(),
            _ => line.normal(),
        };
        let _ = writeln!(out, "{line}");
    }

    out
}

pub fn render_tournaments(standings: &Standings) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Tournaments".bold().underline());
    if standings.tournaments.is_empty() {
        let _ = writeln!(out, "{}", "No tournament data".dimmed());
        return out;
    }

    for summary in &standings.tournaments {
        let _ = writeln!(
            out,
            "{} ({} entrants, {} placed)",
            summary.name.to_uppercase().cyan().bold(),
            summary.participants_count,
            summary.results.len()
        );
        for result in &summary.results {
            let _ = writeln!(
                out,
                "  {:>3}. {:<28} {:>3} pts",
                result.final_rank, result.participant_name, result.points_earned
            );
        }
        let _ = writeln!(out, "  {}", points_line(&summary.statistics).dimmed());
    }

    out
}

pub fn render_statistics(standings: &Standings) -> String {
    let mut out = String::new();
    let stats = &standings.tournament_statistics;

    let _ = writeln!(out, "{}", "Statistics".bold().underline());
    let _ = writeln!(out, "Tournaments held:        {}", stats.total_tournaments);
    let _ = writeln!(out, "Entrants (all events):   {}", stats.total_participants);
    let _ = writeln!(out, "Unique players:          {}", stats.unique_players);
    let _ = writeln!(
        out,
        "Avg entrants per event:  {:.2}",
        stats.average_participants_per_tournament
    );
    if !stats.most_active_player.is_empty() {
        let _ = writeln!(out, "Most active player:      {}", stats.most_active_player.green());
    }
    let _ = writeln!(out, "Ranking: {}", points_line(&standings.statistics));
    let _ = writeln!(out, "Results: {}", points_line(&standings.overall));
    for (name, version) in &standings.versions {
        let line = format!(
            "Data {}: version {} loaded {}",
            name,
            version.version,
            version.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out, "{}", line.dimmed());
    }

    out
}

fn points_line(stats: &PointsStatistics) -> String {
    format!(
        "{} players, {} with points, max {}, min {}, avg {:.2}, {} distributed",
        stats.total_players,
        stats.players_with_points,
        stats.max_points,
        stats.min_points,
        stats.average_points,
        stats.total_points_distributed
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{DataVersion, LoadedTournament, TournamentDataset, TournamentStore};
    use crate::config::settings::AppConfig;
    use crate::domain::RawParticipant;
    use crate::services::standings::StandingsService;

    fn standings() -> Standings {
        let participants = ["Asuka", "Emilie", "Panda"]
            .iter()
            .enumerate()
            .map(|(idx, name)| RawParticipant {
                name: Some(name.to_string()),
                final_rank: Some(idx as i64 + 1),
                ..Default::default()
            })
            .collect();
        let dataset = TournamentDataset {
            tournaments: vec![LoadedTournament {
                name: "one".to_string(),
                fallback_id: 1,
                participants,
            }],
        };

        StandingsService::new(AppConfig::new(), TournamentStore::new("unused"))
            .standings_from_dataset(&dataset)
    }

    #[test]
    fn test_ranking_lists_players_in_order() {
        let out = render_ranking(&standings(), None);

        let asuka = out.find("Asuka").unwrap();
        let emilie = out.find("Emilie").unwrap();
        let panda = out.find("Panda").unwrap();
        assert!(asuka < emilie && emilie < panda);
    }

    #[test]
    fn test_ranking_limit() {
        let out = render_ranking(&standings(), Some(1));

        assert!(out.contains("Asuka"));
        assert!(!out.contains("Panda"));
    }

    #[test]
    fn test_statistics_mention_most_active_player() {
        let out = render_statistics(&standings());

        assert!(out.contains("Asuka"));
        assert!(out.contains("29 distributed"));
    }

    #[test]
    fn test_statistics_list_data_versions() {
        let mut standings = standings();
        let loaded_at = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        standings.versions.insert(
            "one".to_string(),
            DataVersion {
                version: "1700000000000".to_string(),
                loaded_at,
            },
        );

        let out = render_statistics(&standings);

        assert!(out.contains("Data one: version 1700000000000 loaded 2023-11-14 22:13:20 UTC"));
    }

    #[test]
    fn test_tournaments_show_points() {
        let out = render_tournaments(&standings());

        assert!(out.contains("ONE"));
        assert!(out.contains("11 pts"));
    }
}
