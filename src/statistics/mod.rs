pub mod points;
pub mod tournaments;

pub use points::{PointsStatistics, overall_statistics, result_statistics, statistics};
pub use tournaments::{
    TournamentStatistics, TournamentSummary, tournament_statistics, tournament_summary,
};
