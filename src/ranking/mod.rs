pub mod builder;
pub mod collation;
pub mod types;

pub use builder::{build_ranking, create_player_summary, sort_rankings};
pub use collation::compare_names;
pub use types::{PlayerRanking, PlayerSummary, round2};
