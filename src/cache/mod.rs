pub mod store;

pub use store::{DataVersion, LoadedTournament, TournamentDataset, TournamentStore};
