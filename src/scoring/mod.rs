pub mod table;

pub use table::{Placement, Points, ScoringTable, TotalPoints};
