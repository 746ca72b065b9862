pub mod extraction;
pub mod models;

pub use extraction::{extract_participant, extract_results};
pub use models::*;
