pub mod key;
pub mod resolver;

pub use key::{PlayerKey, fallback_key, normalize};
pub use resolver::{DisplayIdentity, HeuristicResolver, PlayerGroups, PlayerResolver};
