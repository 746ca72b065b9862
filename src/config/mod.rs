pub mod overrides;
pub mod settings;

pub use overrides::IdentityOverride;
pub use settings::{AppConfig, DataSettings, PointsRange, ScoringSettings, TailRule};
