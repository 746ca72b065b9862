use serde::Deserialize;
use std::sync::{Mutex, MutexGuard};

use crate::services::standings::StandingsService;

pub mod admin;
pub mod standings;

pub struct AppState {
    pub service: Mutex<StandingsService>,
}

impl AppState {
    pub fn new(service: StandingsService) -> Self {
        Self {
            service: Mutex::new(service),
        }
    }

    /// Recovers the guard if an earlier request panicked while holding it.
    pub fn service(&self) -> MutexGuard<'_, StandingsService> {
        self.service
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Deserialize)]
pub struct RankingParams {
    pub limit: Option<usize>,
    pub filter: Option<String>,
}
