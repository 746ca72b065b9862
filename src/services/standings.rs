use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::cache::{DataVersion, TournamentDataset, TournamentStore};
use crate::config::settings::AppConfig;
use crate::domain::{self, TournamentResult};
use crate::identity::HeuristicResolver;
use crate::ranking::{self, PlayerRanking};
use crate::scoring::ScoringTable;
use crate::statistics::{self, PointsStatistics, TournamentStatistics, TournamentSummary};

/// Read-only snapshot handed to the report and the API
#[derive(Debug, Clone, Serialize)]
pub struct Standings {
    pub ranking: Vec<PlayerRanking>,
    pub statistics: PointsStatistics,
    pub overall: PointsStatistics,
    pub tournaments: Vec<TournamentSummary>,
    pub tournament_statistics: TournamentStatistics,
    /// Cache version of each tournament the standings were built from
    pub versions: BTreeMap<String, DataVersion>,
    pub generated_at: DateTime<Utc>,
}

pub struct StandingsService {
    config: AppConfig,
    table: ScoringTable,
    resolver: HeuristicResolver,
    store: TournamentStore,
}

impl StandingsService {
    pub fn new(config: AppConfig, store: TournamentStore) -> Self {
        Self {
            table: ScoringTable::from_settings(&config.scoring),
            resolver: HeuristicResolver::new(&config.overrides),
            config,
            store,
        }
    }

    pub fn from_config(config: AppConfig) -> Self {
        let store = TournamentStore::new(&config.data.data_dir);
        Self::new(config, store)
    }

    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    /// Versions of the configured tournaments currently held in the cache
    pub fn versions(&self) -> BTreeMap<String, DataVersion> {
        self.config
            .data
            .tournaments
            .iter()
            .filter_map(|name| {
                let version = self.store.version_info(name)?;
                Some((name.clone(), version.clone()))
            })
            .collect()
    }

    pub fn clear_cache(&mut self) {
        self.store.clear_cache();
    }

    pub fn compute(&mut self, force_refresh: bool) -> Standings {
        info!("=== Computing Standings ===");

        // Step 1: Load tournaments
        let dataset = self
            .store
            .load_dataset(&self.config.data.tournaments, force_refresh);
        info!("  → {} tournaments available", dataset.len());

        // Step 2: Score, rank and summarize
        let standings = self.standings_from_dataset(&dataset);
        info!(
            "  → {} players ranked, {} points distributed",
            standings.ranking.len(),
            standings.statistics.total_points_distributed
        );

        standings
    }

    pub fn standings_from_dataset(&self, dataset: &TournamentDataset) -> Standings {
        let mut summaries = Vec::with_capacity(dataset.len());
        let mut all_results: Vec<TournamentResult> = Vec::new();

        for tournament in &dataset.tournaments {
            let results = domain::extract_results(
                tournament.fallback_id,
                &tournament.participants,
                &self.table,
            );
            all_results.extend(results.iter().cloned());
            summaries.push(statistics::tournament_summary(
                &tournament.name,
                tournament.participants.len(),
                results,
            ));
        }

        let ranking = ranking::build_ranking(&all_results, dataset.len(), &self.resolver);
        let versions = dataset
            .tournaments
            .iter()
            .filter_map(|t| {
                let version = self.store.version_info(&t.name)?;
                Some((t.name.clone(), version.clone()))
            })
            .collect();

        Standings {
            statistics: statistics::statistics(&ranking),
            overall: statistics::overall_statistics(&all_results, &ranking),
            tournament_statistics: statistics::tournament_statistics(&summaries, &ranking),
            tournaments: summaries,
            ranking,
            versions,
            generated_at: Utc::now(),
        }
    }
}
