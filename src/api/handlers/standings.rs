use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{AppState, RankingParams};
use crate::api::models::{RankingResponse, ScoringResponse, StatisticsResponse};
use crate::identity::normalize;

pub async fn get_ranking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RankingParams>,
) -> impl IntoResponse {
    let standings = state.service().compute(false);
    let total = standings.ranking.len();
    let filter = params.filter.as_deref().map(normalize).filter(|f| !f.is_empty());

    let items = standings
        .ranking
        .into_iter()
        .filter(|r| match &filter {
            Some(f) => {
                normalize(&r.player.name).contains(f.as_str())
                    || normalize(&r.player.username).contains(f.as_str())
            }
            None => true,
        })
        .take(params.limit.unwrap_or(usize::MAX))
        .collect();

    Json(RankingResponse {
        items,
        total,
        total_tournaments: standings.tournament_statistics.total_tournaments,
        versions: standings.versions,
        generated_at: standings.generated_at.to_rfc3339(),
    })
}

pub async fn get_statistics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let standings = state.service().compute(false);

    Json(StatisticsResponse {
        points: standings.statistics,
        overall: standings.overall,
        tournaments: standings.tournament_statistics,
    })
}

pub async fn get_tournaments(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let standings = state.service().compute(false);
    Json(standings.tournaments)
}

/// Versions of the tournaments currently cached, without loading anything
pub async fn get_versions(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.service().versions())
}

pub async fn get_scoring(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = state.service();
    let table = service.table();

    Json(ScoringResponse {
        points: table.entries().clone(),
        tail: table.tail(),
        max_points_per_tournament: table.max_points_per_tournament(),
    })
}
