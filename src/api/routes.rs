use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    admin::refresh,
    standings::{get_ranking, get_scoring, get_statistics, get_tournaments, get_versions},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/ranking", get(get_ranking))
        .route("/api/statistics", get(get_statistics))
        .route("/api/tournaments", get(get_tournaments))
        .route("/api/scoring", get(get_scoring))
        .route("/api/versions", get(get_versions))
        .route("/api/refresh", post(refresh))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    use crate::config::AppConfig;
    use crate::services::standings::StandingsService;

    fn write_one(dir: &TempDir, names: &[&str]) {
        let records: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                serde_json::json!({"participant": {"name": name, "final_rank": idx + 1}})
            })
            .collect();
        fs::write(dir.path().join("one.json"), Value::Array(records).to_string()).unwrap();
    }

    fn state_for(dir: &TempDir) -> Arc<AppState> {
        let mut config = AppConfig::new();
        config.data.data_dir = dir.path().to_path_buf();
        config.data.tournaments = vec!["one".to_string()];
        Arc::new(AppState::new(StandingsService::from_config(config)))
    }

    async fn send(state: &Arc<AppState>, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = create_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_ranking_filter_and_limit() {
        let dir = TempDir::new().unwrap();
        write_one(&dir, &["Alex", "Boris", "Bobby"]);
        let state = state_for(&dir);

        let (status, body) = send(&state, "GET", "/api/ranking?filter=BO&limit=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["totalTournaments"], 1);
        let items = body["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["player"]["name"], "Boris");
        assert!(body["versions"]["one"]["version"].is_string());
    }

    #[tokio::test]
    async fn test_refresh_rereads_files() {
        let dir = TempDir::new().unwrap();
        write_one(&dir, &["Alex"]);
        let state = state_for(&dir);

        let (_, before) = send(&state, "GET", "/api/ranking").await;
        write_one(&dir, &["Alex", "Boris"]);
        let (_, cached) = send(&state, "GET", "/api/ranking").await;
        let (status, _) = send(&state, "POST", "/api/refresh").await;
        let (_, versions) = send(&state, "GET", "/api/versions").await;
        let (_, after) = send(&state, "GET", "/api/ranking").await;

        assert_eq!(before["total"], 1);
        assert_eq!(cached["total"], 1);
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(versions, serde_json::json!({}));
        assert_eq!(after["total"], 2);
    }
}
