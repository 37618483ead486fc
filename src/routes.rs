use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::AppState;
use crate::translator::{query_llm_robust, QueryResult};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(translate))
        .route("/api/health", get(health_check))
}

#[derive(Debug, Deserialize)]
struct TranslateParams {
    #[serde(default)]
    content: String,
}

/// The orchestrator absorbs every oracle failure, so this handler always
/// answers 200 with a well-formed body.
async fn translate(
    State(state): State<AppState>,
    Query(params): Query<TranslateParams>,
) -> Json<QueryResult> {
    let result = query_llm_robust(state.oracle.as_ref(), &params.content).await;
    Json(result)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.config.llm_config.model_name,
    }))
}
