use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::import::CandidateImporter;
use super::profile::CampaignProfile;
use super::weights::{WeightSet, WeightTable};
use super::MatchingEngine;

/// Shortlist request body. `weights` overrides the engine's table for this call only.
#[derive(Debug, Deserialize)]
pub struct ShortlistRequest {
    pub profile: CampaignProfile,
    #[serde(default)]
    pub candidates: Vec<Value>,
    pub required_count: usize,
    #[serde(default)]
    pub weights: Option<WeightTable>,
}

/// Router builder exposing the shortlist and weight inspection endpoints.
pub fn matching_router(engine: Arc<MatchingEngine>) -> Router {
    Router::new()
        .route("/api/v1/matching/shortlist", post(shortlist_handler))
        .route("/api/v1/matching/weights", get(weights_handler))
        .with_state(engine)
}

pub(crate) async fn shortlist_handler(
    State(engine): State<Arc<MatchingEngine>>,
    Json(request): Json<ShortlistRequest>,
) -> Response {
    if let Err(error) = engine.validate_required_count(request.required_count) {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    let candidates = CandidateImporter::from_values(request.candidates);
    let shortlist = match request.weights {
        Some(weights) => {
            let engine = MatchingEngine::new(weights);
            engine.shortlist(&request.profile, &candidates, request.required_count)
        }
        None => engine.shortlist(&request.profile, &candidates, request.required_count),
    };

    (StatusCode::OK, Json(shortlist)).into_response()
}

pub(crate) async fn weights_handler(State(engine): State<Arc<MatchingEngine>>) -> Response {
    let payload = json!({
        "default": WeightSet::DEFAULT,
        "campaign_types": engine.weights(),
        "max_required_count": engine.max_required_count(),
    });
    (StatusCode::OK, Json(payload)).into_response()
}

