//! API routes for lexid.

use crate::dictionary::DictionaryError;
use crate::normalize::{normalize, DefinitionResult, NormalizeError};
use crate::server::AppState;
use crate::store::WordEntry;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

type AppStateArc = Arc<AppState>;

/// JSON error body shared by every failure response.
///
/// `details` is only present on upstream-failure responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            details: None,
        }
    }

    fn with_details(error: &str, details: String) -> Self {
        Self {
            error: error.to_string(),
            details: Some(details),
        }
    }
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(health_check))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Dictionary API is up".to_string(),
    })
}

// ============================================================================
// Word List Routes
// ============================================================================

pub fn word_routes() -> Router<AppStateArc> {
    Router::new().route("/words", get(list_words))
}

async fn list_words(State(state): State<AppStateArc>) -> Json<Vec<WordEntry>> {
    Json(state.store.entries().to_vec())
}

// ============================================================================
// Define Routes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DefineParams {
    pub word: Option<String>,
}

pub fn define_routes() -> Router<AppStateArc> {
    Router::new().route("/define", get(define))
}

/// Look up a word upstream and return the normalized definition.
///
/// The two not-found messages below are distinct on purpose: one covers a
/// payload with no entry at all, the other an entry with no usable
/// definition text. Callers see both as 404 but may match on the strings.
async fn define(
    State(state): State<AppStateArc>,
    Query(params): Query<DefineParams>,
) -> Result<Json<DefinitionResult>, (StatusCode, Json<ErrorBody>)> {
    let word = params.word.as_deref().unwrap_or("").trim();
    if word.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Please provide ?word=your_word")),
        ));
    }

    let payload = state.dictionary.lookup(word).await.map_err(|e| match e {
        DictionaryError::WordNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Word not found")),
        ),
        other => {
            error!("Define route error: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::with_details(
                    "Failed to fetch definition",
                    other.to_string(),
                )),
            )
        }
    })?;

    match normalize(&payload, word) {
        Ok(result) => Ok(Json(result)),
        Err(NormalizeError::NoEntry) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("No definition found")),
        )),
        Err(NormalizeError::NoDefinition) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Definition not found for this word")),
        )),
    }
}
