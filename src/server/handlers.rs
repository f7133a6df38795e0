//! Request handlers

use super::error::ApiError;
use crate::search::Searcher;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Query string of `GET /search`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Search query, required and non-empty
    pub q: Option<String>,
    /// Maximum number of excerpts, unbounded when absent
    pub limit: Option<usize>,
}

impl SearchParams {
    /// Collect parameters from decoded query pairs
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ApiError> {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" if params.q.is_none() => params.q = Some(value),
                "limit" if params.limit.is_none() => {
                    let limit = value
                        .parse()
                        .map_err(|_| ApiError::InvalidLimit(value))?;
                    params.limit = Some(limit);
                }
                _ => {}
            }
        }
        Ok(params)
    }
}

/// `GET /search?q=...` - JSON array of HTML excerpts
pub async fn search(
    State(searcher): State<Arc<Searcher>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = SearchParams::from_pairs(pairs)?;
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(ApiError::MissingQuery)?;
    let limit = params.limit;

    // Lookup and rendering are CPU-bound
    let results =
        tokio::task::spawn_blocking(move || searcher.search_with_limit(&query, limit)).await?;

    let body = serde_json::to_vec(&results)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
