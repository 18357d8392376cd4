//! Route handlers.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer, de};
use serde_json::json;
use steamtop_core::{GamesQuery, GamesResponse};
use tracing::info;

use super::error::ApiError;
use super::state::AppState;

/// Query string of `GET /games`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GamesParams {
    /// How many top titles to fetch (1-100). Required.
    pub rows: u32,
    /// Fetch concurrently; defaults to true.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub parallel: Option<bool>,
    /// Maximum pages in flight (1-50); defaults to the configured value.
    pub concurrency: Option<u32>,
}

impl GamesParams {
    /// Fills in defaults.
    pub fn into_query(self, default_concurrency: u32) -> GamesQuery {
        let query = GamesQuery::new(self.rows)
            .with_concurrency(self.concurrency.unwrap_or(default_concurrency));
        if self.parallel.unwrap_or(true) {
            query
        } else {
            query.serial()
        }
    }
}

/// Reads a boolean written as `true`/`false`, `1`/`0`, `yes`/`no` or `on`/`off`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(de::Error::custom(format!(
            "parallel: expected a boolean, got `{raw}`"
        ))),
    }
}

/// GET / - Welcome document
pub async fn root() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the SteamTop API!",
        "description": "Fetches the most-played Steam titles of the last two weeks with storefront details.",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /games - Top titles with storefront details
pub async fn games(
    State(state): State<AppState>,
    params: Result<Query<GamesParams>, QueryRejection>,
) -> Result<Json<GamesResponse>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query(state.default_concurrency);
    query.validate()?;

    let response = state.pipeline.run_timed(&query).await?;
    info!(
        rows = response.rows,
        parallel = response.parallel,
        elapsed = response.elapsed,
        "Served games query"
    );
    Ok(Json(response))
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
