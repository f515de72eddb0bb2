use super::finder::PerfectNumberFinder;
use super::types::{PerfectMethod, PerfectNumbersResponse, PerfectParams, parse_how_many};
use crate::error::AppResult;

use axum::Json;
use axum::extract::Query;
use std::time::Instant;

pub async fn handle_perfect_numbers(
    Query(params): Query<PerfectParams>,
) -> AppResult<Json<PerfectNumbersResponse>> {
    let how_many = parse_how_many(params.how_many.as_deref())?;
    let method: PerfectMethod = match params.method.as_deref() {
        Some(raw) => raw.parse()?,
        None => PerfectMethod::default(),
    };

    let finder = PerfectNumberFinder::new(method);
    let started = Instant::now();

    // The naive search is CPU-bound; keep it off the async workers.
    let perfect_numbers = tokio::task::spawn_blocking(move || finder.find(how_many)).await??;

    tracing::info!(
        "Found {} perfect numbers ({:?}) in {:?}",
        perfect_numbers.len(),
        method,
        started.elapsed()
    );

    Ok(Json(PerfectNumbersResponse { perfect_numbers }))
}
