//! JSON summarize handler.

use axum::{extract::State, Json};

use compass_core::milestone_rows;

use crate::error::Result;
use crate::state::AppState;
use crate::types::{SummarizeRequest, SummarizeResponse};

/// POST /api/summarize - Extract a summary and its timeline rows.
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>> {
    let summary = state.extractor()?.extract(&req.text).await?;
    let timeline = milestone_rows(&summary.milestones)?;

    Ok(Json(SummarizeResponse { summary, timeline }))
}
