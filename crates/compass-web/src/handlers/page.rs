//! Page handlers.

use axum::{extract::State, response::Html, Form};
use tracing::info;

use compass_core::CompassError;

use crate::error::Result;
use crate::state::{AppState, Extraction};
use crate::types::SummarizeForm;
use crate::view::Outcome;

/// GET / - The page with an empty form.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let outcome = match &state.extraction {
        Extraction::Enabled(_) => Outcome::Idle,
        Extraction::Disabled(reason) => Outcome::Disabled(reason.clone()),
    };
    Ok(Html(state.pages.render("", &outcome)?))
}

/// POST / - Run the pipeline for the submitted notes and show the result.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SummarizeForm>,
) -> Result<Html<String>> {
    info!(notes_len = form.notes.len(), "Summary requested");

    let outcome = match state.summarize(&form.notes).await {
        Ok((_, view)) => Outcome::Summary(Box::new(view)),
        Err(CompassError::Configuration(reason)) => Outcome::Disabled(reason),
        Err(e @ CompassError::EmptyInput) => Outcome::Warning(e.user_message()),
        Err(e) => Outcome::Error(e.user_message()),
    };

    Ok(Html(state.pages.render(&form.notes, &outcome)?))
}
