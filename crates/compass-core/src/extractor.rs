//! Extraction of a [`ProjectSummary`] from free-form notes.

use std::sync::Arc;

use compass_models::ProjectSummary;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::{GeminiClient, StructuredModel};
use crate::config::ProviderSettings;
use crate::error::{CompassError, Result};
use crate::prompt::build_prompt;

/// Runs prompt construction and the provider call for one request.
///
/// Each call to [`Extractor::extract`] is independent. The extractor holds
/// no per-request state and can be shared across handlers.
#[derive(Clone)]
pub struct Extractor {
    model: Arc<dyn StructuredModel>,
    schema: Arc<Value>,
}

impl Extractor {
    /// Creates an extractor backed by the given model.
    pub fn new(model: Arc<dyn StructuredModel>) -> Self {
        Self {
            model,
            schema: Arc::new(ProjectSummary::response_schema()),
        }
    }

    /// Creates an extractor backed by Gemini.
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self> {
        let client = GeminiClient::from_settings(settings)?;
        info!(model = %client.model(), "Extraction enabled");
        Ok(Self::new(Arc::new(client)))
    }

    /// Extracts a project summary from `text`.
    ///
    /// Empty text is rejected before any request is made. Otherwise exactly
    /// one provider call is issued; its result is re-validated against the
    /// summary type. Failures are not retried.
    pub async fn extract(&self, text: &str) -> Result<ProjectSummary> {
        if text.is_empty() {
            return Err(CompassError::EmptyInput);
        }

        let prompt = build_prompt(text);
        debug!(text_len = text.len(), "Extracting project summary");

        let value = match self.model.generate(&prompt, &self.schema).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Model provider call failed");
                return Err(e);
            }
        };

        let summary: ProjectSummary = serde_json::from_value(value).map_err(|e| {
            warn!(error = %e, "Provider output does not match schema");
            CompassError::SchemaMismatch(e.to_string())
        })?;

        info!(
            milestones = summary.milestones.len(),
            risks = summary.risks.len(),
            decisions = summary.decisions.len(),
            "Project summary extracted"
        );

        Ok(summary)
    }
}
