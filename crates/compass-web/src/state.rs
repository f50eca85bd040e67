//! Application state shared across handlers.

use std::sync::Arc;

use handlebars::TemplateError;
use tracing::warn;

use compass_core::{CompassError, Extractor, ProviderSettings, Result};
use compass_models::ProjectSummary;

use crate::config::WebConfig;
use crate::view::{PageRenderer, SummaryView};

/// Whether extraction is available for this session.
#[derive(Clone)]
pub enum Extraction {
    /// A credential is configured.
    Enabled(Extractor),
    /// No credential; the message explains why.
    Disabled(String),
}

/// Application state shared across all handlers.
///
/// Nothing here changes after startup; each request runs independently.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<WebConfig>,
    /// Extraction availability, decided once at startup.
    pub extraction: Extraction,
    /// Page renderer.
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    /// Creates state from provider settings read at startup.
    ///
    /// A missing credential disables extraction for the whole session.
    /// Fails only if the page template does not compile.
    pub fn new(
        config: WebConfig,
        settings: &ProviderSettings,
    ) -> std::result::Result<Self, TemplateError> {
        let extraction = match Extractor::from_settings(settings) {
            Ok(extractor) => Extraction::Enabled(extractor),
            Err(e) => {
                warn!(error = %e, "Extraction disabled");
                Extraction::Disabled(e.user_message())
            }
        };
        Self::with_extraction(config, extraction)
    }

    /// Creates state with an explicit extractor.
    pub fn with_extractor(
        config: WebConfig,
        extractor: Extractor,
    ) -> std::result::Result<Self, TemplateError> {
        Self::with_extraction(config, Extraction::Enabled(extractor))
    }

    fn with_extraction(
        config: WebConfig,
        extraction: Extraction,
    ) -> std::result::Result<Self, TemplateError> {
        Ok(Self {
            config: Arc::new(config),
            extraction,
            pages: Arc::new(PageRenderer::new()?),
        })
    }

    /// Returns true if extraction is available.
    pub fn is_enabled(&self) -> bool {
        matches!(self.extraction, Extraction::Enabled(_))
    }

    /// Returns the extractor or the configuration error.
    pub fn extractor(&self) -> Result<&Extractor> {
        match &self.extraction {
            Extraction::Enabled(extractor) => Ok(extractor),
            Extraction::Disabled(reason) => Err(CompassError::Configuration(reason.clone())),
        }
    }

    /// Runs the full pipeline for one trigger: extract, then build the view.
    pub async fn summarize(&self, text: &str) -> Result<(ProjectSummary, SummaryView)> {
        let extractor = self.extractor()?;
        let summary = extractor.extract(text).await?;
        let view = SummaryView::build(&summary).inspect_err(|e| {
            warn!(error = %e, "Failed to prepare summary view");
        })?;
        Ok((summary, view))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeModel;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_credential_disables_extraction() {
        let state = AppState::new(WebConfig::default(), &ProviderSettings::default()).unwrap();
        assert!(!state.is_enabled());

        let err = state.summarize("notes").await.unwrap_err();
        assert!(matches!(err, CompassError::Configuration(_)));
        assert!(err.user_message().contains("GOOGLE_API_KEY"));
    }

    #[test]
    fn test_configured_credential_enables_extraction() {
        let settings = ProviderSettings::with_api_key("k");
        let state = AppState::new(WebConfig::default(), &settings).unwrap();
        assert!(state.is_enabled());
    }

    #[tokio::test]
    async fn test_summarize_builds_view() {
        let model = FakeModel::replying(json!({
            "project_title": "Apollo",
            "milestones": [{"name": "Design", "start_date": "2024-01-01", "end_date": "2024-02-01", "owner": "Alice"}]
        }));
        let state =
            AppState::with_extractor(WebConfig::default(), Extractor::new(model.clone())).unwrap();

        let (summary, view) = state.summarize("notes").await.unwrap();

        assert_eq!(summary.project_title.as_deref(), Some("Apollo"));
        assert_eq!(view.timeline.unwrap().bars.len(), 1);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_summarize_fails_on_bad_milestone_date() {
        let model = FakeModel::replying(json!({
            "milestones": [{"name": "Design", "start_date": "not-a-date", "end_date": "2024-02-01", "owner": "Alice"}]
        }));
        let state = AppState::with_extractor(WebConfig::default(), Extractor::new(model)).unwrap();

        let err = state.summarize("notes").await.unwrap_err();
        assert!(matches!(err, CompassError::InvalidDate { .. }));
        assert!(err.user_message().starts_with("An unexpected error occurred:"));
    }
}
