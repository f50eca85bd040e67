//! Presentation of project summaries.
//!
//! A [`SummaryView`] is built completely before anything is rendered, so
//! a failure while preparing the timeline never leaves partial output.

pub mod chart;
pub mod page;

use serde::Serialize;

use compass_core::{milestone_rows, Result};
use compass_models::{Decision, ProjectSummary, Risk};

pub use chart::Timeline;
pub use page::{Outcome, PageRenderer};

/// Placeholder shown when no title was extracted.
pub const NO_TITLE: &str = "No Title Found";

/// Placeholder shown when no summary was extracted.
pub const NO_SUMMARY: &str = "No summary found.";

/// Notice shown instead of the chart when there are no milestones.
pub const NO_MILESTONES: &str = "No milestones found in the project data to create a timeline.";

/// Labelled lines for one risk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskBlock {
    pub description: String,
    pub severity: String,
    pub mitigation: String,
}

impl From<&Risk> for RiskBlock {
    fn from(risk: &Risk) -> Self {
        Self {
            description: risk.description.clone(),
            severity: risk.severity.clone(),
            mitigation: risk.mitigation.clone(),
        }
    }
}

/// Labelled lines for one decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionBlock {
    pub date: String,
    pub decision: String,
}

impl From<&Decision> for DecisionBlock {
    fn from(decision: &Decision) -> Self {
        Self {
            date: decision.date.clone(),
            decision: decision.decision.clone(),
        }
    }
}

/// Everything the page shows for one extracted summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    /// Title, or [`NO_TITLE`].
    pub title: String,
    /// Summary text, or [`NO_SUMMARY`].
    pub summary: String,
    /// One block per risk, in stored order.
    pub risks: Vec<RiskBlock>,
    /// One block per decision, in stored order.
    pub decisions: Vec<DecisionBlock>,
    /// Timeline chart when there are milestones.
    pub timeline: Option<Timeline>,
    /// [`NO_MILESTONES`] when there are none.
    pub milestones_notice: Option<String>,
}

impl SummaryView {
    /// Builds the view for `summary`.
    ///
    /// Fails if any milestone date is not a valid `YYYY-MM-DD` date.
    pub fn build(summary: &ProjectSummary) -> Result<Self> {
        let (timeline, milestones_notice) = if summary.milestones.is_empty() {
            (None, Some(NO_MILESTONES.to_string()))
        } else {
            let rows = milestone_rows(&summary.milestones)?;
            (Timeline::layout(&rows), None)
        };

        Ok(Self {
            title: summary
                .project_title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| NO_TITLE.to_string()),
            summary: summary
                .summary
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
            risks: summary.risks.iter().map(RiskBlock::from).collect(),
            decisions: summary.decisions.iter().map(DecisionBlock::from).collect(),
            timeline,
            milestones_notice,
        })
    }
}
