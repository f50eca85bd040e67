//! Project summary types.
//!
//! Entities carry no identifiers. They are addressed by their position in
//! the containing sequence and live only for one request/render cycle.

use serde::{Deserialize, Serialize};

/// A named project phase with a date range and a responsible owner.
///
/// Dates are kept as the text the model produced (`YYYY-MM-DD` is asked
/// for but not guaranteed). They are parsed only when a timeline is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Name of the milestone.
    pub name: String,
    /// Start date, expected as `YYYY-MM-DD`.
    pub start_date: String,
    /// End date, expected as `YYYY-MM-DD`.
    pub end_date: String,
    /// Person or team responsible.
    pub owner: String,
}

impl Milestone {
    /// Creates a new milestone.
    pub fn new(
        name: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            owner: owner.into(),
        }
    }
}

/// An identified project risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Risk {
    /// What could go wrong.
    pub description: String,
    /// Free-form severity, usually low/medium/high.
    pub severity: String,
    /// Plan to reduce the risk.
    pub mitigation: String,
}

impl Risk {
    /// Creates a new risk.
    pub fn new(
        description: impl Into<String>,
        severity: impl Into<String>,
        mitigation: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            severity: severity.into(),
            mitigation: mitigation.into(),
        }
    }
}

/// A key project decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Date the decision was made, expected as `YYYY-MM-DD`.
    pub date: String,
    /// What was decided.
    pub decision: String,
}

impl Decision {
    /// Creates a new decision.
    pub fn new(date: impl Into<String>, decision: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            decision: decision.into(),
        }
    }
}

/// Structured summary extracted from unstructured project notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Title of the project, if one could be found.
    #[serde(default)]
    pub project_title: Option<String>,

    /// Concise summary of the project goals.
    #[serde(default)]
    pub summary: Option<String>,

    /// Key milestones in stored order.
    #[serde(default)]
    pub milestones: Vec<Milestone>,

    /// Identified risks in stored order.
    #[serde(default)]
    pub risks: Vec<Risk>,

    /// Key decisions in stored order.
    #[serde(default)]
    pub decisions: Vec<Decision>,
}

impl ProjectSummary {
    /// Returns the JSON schema the model provider must conform to.
    pub fn response_schema() -> serde_json::Value {
        crate::schema::response_schema()
    }

    /// Returns true if nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.project_title.is_none()
            && self.summary.is_none()
            && self.milestones.is_empty()
            && self.risks.is_empty()
            && self.decisions.is_empty()
    }

    /// Sets the project title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.project_title = Some(title.into());
        self
    }

    /// Sets the summary text.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Appends a milestone.
    pub fn with_milestone(mut self, milestone: Milestone) -> Self {
        self.milestones.push(milestone);
        self
    }

    /// Appends a risk.
    pub fn with_risk(mut self, risk: Risk) -> Self {
        self.risks.push(risk);
        self
    }

    /// Appends a decision.
    pub fn with_decision(mut self, decision: Decision) -> Self {
        self.decisions.push(decision);
        self
    }
}
