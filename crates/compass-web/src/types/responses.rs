//! Response DTOs.

use serde::Serialize;

use compass_core::MilestoneRow;
use compass_models::ProjectSummary;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Whether a provider credential is configured.
    pub extraction_enabled: bool,
}

/// JSON summarize response.
#[derive(Debug, Clone, Serialize)]
pub struct SummarizeResponse {
    /// The extracted summary as returned by the model.
    pub summary: ProjectSummary,
    /// Milestones with parsed dates, in stored order.
    pub timeline: Vec<MilestoneRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_models::Milestone;

    #[test]
    fn test_summarize_response_serialization() {
        let summary = ProjectSummary::default()
            .with_milestone(Milestone::new("Design", "2024-01-01", "2024-02-01", "Alice"));
        let timeline = compass_core::milestone_rows(&summary.milestones).unwrap();

        let value = serde_json::to_value(SummarizeResponse { summary, timeline }).unwrap();

        assert_eq!(value["summary"]["project_title"], serde_json::Value::Null);
        assert_eq!(value["timeline"][0]["start"], "2024-01-01");
        assert_eq!(value["timeline"][0]["owner"], "Alice");
    }
}
