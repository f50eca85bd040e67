//! Structured-output schema for [`ProjectSummary`](crate::ProjectSummary).
//!
//! The document uses the OpenAPI schema subset accepted by Gemini's
//! `responseSchema` field: upper-case type names, `nullable` instead of
//! type unions, and no `$ref`.

use serde_json::{json, Value};

fn string_field(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn milestone_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": string_field("The name of the project milestone."),
            "start_date": string_field("The start date of the milestone in YYYY-MM-DD format."),
            "end_date": string_field("The end date of the milestone in YYYY-MM-DD format."),
            "owner": string_field("The name of the person or team responsible for the milestone.")
        },
        "required": ["name", "start_date", "end_date", "owner"]
    })
}

fn risk_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "description": string_field("A description of the project risk."),
            "severity": string_field("The severity of the risk (e.g., low, medium, high)."),
            "mitigation": string_field("A plan to mitigate the risk.")
        },
        "required": ["description", "severity", "mitigation"]
    })
}

fn decision_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "date": string_field("The date the decision was made in YYYY-MM-DD format."),
            "decision": string_field("A description of the key decision.")
        },
        "required": ["date", "decision"]
    })
}

/// Builds the response schema for a project summary.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "project_title": {
                "type": "STRING",
                "description": "The title of the project.",
                "nullable": true
            },
            "summary": {
                "type": "STRING",
                "description": "A concise summary of the project goals.",
                "nullable": true
            },
            "milestones": {
                "type": "ARRAY",
                "description": "A list of key project milestones.",
                "items": milestone_schema()
            },
            "risks": {
                "type": "ARRAY",
                "description": "A list of identified project risks.",
                "items": risk_schema()
            },
            "decisions": {
                "type": "ARRAY",
                "description": "A list of key project decisions.",
                "items": decision_schema()
            }
        },
        "required": ["project_title", "summary", "milestones", "risks", "decisions"]
    })
}
