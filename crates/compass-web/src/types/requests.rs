//! Request DTOs.

use serde::Deserialize;

/// Form submitted from the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummarizeForm {
    /// Raw project notes. A missing field counts as empty input.
    #[serde(default)]
    pub notes: String,
}

/// JSON summarize request.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    /// Raw project notes.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_request_deserialize() {
        let req: SummarizeRequest = serde_json::from_str(r#"{"text": "kickoff"}"#).unwrap();
        assert_eq!(req.text, "kickoff");
    }

    #[test]
    fn test_form_without_notes_is_empty() {
        let form: SummarizeForm = serde_json::from_str("{}").unwrap();
        assert!(form.notes.is_empty());
    }
}
