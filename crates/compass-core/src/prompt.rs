//! Prompt construction.

/// Placeholder replaced by the user's text.
const TEXT_PLACEHOLDER: &str = "{text}";

/// Instruction template sent with every extraction request.
///
/// The model is already constrained by the response schema, so the
/// instructions only need to frame the task.
pub const PROMPT_TEMPLATE: &str = r#"You are a project manager's assistant. Your task is to extract key project information from the following unstructured text.

Text to analyze:
"{text}""#;

/// Builds the extraction prompt for the given notes.
///
/// The text is inserted verbatim: no escaping, trimming or truncation.
pub fn build_prompt(text: &str) -> String {
    PROMPT_TEMPLATE.replacen(TEXT_PLACEHOLDER, text, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_substitutes_text() {
        let prompt = build_prompt("Kickoff on 2024-01-01, Alice owns design.");
        assert!(prompt.starts_with("You are a project manager's assistant."));
        assert!(prompt.ends_with("\"Kickoff on 2024-01-01, Alice owns design.\""));
        assert!(!prompt.contains(TEXT_PLACEHOLDER));
    }

    #[test]
    fn test_build_prompt_is_verbatim() {
        let raw = "  quotes \" and <tags> & braces {x}\n\nsecond line  ";
        let prompt = build_prompt(raw);
        assert!(prompt.contains(raw));
    }

    #[test]
    fn test_placeholder_in_user_text_is_not_expanded() {
        let prompt = build_prompt("literal {text} token");
        assert!(prompt.ends_with("\"literal {text} token\""));
        assert_eq!(prompt.matches("{text}").count(), 1);
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        assert_eq!(build_prompt("same"), build_prompt("same"));
    }
}
