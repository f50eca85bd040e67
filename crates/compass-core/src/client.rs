//! Model provider client with structured-output enforcement.
//!
//! [`StructuredModel`] is the seam between the pipeline and the hosted
//! model. [`GeminiClient`] implements it against the Gemini
//! `generateContent` endpoint with `responseSchema` set, so the provider
//! constrains generation to the schema and returns JSON text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::{ApiKey, ProviderSettings, TEMPERATURE};
use crate::error::{CompassError, Result};

/// A hosted model that answers a prompt with a record matching a schema.
#[async_trait]
pub trait StructuredModel: Send + Sync {
    /// Issues one generation request and returns the structured record.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<Value>;
}

/// Gemini API client for schema-constrained generation.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: ApiKey,
    model: String,
    api_base: String,
}

impl GeminiClient {
    /// Create a new client.
    pub fn new(api_key: ApiKey, model: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.into(),
            api_base: api_base.into(),
        }
    }

    /// Create a client from provider settings.
    ///
    /// Fails with a configuration error when no credential is set.
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self> {
        let api_key = settings.credential()?.clone();
        Ok(Self::new(
            api_key,
            settings.model.clone(),
            settings.api_base.clone(),
        ))
    }

    /// Returns the model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the `generateContent` URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl StructuredModel for GeminiClient {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<Value> {
        let request = GenerateRequest::new(prompt, schema.clone());

        debug!(model = %self.model, prompt_len = prompt.len(), "Sending generateContent request");
        trace!("Request body: {:?}", request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompassError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompassError::Provider {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }

        let response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| CompassError::ResponseParse(e.to_string()))?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "generateContent response received"
            );
        }

        let text = response.text()?;
        serde_json::from_str(&text).map_err(|e| CompassError::ResponseParse(e.to_string()))
    }
}

/// Extracts the provider's error message from an error body.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

/// generateContent request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Conversation contents.
    pub contents: Vec<Content>,

    /// Decoding and output settings.
    pub generation_config: GenerationConfig,
}

impl GenerateRequest {
    /// Build a single-turn request constrained to `schema`.
    pub fn new(prompt: &str, schema: Value) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        }
    }
}

/// Generation settings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Decoding temperature.
    pub temperature: f32,

    /// Output MIME type; JSON for structured output.
    pub response_mime_type: String,

    /// Schema the output must conform to.
    pub response_schema: Value,
}

/// A content turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Role of the author ("user" or "model").
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,

    /// Content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Only text parts are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
}

/// generateContent response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Generated candidates.
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Feedback on the prompt (set when the prompt itself was blocked).
    pub prompt_feedback: Option<PromptFeedback>,

    /// Token usage information.
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateResponse {
    /// Returns the concatenated text of the first candidate.
    pub fn text(&self) -> Result<String> {
        let Some(candidate) = self.candidates.first() else {
            let reason = self
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            return Err(CompassError::EmptyResponse(reason));
        };

        let text: String = candidate
            .content
            .iter()
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() {
            let reason = candidate
                .finish_reason
                .clone()
                .unwrap_or_else(|| "empty candidate".to_string());
            return Err(CompassError::EmptyResponse(reason));
        }

        Ok(text)
    }
}

/// A generated candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content.
    pub content: Option<Content>,

    /// Why generation stopped (STOP, MAX_TOKENS, SAFETY, ...).
    pub finish_reason: Option<String>,
}

/// Prompt feedback.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked, if it was.
    pub block_reason: Option<String>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt.
    #[serde(default)]
    pub prompt_token_count: u32,

    /// Tokens in the candidates.
    #[serde(default)]
    pub candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, State};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;

    #[derive(Clone, Default)]
    struct Captured {
        call: Arc<Mutex<Option<String>>>,
        key: Arc<Mutex<Option<String>>>,
        body: Arc<Mutex<Option<Value>>>,
    }

    /// Serves `reply` for every generateContent call and returns the API base.
    async fn fake_provider(status: StatusCode, reply: Value, captured: Captured) -> String {
        let app = Router::new()
            .route(
                "/v1beta/models/:call",
                post(
                    move |State(captured): State<Captured>,
                          Path(call): Path<String>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            *captured.call.lock().unwrap() = Some(call);
                            *captured.key.lock().unwrap() = headers
                                .get("x-goog-api-key")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            *captured.body.lock().unwrap() = Some(body);
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(captured);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/v1beta", addr)
    }

    fn client(api_base: &str) -> GeminiClient {
        GeminiClient::new(ApiKey::new("test-key"), "gemini-1.5-flash", api_base)
    }

    fn candidate_reply(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 30}
        })
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest::new("hello", json!({"type": "OBJECT"}));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(value["generationConfig"]["temperature"], 0.0);
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {"parts": [{"text": "{\"a\":"}, {"text": "1}"}]}
            }]
        }))
        .unwrap();
        assert_eq!(response.text().unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_response_without_candidates_reports_block_reason() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        let err = response.text().unwrap_err();
        assert!(matches!(err, CompassError::EmptyResponse(ref r) if r == "SAFETY"));
    }

    #[test]
    fn test_provider_message_falls_back_to_body() {
        assert_eq!(
            provider_message(r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#),
            "API key not valid"
        );
        assert_eq!(provider_message("  upstream timeout \n"), "upstream timeout");
    }

    #[test]
    fn test_from_settings_requires_key() {
        let result = GeminiClient::from_settings(&ProviderSettings::default());
        assert!(matches!(result, Err(CompassError::Configuration(_))));

        let client = GeminiClient::from_settings(
            &ProviderSettings::with_api_key("k").with_api_base("http://localhost:1/v1beta"),
        )
        .unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:1/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_sends_schema_and_parses_json() {
        let captured = Captured::default();
        let base = fake_provider(
            StatusCode::OK,
            candidate_reply(r#"{"project_title": "Apollo", "milestones": []}"#),
            captured.clone(),
        )
        .await;

        let value = client(&base)
            .generate("the prompt", &json!({"type": "OBJECT"}))
            .await
            .unwrap();

        assert_eq!(value["project_title"], "Apollo");
        assert_eq!(
            captured.call.lock().unwrap().as_deref(),
            Some("gemini-1.5-flash:generateContent")
        );
        assert_eq!(captured.key.lock().unwrap().as_deref(), Some("test-key"));

        let body = captured.body.lock().unwrap().clone().unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "the prompt");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[tokio::test]
    async fn test_generate_maps_provider_error() {
        let base = fake_provider(
            StatusCode::TOO_MANY_REQUESTS,
            json!({"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}),
            Captured::default(),
        )
        .await;

        let err = client(&base)
            .generate("p", &json!({}))
            .await
            .unwrap_err();

        match err {
            CompassError::Provider { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Resource has been exhausted");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_non_json_text() {
        let base = fake_provider(
            StatusCode::OK,
            candidate_reply("definitely not json"),
            Captured::default(),
        )
        .await;

        let err = client(&base).generate("p", &json!({})).await.unwrap_err();
        assert!(matches!(err, CompassError::ResponseParse(_)));
    }

    #[tokio::test]
    async fn test_generate_reports_unreachable_provider() {
        // Nothing listens on port 9 locally.
        let err = client("http://127.0.0.1:9/v1beta")
            .generate("p", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, CompassError::Request(_)));
    }
}
