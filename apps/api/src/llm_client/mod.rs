/// LLM Client: the single point of entry for all Groq API calls in ResumeForge.
///
/// ARCHITECTURAL RULE: No other module may call the provider directly.
/// Callers depend on the `ChatCompleter` trait; `LlmClient` is the production backend.
///
/// One attempt per call: no retries, no backoff.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[cfg(test)]
pub mod testing;

/// Fixed output cap sent with every completion request.
pub const MAX_TOKENS: u32 = 4000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("GROQ API error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("GROQ transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Transport(e.to_string())
    }
}

/// A single role/content message in a chat-completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The completion seam. Carried in `AppState` as `Arc<dyn ChatCompleter>` so
/// handlers and the expert router never see the concrete client.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage], temperature: f32)
        -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

/// Groq chat-completion client (OpenAI-compatible wire format).
/// Holds only immutable configuration, so one instance is shared across requests.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl LlmClient {
    /// Fails with `LlmError::Configuration` when the API key is missing.
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::Configuration("GROQ_API_KEY not found".to_string()))?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model: model.into(),
            api_url: api_url.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompleter for LlmClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, LlmError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("GROQ API returned {}: {}", status, body);
            return Err(LlmError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| {
                LlmError::Transport("unexpected response shape: no completion content".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::new(
            Some("test-key-123".to_string()),
            "llama3-70b-8192",
            format!("{}/openai/v1/chat/completions", server.uri()),
        )
        .unwrap()
    }

    #[test]
    fn test_new_without_api_key_is_configuration_error() {
        let err = LlmClient::new(None, "m", "http://localhost").err().unwrap();
        assert!(matches!(err, LlmError::Configuration(_)));
    }

    #[test]
    fn test_new_with_blank_api_key_is_configuration_error() {
        let result = LlmClient::new(Some("   ".to_string()), "m", "http://localhost");
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_chat_message_user_role() {
        let msg = ChatMessage::user("hello");
        assert_eq!(msg.role, "user");
        assert_eq!(msg.content, "hello");
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .and(header("Authorization", "Bearer test-key-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-1",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "Rewritten resume"}},
                    {"index": 1, "message": {"role": "assistant", "content": "ignored"}}
                ],
                "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server)
            .complete(&[ChatMessage::user("improve this")], DEFAULT_TEMPERATURE)
            .await
            .unwrap();
        assert_eq!(text, "Rewritten resume");
    }

    #[tokio::test]
    async fn test_complete_sends_model_temperature_and_token_cap() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openai/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama3-70b-8192",
                "temperature": 0.5,
                "max_tokens": 4000,
                "messages": [{"role": "user", "content": "hi"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "ok"}}]
            })))
            .mount(&server)
            .await;

        // If the body matcher fails, wiremock returns 404 → we'd get an Upstream error
        let text = client_for(&server)
            .complete(&[ChatMessage::user("hi")], 0.5)
            .await
            .unwrap();
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(&[ChatMessage::user("hi")], DEFAULT_TEMPERATURE)
            .await
            .unwrap_err();

        match err {
            LlmError::Upstream { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limit exceeded");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_choices_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": []
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(&[ChatMessage::user("hi")], DEFAULT_TEMPERATURE)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }

    #[tokio::test]
    async fn test_non_json_body_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(&[ChatMessage::user("hi")], DEFAULT_TEMPERATURE)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 1 on localhost is never listening
        let client = LlmClient::new(
            Some("k".to_string()),
            "llama3-70b-8192",
            "http://127.0.0.1:1/openai/v1/chat/completions",
        )
        .unwrap();

        let err = client
            .complete(&[ChatMessage::user("hi")], DEFAULT_TEMPERATURE)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }
}
