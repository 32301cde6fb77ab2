/// LLM Client — the single point of entry for all hosted-model calls in Resumatch.
///
/// ARCHITECTURAL RULE: No other module may call the inference API directly.
/// All model interactions MUST go through this module, and handlers depend on
/// the `TextGenerator` trait rather than the concrete client so the backend
/// can be stubbed in tests.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// Chat-completions endpoint of the Hugging Face inference router,
/// used when HF_API_URL is not set.
pub const DEFAULT_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
/// Model used when HF_MODEL_NAME is not set.
pub const DEFAULT_MODEL: &str = "google/gemma-2-2b-it";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("Model returned empty content")]
    EmptyContent,
}

/// One chat-style message, forwarded verbatim to the hosted model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Legacy text-generation shape some hosted endpoints still return.
    generated_text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatCompletion {
    /// Extracts the reply text. Blank output counts as no output.
    fn text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .or(self.generated_text)
            .filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// The hosted-model backend behind every generation endpoint.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>`; production uses
/// `HfClient`, handler tests use a canned stub.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends the message list to the hosted model and returns its text reply.
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

/// `TextGenerator` backed by the Hugging Face chat-completions router.
#[derive(Clone)]
pub struct HfClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl HfClient {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for HfClient {
    /// Makes the chat-completions call.
    /// Retries on 429, 5xx, and transport errors with exponential backoff;
    /// other non-success statuses fail fast.
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages,
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "generation attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&self.api_url)
                .bearer_auth(&self.api_key)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("inference API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                // Try to parse the router's flat error message
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .map(|e| e.error)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let completion: ChatCompletion = response.json().await?;
            let text = completion.text().ok_or(LlmError::EmptyContent)?;

            debug!("generation succeeded ({} chars)", text.len());

            return Ok(text);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}
