//! Gemini chat model over the public `generateContent` API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::context::{grounded_user_text, split_data_url};
use crate::error::{ModelError, Result};
use crate::model::{ChatModel, ModelRequest, Turn, TurnRole};

/// The default Gemini API base URL.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fast and efficient for chat interactions.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Sampling temperature used for every request.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Steers the assistant toward grounded retail support.
const SYSTEM_INSTRUCTION: &str = "أنت مساعد متجر إلكتروني ودود. أجب عن أسئلة العملاء بالعربية \
                                  بإيجاز ولطف. عند توفر بيانات منتجات في سياق الرسالة، استخدم \
                                  أسماءها وأسعارها الفعلية ولا تخترع منتجات غير موجودة.";

/// A [`ChatModel`] backed by the Gemini `generateContent` endpoint.
///
/// # Configuration
///
/// - `api_key` – from the constructor or the `GEMINI_API_KEY` environment
///   variable.
/// - `model` – defaults to `gemini-2.5-flash`.
/// - `base_url` – overridable for proxies and tests.
///
/// # Example
///
/// ```rust,ignore
/// use souq_model::GeminiChatModel;
///
/// let model = GeminiChatModel::from_env()?;
/// let reply = model.reply(&history, &request).await?;
/// ```
pub struct GeminiChatModel {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiChatModel {
    /// Create a new client with the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Config`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ModelError::Config("API key must not be empty".into()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
        })
    }

    /// Create a client using the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ModelError::Config("GEMINI_API_KEY environment variable not set".into()))?;
        Self::new(api_key)
    }

    /// Set the model name (e.g. `gemini-2.5-pro`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request(history: &[Turn], request: &ModelRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content {
                role: Some(role_name(turn.role).to_string()),
                parts: vec![Part::text(&turn.text)],
            })
            .collect();

        let mut parts = Vec::new();
        if let Some(image) = &request.image {
            let (mime_type, data) = split_data_url(image);
            parts.push(Part { text: None, inline_data: Some(InlineData { mime_type, data }) });
        }

        let final_text = grounded_user_text(&request.text, &request.products);
        if !final_text.is_empty() {
            parts.push(Part::text(&final_text));
        }

        contents.push(Content { role: Some("user".to_string()), parts });

        GenerateContentRequest {
            contents,
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(SYSTEM_INSTRUCTION)],
            },
            generation_config: GenerationConfig { temperature: DEFAULT_TEMPERATURE },
        }
    }
}

fn role_name(role: TurnRole) -> &'static str {
    match role {
        TurnRole::User => "user",
        TurnRole::Model => "model",
    }
}

// ── Gemini API request/response types ──────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(
        default,
        rename = "inlineData",
        skip_serializing_if = "Option::is_none"
    )]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self { text: Some(text.to_string()), inline_data: None }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Concatenated text parts of the first candidate.
fn extract_reply(response: GenerateContentResponse) -> Result<String> {
    let reply: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content.parts.into_iter().filter_map(|part| part.text).collect::<Vec<_>>().join("")
        })
        .unwrap_or_default();

    if reply.is_empty() {
        return Err(ModelError::EmptyReply);
    }
    Ok(reply)
}

#[async_trait]
impl ChatModel for GeminiChatModel {
    async fn reply(&self, history: &[Turn], request: &ModelRequest) -> Result<String> {
        debug!(
            model = %self.model,
            history_len = history.len(),
            product_count = request.products.len(),
            has_image = request.image.is_some(),
            "calling model"
        );

        let payload = Self::build_request(history, request);
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "model request failed");
                ModelError::from(e)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status, "model API error");
            return Err(ModelError::Api { status, message });
        }

        let body = response.text().await?;
        let decoded: GenerateContentResponse = serde_json::from_str(&body)?;
        extract_reply(decoded)
    }
}
