//! HTTP client for a Gemini-style `generateContent` endpoint.

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{
    advise_prompt, localize_prompt, strip_code_fences, Generator, GeneratorError,
    LocalizeRequest, LocalizedBundle,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable holding the API key for [`HttpGenerator::from_env`].
pub const API_KEY_ENV: &str = "ATELIER_API_KEY";

/// Generator backed by a remote generative-language API.
///
/// Configured in builder style:
///
/// ```ignore
/// let generator = HttpGenerator::new("key")
///     .with_model("gemini-2.5-flash")
///     .with_base_url("https://generativelanguage.googleapis.com/v1beta");
/// ```
///
/// No timeout is enforced on calls; a hung call leaves the caller waiting.
#[derive(Debug, Clone)]
pub struct HttpGenerator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl HttpGenerator {
    /// Create a generator with the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        HttpGenerator {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Create a generator from the `ATELIER_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, GeneratorError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| GeneratorError::Unconfigured(format!("{} is not set", API_KEY_ENV)))?;
        Ok(HttpGenerator::new(api_key))
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the endpoint base URL (useful for tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// One request/response round trip. Returns the generated text.
    async fn generate(&self, prompt: &str, json_response: bool) -> Result<String, GeneratorError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });
        if json_response {
            body["generationConfig"] = json!({ "responseMimeType": "application/json" });
        }

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "generator call failed");
            return Err(GeneratorError::BadStatus(status.as_u16()));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| GeneratorError::Malformed(e.to_string()))?;

        value["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| GeneratorError::Malformed("no generated text in response".into()))
    }
}

#[async_trait]
impl Generator for HttpGenerator {
    async fn localize(&self, request: LocalizeRequest) -> Result<LocalizedBundle, GeneratorError> {
        let prompt = localize_prompt(&request);
        let text = self.generate(&prompt, true).await?;
        let cleaned = strip_code_fences(&text);
        LocalizedBundle::from_flat_json(request.kind, &cleaned)
    }

    async fn advise(&self, query: &str, context: &str) -> Result<String, GeneratorError> {
        let prompt = advise_prompt(query, context);
        self.generate(&prompt, false).await
    }
}
