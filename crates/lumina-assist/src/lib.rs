//! # lumina-assist
//!
//! Best-effort client for a Gemini-style text-generation API, used by the
//! composer to draft ideas and polish prose.
//!
//! The assistant never surfaces failures to its callers: a missing API key,
//! a transport error, or an unparseable response all degrade to the caller's
//! own input (for rewrites) or to a fixed placeholder (for ideas and cover
//! descriptions).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Placeholder returned by [`Assist::draft_ideas`] in degraded mode.
const IDEAS_FALLBACK: &str = "AI assistant unavailable. Please check the API key.";
/// Placeholder returned by [`Assist::describe_cover`] in degraded mode.
const COVER_FALLBACK: &str = "A modern abstract digital art background";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Assistant configuration.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    /// API key.  Env: `GEMINI_API_KEY`.  An absent key puts the assistant
    /// into degraded mode; nothing fails.
    pub api_key: Option<String>,

    /// Model identifier.
    /// Env: `LUMINA_AI_MODEL`
    /// Default: `gemini-2.5-flash`
    pub model: String,

    /// API base URL.  Overridable for tests and proxies.
    /// Env: `LUMINA_AI_ENDPOINT`
    pub endpoint: String,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl AssistConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        if let Ok(model) = std::env::var("LUMINA_AI_MODEL") {
            config.model = model;
        }

        if let Ok(endpoint) = std::env::var("LUMINA_AI_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if config.api_key.is_none() {
            warn!("GEMINI_API_KEY not set, assistant running in degraded mode");
        }

        config
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Handle to the text-generation service.
pub struct Assist {
    config: AssistConfig,
    client: reqwest::Client,
}

impl Assist {
    pub fn new(config: AssistConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Build an assistant configured from the environment.
    pub fn from_env() -> Self {
        Self::new(AssistConfig::from_env())
    }

    /// Whether a credential is configured.
    pub fn is_enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Draft three numbered blog ideas for a topic.
    pub async fn draft_ideas(&self, topic: &str) -> String {
        let prompt = format!(
            "Generate 3 catchy blog post titles and short descriptions for \
             the topic: \"{topic}\". Return them as a simple numbered list."
        );
        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "idea drafting degraded to placeholder");
                IDEAS_FALLBACK.to_string()
            }
        }
    }

    /// Rewrite body text for readability and engagement.  Returns the input
    /// unchanged when the service is unavailable.
    pub async fn rewrite(&self, content: &str) -> String {
        let prompt = format!(
            "Improve the following blog content for readability, engagement, \
             and SEO. Keep the tone professional yet accessible.\n\n\
             Content:\n{content}"
        );
        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "rewrite degraded to original content");
                content.to_string()
            }
        }
    }

    /// Describe a cover image for a post title, in under 30 words.
    pub async fn describe_cover(&self, title: &str) -> String {
        let prompt = format!(
            "Describe a visually striking, abstract, and modern image that \
             would serve as a perfect cover for a blog post titled: \
             \"{title}\". Keep the description under 30 words."
        );
        match self.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "cover description degraded to placeholder");
                COVER_FALLBACK.to_string()
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, AssistError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AssistError::NoApiKey)?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: GenerateResponse = response.json().await?;
        body.first_text().ok_or(AssistError::EmptyResponse)
    }
}

/// Internal failure modes.  These never escape the crate: every public
/// method maps them to a fallback value.
#[derive(Debug, Error)]
enum AssistError {
    #[error("no API key configured")]
    NoApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("response contained no text")]
    EmptyResponse,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    /// The first non-empty text part of the first candidate, if any.
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
    }
}
