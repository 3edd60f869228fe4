//! Data models and configuration
//!
//! Defines the completion models and image sizes the API understands, the
//! token usage counters it reports, and the environment-driven configuration.

use serde::Deserialize;
use std::fmt;

/// Completion models exposed by the text endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Model {
    Ada,
    Babbage,
    Curie,
    Davinci,
    Turbo,
}

impl Model {
    pub const ALL: [Model; 5] = [
        Model::Ada,
        Model::Babbage,
        Model::Curie,
        Model::Davinci,
        Model::Turbo,
    ];

    /// Model used when an id is not recognized.
    pub const FALLBACK: Model = Model::Ada;

    /// Wire identifier sent in the `model` field.
    pub fn id(self) -> &'static str {
        match self {
            Model::Ada => "text-ada-001",
            Model::Babbage => "text-babbage-001",
            Model::Curie => "text-curie-001",
            Model::Davinci => "text-davinci-003",
            Model::Turbo => "gpt-3.5-turbo",
        }
    }

    /// Look up a model by wire id, falling back to [`Model::FALLBACK`].
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|model| model.id() == id)
            .unwrap_or_else(|| {
                tracing::debug!("Unknown model id '{}', using {}", id, Self::FALLBACK);
                Self::FALLBACK
            })
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Square output sizes accepted by the image endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl ImageSize {
    pub const ALL: [ImageSize; 3] = [ImageSize::Small, ImageSize::Medium, ImageSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::Small => "256x256",
            ImageSize::Medium => "512x512",
            ImageSize::Large => "1024x1024",
        }
    }

    /// Parse a `WxH` size string. Unknown sizes silently map to `Small`.
    pub fn from_size_str(size: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == size)
            .unwrap_or_default()
    }

    pub fn is_valid(size: &str) -> bool {
        Self::ALL.iter().any(|candidate| candidate.as_str() == size)
    }

    /// Edge length in pixels.
    pub fn pixels(self) -> u32 {
        match self {
            ImageSize::Small => 256,
            ImageSize::Medium => 512,
            ImageSize::Large => 1024,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token counters reported by the text endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl Usage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32, total_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }

    pub fn prompt_tokens(&self) -> u32 {
        self.prompt_tokens
    }

    pub fn completion_tokens(&self) -> u32 {
        self.completion_tokens
    }

    pub fn total_tokens(&self) -> u32 {
        self.total_tokens
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tokens used [Prompt: {}] [Completion: {}] [Total: {}]",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )
    }
}

// Configuration
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

// Keeps the key out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| crate::Error::Config("OPENAI_API_KEY not set".to_string()))?;

        let base_url = lookup("OPENAI_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
