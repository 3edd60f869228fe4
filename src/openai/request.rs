//! User-facing request values and their conversion to wire payloads.

use super::types::{ImageRequestBody, TextRequestBody};
use crate::models::{ImageSize, Model};
use crate::prompt::Prompt;
use crate::{Error, Result};
use std::fmt;
use std::ops::RangeInclusive;

/// Parameters for one text completion call.
///
/// Defaults: `Davinci`, 10 max tokens, temperature 0.7, top_p 1.0, one
/// completion per prompt, no echo, no suffix, no stop sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRequest {
    prompt: Prompt,
    model: Model,
    suffix: Option<String>,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    n: u32,
    echo: bool,
    stop: Option<String>,
}

impl TextRequest {
    pub const DEFAULT_MODEL: Model = Model::Davinci;
    pub const DEFAULT_MAX_TOKENS: u32 = 10;
    pub const DEFAULT_TEMPERATURE: f64 = 0.7;
    pub const DEFAULT_TOP_P: f64 = 1.0;
    pub const DEFAULT_N: u32 = 1;

    pub fn new(prompt: impl Into<Prompt>) -> Self {
        Self {
            prompt: prompt.into(),
            model: Self::DEFAULT_MODEL,
            suffix: None,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            temperature: Self::DEFAULT_TEMPERATURE,
            top_p: Self::DEFAULT_TOP_P,
            n: Self::DEFAULT_N,
            echo: false,
            stop: None,
        }
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }

    /// Completions generated per prompt.
    pub fn with_n(mut self, n: u32) -> Self {
        self.n = n;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop = Some(stop.into());
        self
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    pub fn stop(&self) -> Option<&str> {
        self.stop.as_deref()
    }

    /// Build the `/v1/completions` body.
    ///
    /// Temperature and top_p pass through unchecked; `max_tokens` and `n`
    /// must be positive.
    pub fn to_payload(&self) -> Result<TextRequestBody> {
        if self.max_tokens == 0 {
            return Err(Error::InvalidRequest(
                "max_tokens must be positive".to_string(),
            ));
        }
        if self.n == 0 {
            return Err(Error::InvalidRequest("n must be positive".to_string()));
        }

        Ok(self.body())
    }

    fn body(&self) -> TextRequestBody {
        TextRequestBody {
            model: self.model.id().to_string(),
            prompt: self.prompt.to_list(),
            suffix: self.suffix.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            n: self.n,
            echo: self.echo,
            stop: self.stop.clone(),
        }
    }
}

impl fmt::Display for TextRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.body()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Parameters for one image generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    prompt: Prompt,
    n: u8,
    size: ImageSize,
}

impl ImageRequest {
    pub const COUNT_RANGE: RangeInclusive<u8> = 1..=10;

    pub fn new(prompt: impl Into<Prompt>) -> Self {
        Self {
            prompt: prompt.into(),
            n: 1,
            size: ImageSize::default(),
        }
    }

    /// Number of images to generate, 1 to 10.
    pub fn with_n(mut self, n: u8) -> Self {
        self.n = n;
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = size;
        self
    }

    /// Set the size from a `WxH` string; unknown sizes fall back to 256x256.
    pub fn with_size_str(self, size: &str) -> Self {
        self.with_size(ImageSize::from_size_str(size))
    }

    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    pub fn n(&self) -> u8 {
        self.n
    }

    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Build the `/v1/images/generations` body. Only the primary prompt is sent.
    pub fn to_payload(&self) -> Result<ImageRequestBody> {
        if !Self::COUNT_RANGE.contains(&self.n) {
            return Err(Error::InvalidRequest(format!(
                "image count must be between {} and {}, got {}",
                Self::COUNT_RANGE.start(),
                Self::COUNT_RANGE.end(),
                self.n
            )));
        }

        Ok(self.body())
    }

    fn body(&self) -> ImageRequestBody {
        ImageRequestBody {
            prompt: self.prompt.primary().to_string(),
            n: self.n,
            size: self.size.as_str().to_string(),
        }
    }
}

impl fmt::Display for ImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(&self.body()).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
