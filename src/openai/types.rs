//! Wire payloads exchanged with the completions and image endpoints.
//!
//! Response types derive `Default` so a non-2xx status can hand back an empty
//! payload instead of an error.

use crate::models::Usage;
use serde::{Deserialize, Serialize};

/// Request body for `/v1/completions`.
///
/// `suffix` and `stop` are sent as explicit `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRequestBody {
    pub model: String,
    pub prompt: Vec<String>,
    pub suffix: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub n: u32,
    pub echo: bool,
    pub stop: Option<String>,
}

/// Top-level completion response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TextResponseContent {
    pub id: Option<String>,
    pub object: Option<String>,
    pub created: i64,
    pub model: Option<String>,
    pub choices: Option<Vec<Choice>>,
    pub usage: Option<Usage>,
}

/// One generated candidate. `index` is taken as sent; negative or
/// out-of-range values are rejected by `TextResponse::generate`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Choice {
    pub text: Option<String>,
    pub index: i64,
    pub finish_reason: Option<String>,
}

/// Request body for `/v1/images/generations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageRequestBody {
    pub prompt: String,
    pub n: u8,
    pub size: String,
}

/// Top-level image generation response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageResponseContent {
    pub created: i64,
    pub data: Option<Vec<ImageData>>,
}

/// One generated image item.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageData {
    pub url: Option<String>,
}
