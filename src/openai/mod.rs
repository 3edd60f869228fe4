//! OpenAI completions and image generation
//!
//! [`OpenAi`] is the entry point. It hands out a [`TextCompletion`] and an
//! [`ImageGenerator`], both of which share the facade's API key.

pub mod client;
pub mod facade;
pub mod image;
pub mod mock;
pub mod request;
pub mod text;
pub mod types;

pub use client::OpenAiHttpClient;
pub use facade::OpenAi;
pub use self::image::ImageGenerator;
pub use mock::{MockImageGenerationClient, MockTextCompletionClient};
pub use request::{ImageRequest, TextRequest};
pub use text::TextCompletion;

use crate::response::{ImageResponse, TextResponse};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextCompletionService: Send + Sync {
    async fn complete(&self, request: &TextRequest) -> Result<TextResponse>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate(&self, request: &ImageRequest) -> Result<ImageResponse>;
}
