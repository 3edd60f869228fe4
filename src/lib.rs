//! Client for OpenAI's text completion and image generation endpoints
//!
//! Prompts go in as a [`Prompt`], results come back as ordered
//! [`TextResponse`] answers or as an [`ImageResponse`] whose images are
//! fetched on demand. Non-2xx API statuses are logged and produce empty
//! responses instead of errors.

pub mod error;
pub mod image;
pub mod models;
pub mod openai;
pub mod prompt;
pub mod response;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{Error, Result};
pub use models::{Config, ImageSize, Model, Usage};
pub use openai::{ImageRequest, OpenAi, TextRequest};
pub use prompt::Prompt;
pub use response::{Answer, ImageResponse, TextResponse};
