use super::client::{OpenAiHttpClient, COMPLETIONS_PATH};
use super::request::TextRequest;
use super::types::TextResponseContent;
use super::TextCompletionService;
use crate::response::TextResponse;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Text completion capability of [`super::OpenAi`].
#[derive(Debug, Clone)]
pub struct TextCompletion {
    http: Arc<OpenAiHttpClient>,
}

impl TextCompletion {
    pub(crate) fn new(http: Arc<OpenAiHttpClient>) -> Self {
        Self { http }
    }

    /// Send one completion request.
    ///
    /// A non-2xx status yields an empty [`TextResponse`] rather than an error.
    pub async fn request(&self, request: &TextRequest) -> Result<TextResponse> {
        let body = request.to_payload()?;
        tracing::debug!("Text completion request {}", request);

        let content: TextResponseContent = self.http.post(COMPLETIONS_PATH, &body).await?;
        TextResponse::generate(content)
    }
}

#[async_trait]
impl TextCompletionService for TextCompletion {
    async fn complete(&self, request: &TextRequest) -> Result<TextResponse> {
        self.request(request).await
    }
}
