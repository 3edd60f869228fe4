use super::request::{ImageRequest, TextRequest};
use super::{ImageGenerationService, TextCompletionService};
use crate::image::{ImageDecoder, MockImageDecoder};
use crate::models::Usage;
use crate::response::{Answer, ImageResponse, TextResponse};
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub struct MockTextCompletionClient {
    responses: Arc<Mutex<Vec<TextResponse>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTextCompletionClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: TextResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockTextCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextCompletionService for MockTextCompletionClient {
    async fn complete(&self, request: &TextRequest) -> Result<TextResponse> {
        let body = request.to_payload()?;

        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // One echo answer per prompt
            let answers = body
                .prompt
                .iter()
                .map(|prompt| Answer::new(Some(format!("Echo: {}", prompt).as_str()), Some("stop")))
                .collect();
            Ok(TextResponse::new(0, answers, body.model, Usage::default()))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

pub struct MockImageGenerationClient {
    urls: Arc<Mutex<Vec<String>>>,
    decoder: Arc<dyn ImageDecoder>,
    call_count: Arc<Mutex<usize>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            urls: Arc::new(Mutex::new(Vec::new())),
            decoder: Arc::new(MockImageDecoder::new()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_url(self, url: String) -> Self {
        self.urls.lock().unwrap().push(url);
        self
    }

    pub fn with_decoder(mut self, decoder: Arc<dyn ImageDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate(&self, request: &ImageRequest) -> Result<ImageResponse> {
        let body = request.to_payload()?;
        *self.call_count.lock().unwrap() += 1;

        let urls = self
            .urls
            .lock()
            .unwrap()
            .iter()
            .take(body.n as usize)
            .cloned()
            .map(Some)
            .collect();

        Ok(ImageResponse::new(0, urls, Arc::clone(&self.decoder)))
    }
}
