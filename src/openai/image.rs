use super::client::{OpenAiHttpClient, IMAGE_GENERATIONS_PATH};
use super::request::ImageRequest;
use super::types::ImageResponseContent;
use super::ImageGenerationService;
use crate::image::ImageDecoder;
use crate::response::ImageResponse;
use crate::Result;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Image generation capability of [`super::OpenAi`].
#[derive(Clone)]
pub struct ImageGenerator {
    http: Arc<OpenAiHttpClient>,
    decoder: Arc<dyn ImageDecoder>,
}

impl ImageGenerator {
    pub(crate) fn new(http: Arc<OpenAiHttpClient>, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self { http, decoder }
    }

    /// Send one generation request. The returned response holds URLs only;
    /// call [`ImageResponse::fetch_images`] to download them.
    ///
    /// A non-2xx status yields a response with no URLs rather than an error.
    pub async fn request(&self, request: &ImageRequest) -> Result<ImageResponse> {
        let body = request.to_payload()?;
        tracing::debug!("Image generation request {}", request);

        let content: ImageResponseContent = self.http.post(IMAGE_GENERATIONS_PATH, &body).await?;
        Ok(ImageResponse::generate(content, Arc::clone(&self.decoder)))
    }
}

#[async_trait]
impl ImageGenerationService for ImageGenerator {
    async fn generate(&self, request: &ImageRequest) -> Result<ImageResponse> {
        self.request(request).await
    }
}

impl fmt::Debug for ImageGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageGenerator")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::MockImageDecoder;
    use crate::models::ImageSize;
    use crate::test_support::LogCapture;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_client(server: &MockServer, decoder: Arc<MockImageDecoder>) -> ImageGenerator {
        ImageGenerator::new(
            Arc::new(OpenAiHttpClient::new("test-key".to_string()).with_base_url(server.uri())),
            decoder,
        )
    }

    #[tokio::test]
    async fn test_request_then_fetch() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(IMAGE_GENERATIONS_PATH))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_json(serde_json::json!({
                "prompt": "a lighthouse at dusk",
                "n": 2,
                "size": "512x512"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "created": 1670000000,
                "data": [
                    { "url": format!("{}/files/a.png", server.uri()) },
                    { "url": format!("{}/files/b.png", server.uri()) }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/files/a.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"a".to_vec()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/files/b.png"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"b".to_vec()))
            .expect(1)
            .mount(&server)
            .await;

        let decoder = Arc::new(MockImageDecoder::new().with_size(2, 2));
        let request = ImageRequest::new("a lighthouse at dusk")
            .with_n(2)
            .with_size(ImageSize::Medium);
        let response = make_client(&server, decoder.clone())
            .request(&request)
            .await
            .unwrap();

        assert_eq!(response.url_count(), 2);
        assert!(!response.is_fetched());

        let images = response.fetch_images().await.unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(decoder.get_decode_count(), 2);
    }

    #[tokio::test]
    async fn test_non_success_status_gives_no_urls() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(IMAGE_GENERATIONS_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad prompt"))
            .mount(&server)
            .await;

        let logs = LogCapture::default();
        let _guard = logs.install();

        let response = make_client(&server, Arc::new(MockImageDecoder::new()))
            .generate(&ImageRequest::new("x"))
            .await
            .unwrap();

        assert!(response.is_empty());
        assert!(logs
            .lines_at("ERROR")
            .iter()
            .any(|line| line.contains("400 - Bad Request")));
        assert!(response.fetch_images().await.unwrap().is_empty());
    }
}
