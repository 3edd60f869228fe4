use crate::models::DEFAULT_BASE_URL;
use crate::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

pub const COMPLETIONS_PATH: &str = "/v1/completions";
pub const IMAGE_GENERATIONS_PATH: &str = "/v1/images/generations";
pub const MODELS_PATH: &str = "/v1/models";

/// Bearer-authenticated JSON client shared by the capability objects.
///
/// Every call builds its own transport and drops it when the call returns;
/// nothing is pooled between calls.
#[derive(Clone)]
pub struct OpenAiHttpClient {
    api_key: String,
    base_url: String,
}

impl OpenAiHttpClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport() -> Result<Client> {
        Ok(Client::builder().build()?)
    }

    /// POST `request` as JSON and decode the response.
    ///
    /// A non-2xx status is logged and yields `Resp::default()`. Transport
    /// failures and undecodable 2xx bodies are returned as errors.
    pub async fn post<Req: Serialize, Resp: DeserializeOwned + Default>(
        &self,
        path: &str,
        request: &Req,
    ) -> Result<Resp> {
        let url = format!("{}{}", self.base_url, path);
        let client = Self::transport()?;

        let started = Instant::now();
        let response = client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", url, e);
                e
            })?;
        let elapsed = started.elapsed().as_secs_f64();
        let status = response.status();

        if !status.is_success() {
            tracing::error!("{} - {} - {:.2}s", status.as_u16(), reason(status), elapsed);
            let error_text = response.text().await.unwrap_or_default();
            tracing::debug!("Error body from {}: {}", path, error_text);
            return Ok(Resp::default());
        }

        tracing::debug!("{} - {} - {:.2}s", status.as_u16(), reason(status), elapsed);

        let body = response.text().await?;
        tracing::trace!("Response body from {}: {}", path, body);
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}\nBody: {}", path, e, body);
            Error::Serialization(e)
        })
    }

    /// GET `path` and return the body unparsed, whatever the status.
    pub async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let client = Self::transport()?;

        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", url, e);
                e
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("{} - {}", status.as_u16(), reason(status));
        }

        Ok(response.text().await?)
    }
}

impl fmt::Debug for OpenAiHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiHttpClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::LogCapture;
    use serde::Deserialize;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Echo {
        value: String,
    }

    fn make_client(server: &MockServer) -> OpenAiHttpClient {
        OpenAiHttpClient::new("test-key".to_string()).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_post_sends_bearer_and_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/echo"))
            .and(header("Authorization", "Bearer test-key"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(serde_json::json!({ "value": "ping" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "value": "pong" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response: Echo = make_client(&server)
            .post("/v1/echo", &serde_json::json!({ "value": "ping" }))
            .await
            .unwrap();
        assert_eq!(response.value, "pong");
    }

    #[tokio::test]
    async fn test_post_non_success_returns_default() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/echo"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let logs = LogCapture::default();
        let _guard = logs.install();

        let response: Echo = make_client(&server)
            .post("/v1/echo", &serde_json::json!({}))
            .await
            .unwrap();
        assert_eq!(response, Echo::default());

        let errors = logs.lines_at("ERROR");
        assert_eq!(errors.len(), 1, "{}", logs.contents());
        assert!(errors[0].contains("429 - Too Many Requests - "));
        assert!(logs.contents().contains("rate limited"));
    }

    #[tokio::test]
    async fn test_post_malformed_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/echo"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = make_client(&server)
            .post::<_, Echo>("/v1/echo", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn test_post_transport_failure_propagates() {
        let client = OpenAiHttpClient::new("key".to_string())
            .with_base_url("http://127.0.0.1:1".to_string());

        let err = client
            .post::<_, Echo>("/v1/echo", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
    }

    #[tokio::test]
    async fn test_get_text_returns_raw_body_even_on_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(MODELS_PATH))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"bad key\"}"))
            .mount(&server)
            .await;

        let body = make_client(&server).get_text(MODELS_PATH).await.unwrap();
        assert_eq!(body, "{\"error\":\"bad key\"}");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = OpenAiHttpClient::new("sk-secret".to_string())
            .with_base_url("http://localhost:9000/".to_string());
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert!(!format!("{:?}", client).contains("sk-secret"));
    }
}
