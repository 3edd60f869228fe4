use super::client::{OpenAiHttpClient, MODELS_PATH};
use super::image::ImageGenerator;
use super::text::TextCompletion;
use crate::image::{DynamicImageDecoder, ImageDecoder};
use crate::models::Config;
use crate::Result;
use std::fmt;
use std::sync::Arc;

/// Entry point holding the API key and the capability objects.
///
/// Keep the key out of source control; this type never persists it.
pub struct OpenAi {
    http: Arc<OpenAiHttpClient>,
    decoder: Arc<dyn ImageDecoder>,
    text_completion: TextCompletion,
    image_generation: ImageGenerator,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::assemble(
            OpenAiHttpClient::new(api_key.into()),
            Arc::new(DynamicImageDecoder),
        )
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone()).with_base_url(config.base_url.clone())
    }

    /// Point every endpoint at a different host, e.g. a proxy.
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        let http = (*self.http).clone().with_base_url(base_url.into());
        Self::assemble(http, self.decoder)
    }

    /// Decoder used by image responses to turn downloads into images.
    pub fn with_decoder(self, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self::assemble((*self.http).clone(), decoder)
    }

    fn assemble(http: OpenAiHttpClient, decoder: Arc<dyn ImageDecoder>) -> Self {
        let http = Arc::new(http);
        Self {
            text_completion: TextCompletion::new(Arc::clone(&http)),
            image_generation: ImageGenerator::new(Arc::clone(&http), Arc::clone(&decoder)),
            http,
            decoder,
        }
    }

    pub fn text_completion(&self) -> &TextCompletion {
        &self.text_completion
    }

    pub fn image_generation(&self) -> &ImageGenerator {
        &self.image_generation
    }

    /// Raw JSON from the model listing endpoint, unparsed.
    pub async fn list_models(&self) -> Result<String> {
        self.http.get_text(MODELS_PATH).await
    }
}

impl fmt::Debug for OpenAi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAi")
            .field("http", &self.http)
            .finish_non_exhaustive()
    }
}
