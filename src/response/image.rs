use crate::image::{ImageDecoder, Sprite};
use crate::openai::types::ImageResponseContent;
use crate::Result;
use chrono::{DateTime, Utc};
use image::DynamicImage;
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Image URLs returned by one generation call, plus the images once fetched.
///
/// The generation call only returns URLs. [`ImageResponse::fetch_images`]
/// downloads and decodes them; until it has completed, the image accessors
/// return nothing and log a warning.
pub struct ImageResponse {
    created: i64,
    urls: Vec<Option<String>>,
    decoder: Arc<dyn ImageDecoder>,
    images: OnceCell<Vec<DynamicImage>>,
}

impl ImageResponse {
    pub fn new(created: i64, urls: Vec<Option<String>>, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self {
            created,
            urls,
            decoder,
            images: OnceCell::new(),
        }
    }

    /// Collect URLs in payload order. A payload without `data` gives no URLs.
    pub fn generate(content: ImageResponseContent, decoder: Arc<dyn ImageDecoder>) -> Self {
        let urls = match content.data {
            Some(data) => data.into_iter().map(|item| item.url).collect(),
            None => {
                tracing::error!("No returned data in image generation response");
                Vec::new()
            }
        };

        Self::new(content.created, urls, decoder)
    }

    /// Creation time as epoch seconds.
    pub fn created(&self) -> i64 {
        self.created
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }

    /// First URL, if the first item carried one.
    pub fn url(&self) -> Option<&str> {
        self.urls.first().and_then(|url| url.as_deref())
    }

    /// URLs aligned with the payload's `data` items.
    pub fn urls(&self) -> &[Option<String>] {
        &self.urls
    }

    pub fn url_count(&self) -> usize {
        self.urls.len()
    }

    /// True when the generation call returned no URLs.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn is_fetched(&self) -> bool {
        self.images.initialized()
    }

    /// Decoded images, empty before [`ImageResponse::fetch_images`] completes.
    ///
    /// Failed downloads are skipped, so index `i` here need not match URL `i`.
    pub fn images(&self) -> &[DynamicImage] {
        match self.images.get() {
            Some(images) => images.as_slice(),
            None => {
                tracing::warn!(
                    "Images have not been fetched; call fetch_images() before reading them"
                );
                &[]
            }
        }
    }

    pub fn image(&self) -> Option<&DynamicImage> {
        self.images().first()
    }

    /// Number of decoded images. Zero, with a warning, before the fetch.
    pub fn len(&self) -> usize {
        self.images().len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DynamicImage> {
        self.images().iter()
    }

    /// Download and decode every URL, one at a time.
    ///
    /// Runs at most once per response: concurrent and later callers wait for
    /// the first fetch and get the same images. A URL that fails to download
    /// or decode is logged and skipped.
    pub async fn fetch_images(&self) -> Result<&[DynamicImage]> {
        self.images
            .get_or_try_init(|| self.download_all())
            .await
            .map(Vec::as_slice)
    }

    /// Fetch if needed, then wrap each image in a centered [`Sprite`].
    pub async fn fetch_sprites(&self) -> Result<Vec<Sprite<'_>>> {
        let images = self.fetch_images().await?;
        Ok(images.iter().map(Sprite::new).collect())
    }

    async fn download_all(&self) -> Result<Vec<DynamicImage>> {
        let client = Client::builder().build()?;
        let mut images = Vec::with_capacity(self.urls.len());

        for (index, url) in self.urls.iter().enumerate() {
            let Some(url) = url else {
                tracing::warn!("Image {} has no URL, skipping", index);
                continue;
            };

            match Self::download(&client, url).await {
                Ok(bytes) => match self.decoder.decode(&bytes) {
                    Ok(image) => {
                        tracing::debug!(
                            "Fetched image {} ({}x{})",
                            index,
                            image.width(),
                            image.height()
                        );
                        images.push(image);
                    }
                    Err(e) => tracing::warn!("Failed to decode image {}: {}", index, e),
                },
                Err(e) => tracing::warn!("Failed to download image {}: {}", index, e),
            }
        }

        Ok(images)
    }

    async fn download(client: &Client, url: &str) -> Result<Vec<u8>> {
        let response = client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

impl fmt::Debug for ImageResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageResponse")
            .field("created", &self.created)
            .field("urls", &self.urls)
            .field("fetched", &self.is_fetched())
            .finish()
    }
}
