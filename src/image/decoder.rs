use super::ImageDecoder;
use crate::Result;
use image::DynamicImage;

/// Decodes any format the `image` crate can sniff from the leading bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicImageDecoder;

impl ImageDecoder for DynamicImageDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
        Ok(image::load_from_memory(bytes)?)
    }
}
