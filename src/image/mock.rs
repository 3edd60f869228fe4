use super::ImageDecoder;
use crate::Result;
use image::DynamicImage;
use std::sync::{Arc, Mutex};

/// Decoder that ignores its input and returns a blank image.
pub struct MockImageDecoder {
    decode_count: Arc<Mutex<usize>>,
    size: (u32, u32),
    should_fail: Arc<Mutex<bool>>,
}

impl MockImageDecoder {
    pub fn new() -> Self {
        Self {
            decode_count: Arc::new(Mutex::new(0)),
            size: (1, 1),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_failure(self, should_fail: bool) -> Self {
        *self.should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn get_decode_count(&self) -> usize {
        *self.decode_count.lock().unwrap()
    }
}

impl Default for MockImageDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDecoder for MockImageDecoder {
    fn decode(&self, _bytes: &[u8]) -> Result<DynamicImage> {
        *self.decode_count.lock().unwrap() += 1;

        if *self.should_fail.lock().unwrap() {
            return Err(crate::Error::Image(image::ImageError::IoError(
                std::io::Error::other("Mock failure"),
            )));
        }

        Ok(DynamicImage::new_rgba8(self.size.0, self.size.1))
    }
}
