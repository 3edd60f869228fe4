//! Image decoding and display units
//!
//! Downloaded image bytes go through an injected [`ImageDecoder`] so the
//! embedding application decides which formats it accepts. Decoded images
//! can then be wrapped in [`Sprite`]s for rendering.

pub mod decoder;
pub mod mock;

pub use decoder::DynamicImageDecoder;
pub use mock::MockImageDecoder;

use crate::Result;
use image::DynamicImage;

/// Turns downloaded bytes into an in-memory image.
pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage>;
}

/// Pixel rectangle inside an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Normalized anchor point, `(0, 0)` bottom-left to `(1, 1)` top-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl Pivot {
    pub const CENTER: Pivot = Pivot { x: 0.5, y: 0.5 };
}

impl Default for Pivot {
    fn default() -> Self {
        Self::CENTER
    }
}

/// A renderable view over a decoded image.
#[derive(Debug, Clone, Copy)]
pub struct Sprite<'a> {
    pub image: &'a DynamicImage,
    pub rect: Rect,
    pub pivot: Pivot,
}

impl<'a> Sprite<'a> {
    /// Sprite covering the whole image, centered.
    pub fn new(image: &'a DynamicImage) -> Self {
        Self {
            image,
            rect: Rect {
                x: 0.0,
                y: 0.0,
                width: image.width() as f32,
                height: image.height() as f32,
            },
            pivot: Pivot::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_covers_full_image_with_center_pivot() {
        let image = DynamicImage::new_rgba8(32, 16);
        let sprite = Sprite::new(&image);

        assert_eq!(
            sprite.rect,
            Rect {
                x: 0.0,
                y: 0.0,
                width: 32.0,
                height: 16.0
            }
        );
        assert_eq!(sprite.pivot, Pivot::CENTER);
    }
}
