//! Result types built from decoded wire payloads.

pub mod image;
pub mod text;

pub use self::image::ImageResponse;
pub use text::{Answer, TextResponse};
