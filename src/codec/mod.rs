//! Image codec seam: decoding sources and encoding ICO containers

pub mod image_codec;
pub mod traits;

pub use image_codec::{DecodedImage, ImageCodec};
pub use traits::IconCodec;
