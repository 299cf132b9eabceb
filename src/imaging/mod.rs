//! Image collaborators
//!
//! `ImageCodec` is the decode/resize/convert/encode surface the transform
//! pipeline needs; `ImageCrateCodec` implements it on top of the `image` crate.

pub mod image_crate;

pub use image_crate::ImageCrateCodec;

use anyhow::Result;

pub trait ImageCodec {
    /// Decoded in-memory image. Dropping it releases its pixel buffer.
    type Image;

    /// MIME type of the bytes produced by [`ImageCodec::encode`].
    const CONTENT_TYPE: &'static str;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image>;

    fn dimensions(&self, image: &Self::Image) -> (u32, u32);

    /// Scale to exactly `width`×`height`, ignoring the source aspect ratio.
    fn resize(&self, image: &Self::Image, width: u32, height: u32) -> Result<Self::Image>;

    /// Whether the image is plain 8-bit three-channel color.
    fn is_rgb(&self, image: &Self::Image) -> bool;

    /// Convert to plain three-channel color. Alpha is discarded, not composited.
    fn to_rgb(&self, image: &Self::Image) -> Result<Self::Image>;

    fn encode(&self, image: &Self::Image) -> Result<Vec<u8>>;
}

impl<C: ImageCodec + ?Sized> ImageCodec for &C {
    type Image = C::Image;

    const CONTENT_TYPE: &'static str = C::CONTENT_TYPE;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image> {
        (**self).decode(bytes)
    }

    fn dimensions(&self, image: &Self::Image) -> (u32, u32) {
        (**self).dimensions(image)
    }

    fn resize(&self, image: &Self::Image, width: u32, height: u32) -> Result<Self::Image> {
        (**self).resize(image, width, height)
    }

    fn is_rgb(&self, image: &Self::Image) -> bool {
        (**self).is_rgb(image)
    }

    fn to_rgb(&self, image: &Self::Image) -> Result<Self::Image> {
        (**self).to_rgb(image)
    }

    fn encode(&self, image: &Self::Image) -> Result<Vec<u8>> {
        (**self).encode(image)
    }
}
