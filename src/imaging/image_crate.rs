use super::ImageCodec;
use crate::constant::OUTPUT_CONTENT_TYPE;
use anyhow::{Context, Result, bail};
use image::{DynamicImage, ImageFormat, imageops::FilterType};
use std::io::Cursor;

/// [`ImageCodec`] backed by the `image` crate: Lanczos3 resampling and JPEG
/// output at the encoder's default quality.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    type Image = DynamicImage;

    const CONTENT_TYPE: &'static str = OUTPUT_CONTENT_TYPE;

    fn decode(&self, bytes: &[u8]) -> Result<DynamicImage> {
        image::load_from_memory(bytes).context("image crate failed to decode image from memory")
    }

    fn dimensions(&self, image: &DynamicImage) -> (u32, u32) {
        (image.width(), image.height())
    }

    fn resize(&self, image: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
        if image.width() == 0 || image.height() == 0 {
            bail!(
                "cannot resize an image with no pixels ({}x{})",
                image.width(),
                image.height()
            );
        }
        Ok(image.resize_exact(width, height, FilterType::Lanczos3))
    }

    fn is_rgb(&self, image: &DynamicImage) -> bool {
        matches!(image, DynamicImage::ImageRgb8(_))
    }

    fn to_rgb(&self, image: &DynamicImage) -> Result<DynamicImage> {
        Ok(DynamicImage::ImageRgb8(image.to_rgb8()))
    }

    fn encode(&self, image: &DynamicImage) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Jpeg)
            .context("failed to encode image as JPEG")?;
        Ok(buffer.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, Rgba, RgbaImage};

    #[test]
    fn rejects_bytes_that_are_not_an_image() {
        assert!(ImageCrateCodec.decode(b"definitely not a picture").is_err());
    }

    #[test]
    fn resize_ignores_aspect_ratio() {
        let wide = DynamicImage::ImageRgb8(image::RgbImage::new(1600, 200));
        let resized = ImageCrateCodec.resize(&wide, 512, 512).unwrap();
        assert_eq!(ImageCrateCodec.dimensions(&resized), (512, 512));

        let tiny = DynamicImage::ImageRgb8(image::RgbImage::new(3, 7));
        let resized = ImageCrateCodec.resize(&tiny, 512, 512).unwrap();
        assert_eq!(ImageCrateCodec.dimensions(&resized), (512, 512));
    }

    #[test]
    fn alpha_is_dropped_not_composited() {
        let transparent_red =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([200, 10, 10, 0])));
        assert!(!ImageCrateCodec.is_rgb(&transparent_red));

        let rgb = ImageCrateCodec.to_rgb(&transparent_red).unwrap();
        assert!(ImageCrateCodec.is_rgb(&rgb));
        assert_eq!(rgb.to_rgb8().get_pixel(0, 0).0, [200, 10, 10]);
    }

    #[test]
    fn grayscale_with_alpha_becomes_rgb() {
        let gray = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(2, 2, LumaA([90, 128])));
        let rgb = ImageCrateCodec.to_rgb(&gray).unwrap();
        assert_eq!(rgb.to_rgb8().get_pixel(1, 1).0, [90, 90, 90]);
    }

    #[test]
    fn encodes_decodable_jpeg() {
        let image = DynamicImage::ImageRgb8(image::RgbImage::new(512, 512));
        let bytes = ImageCrateCodec.encode(&image).unwrap();

        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let decoded = ImageCrateCodec.decode(&bytes).unwrap();
        assert_eq!(ImageCrateCodec.dimensions(&decoded), (512, 512));
    }
}
