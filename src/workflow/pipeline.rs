use crate::{
    constant::{CANONICAL_HEIGHT, CANONICAL_WIDTH},
    event::derived_output_key,
    imaging::ImageCodec,
    storage::ObjectStore,
};
use anyhow::{Context, Result};
use log::info;

/// Any stage failure of [`TransformPipeline::run`], with the stage in its context chain.
pub type TransformError = anyhow::Error;

/// Fetch → decode → resize → normalize → encode → store, for one object.
///
/// Every decoded image is owned by the stage that produced it and dropped as
/// soon as the next stage has its output, or on the early return of a failing
/// stage. Nothing outlives a call to [`TransformPipeline::run`].
pub struct TransformPipeline<S, C> {
    store: S,
    codec: C,
}

impl<S: ObjectStore, C: ImageCodec> TransformPipeline<S, C> {
    pub fn new(store: S, codec: C) -> Self {
        Self { store, codec }
    }

    /// Resize `bucket/key` to the canonical size and store it under the
    /// derived key in the same bucket. Returns the output key.
    ///
    /// A single attempt is made; the first failing stage ends the run.
    pub fn run(&self, bucket: &str, key: &str) -> Result<String, TransformError> {
        let output_key = derived_output_key(key)?;

        let bytes = self
            .store
            .download(bucket, key)
            .context(format!("failed to download s3://{}/{}", bucket, key))?;

        let resized = self.decode_and_resize(bytes)?;
        let normalized = self.normalize(resized)?;
        let (width, height) = self.codec.dimensions(&normalized);
        info!("Resized image size: {}x{}", width, height);

        let encoded = self
            .codec
            .encode(&normalized)
            .context("failed to encode resized image")?;
        drop(normalized);

        self.store
            .upload(bucket, &output_key, encoded, C::CONTENT_TYPE)
            .context(format!("failed to upload s3://{}/{}", bucket, output_key))?;
        info!("Uploaded resized image to: {}", output_key);

        Ok(output_key)
    }

    fn decode_and_resize(&self, bytes: Vec<u8>) -> Result<C::Image> {
        let original = self
            .codec
            .decode(&bytes)
            .context("failed to decode image")?;
        drop(bytes);

        let (width, height) = self.codec.dimensions(&original);
        info!("Downloaded image size: {}x{}", width, height);

        self.codec
            .resize(&original, CANONICAL_WIDTH, CANONICAL_HEIGHT)
            .context(format!(
                "failed to resize image to {}x{}",
                CANONICAL_WIDTH, CANONICAL_HEIGHT
            ))
    }

    fn normalize(&self, image: C::Image) -> Result<C::Image> {
        if self.codec.is_rgb(&image) {
            return Ok(image);
        }
        self.codec
            .to_rgb(&image)
            .context("failed to convert image to RGB")
    }
}
