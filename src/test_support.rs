//! Fakes shared by unit tests.

use crate::{imaging::ImageCodec, storage::ObjectStore};
use anyhow::{Result, anyhow, bail};
use image::{DynamicImage, ImageFormat};
use std::{cell::Cell, io::Cursor, rc::Rc};

pub fn encoded_png(image: DynamicImage) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

/// Source bytes understood by [`TrackingCodec::decode`].
pub fn tracked_bytes(width: u32, height: u32, rgb: bool) -> Vec<u8> {
    let mode = if rgb { "rgb" } else { "rgba" };
    format!("tracked:{}x{}:{}", width, height, mode).into_bytes()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Nowhere,
    Resize,
    Convert,
    Encode,
}

#[derive(Debug, Default)]
struct Counters {
    live: Cell<usize>,
    peak: Cell<usize>,
    created: Cell<usize>,
}

/// Image stand-in that reports its own lifetime to the codec that made it.
#[derive(Debug)]
pub struct TrackedImage {
    width: u32,
    height: u32,
    rgb: bool,
    counters: Rc<Counters>,
}

impl TrackedImage {
    fn new(counters: &Rc<Counters>, width: u32, height: u32, rgb: bool) -> Self {
        let live = counters.live.get() + 1;
        counters.live.set(live);
        counters.peak.set(counters.peak.get().max(live));
        counters.created.set(counters.created.get() + 1);
        Self {
            width,
            height,
            rgb,
            counters: Rc::clone(counters),
        }
    }
}

impl Drop for TrackedImage {
    fn drop(&mut self) {
        self.counters.live.set(self.counters.live.get() - 1);
    }
}

/// Codec whose images count how many of them are alive, failing at a chosen stage.
#[derive(Debug)]
pub struct TrackingCodec {
    fail_at: FailAt,
    counters: Rc<Counters>,
}

impl TrackingCodec {
    pub fn new(fail_at: FailAt) -> Self {
        Self {
            fail_at,
            counters: Rc::default(),
        }
    }

    pub fn live(&self) -> usize {
        self.counters.live.get()
    }

    pub fn peak(&self) -> usize {
        self.counters.peak.get()
    }

    pub fn created(&self) -> usize {
        self.counters.created.get()
    }
}

impl ImageCodec for TrackingCodec {
    type Image = TrackedImage;

    const CONTENT_TYPE: &'static str = "image/jpeg";

    fn decode(&self, bytes: &[u8]) -> Result<TrackedImage> {
        let text = std::str::from_utf8(bytes)?;
        let rest = text
            .strip_prefix("tracked:")
            .ok_or_else(|| anyhow!("not a tracked image"))?;
        let (size, mode) = rest
            .split_once(':')
            .ok_or_else(|| anyhow!("missing mode"))?;
        let (width, height) = size
            .split_once('x')
            .ok_or_else(|| anyhow!("missing size"))?;
        Ok(TrackedImage::new(
            &self.counters,
            width.parse()?,
            height.parse()?,
            mode == "rgb",
        ))
    }

    fn dimensions(&self, image: &TrackedImage) -> (u32, u32) {
        (image.width, image.height)
    }

    fn resize(&self, image: &TrackedImage, width: u32, height: u32) -> Result<TrackedImage> {
        if self.fail_at == FailAt::Resize {
            bail!("resize exploded");
        }
        Ok(TrackedImage::new(&self.counters, width, height, image.rgb))
    }

    fn is_rgb(&self, image: &TrackedImage) -> bool {
        image.rgb
    }

    fn to_rgb(&self, image: &TrackedImage) -> Result<TrackedImage> {
        if self.fail_at == FailAt::Convert {
            bail!("convert exploded");
        }
        Ok(TrackedImage::new(
            &self.counters,
            image.width,
            image.height,
            true,
        ))
    }

    fn encode(&self, image: &TrackedImage) -> Result<Vec<u8>> {
        if self.fail_at == FailAt::Encode {
            bail!("encode exploded");
        }
        Ok(format!("jpeg:{}x{}", image.width, image.height).into_bytes())
    }
}

/// Store that serves one fixed body for every key and refuses all uploads.
pub struct RejectingUploads {
    body: Vec<u8>,
}

impl RejectingUploads {
    pub fn new(body: Vec<u8>) -> Self {
        Self { body }
    }
}

impl ObjectStore for RejectingUploads {
    fn download(&self, _bucket: &str, _key: &str) -> Result<Vec<u8>> {
        Ok(self.body.clone())
    }

    fn upload(&self, bucket: &str, key: &str, _body: Vec<u8>, _content_type: &str) -> Result<()> {
        bail!("access denied for s3://{}/{}", bucket, key)
    }
}
