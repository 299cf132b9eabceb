//! Resize worker: turns storage upload notifications into 512×512 RGB JPEG
//! copies under `processed/resize/`, reporting partial failure per batch.

pub mod config;
pub mod constant;
pub mod errors;
pub mod event;
pub mod imaging;
pub mod setup;
pub mod storage;
pub mod workflow;

#[cfg(test)]
mod test_support;

pub use errors::BatchError;
pub use event::BatchEvent;
pub use workflow::{BatchProcessor, ProcessingResult, Summary, TransformPipeline};
