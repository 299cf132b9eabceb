//! Batch workflow
//!
//! - `batch`: walks outer records and change records, isolating failures
//! - `pipeline`: the per-object fetch/resize/normalize/store chain
//! - `types`: counters and the invocation summary

pub mod batch;
pub mod pipeline;
pub mod types;

pub use batch::BatchProcessor;
pub use pipeline::{TransformError, TransformPipeline};
pub use types::{ProcessingResult, Summary};
