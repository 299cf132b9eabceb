use super::{pipeline::TransformPipeline, types::ProcessingResult};
use crate::{
    errors::BatchError,
    event::{BatchEvent, ChangeRecord, OuterRecord},
    imaging::ImageCodec,
    storage::ObjectStore,
};
use log::{error, info};
use std::time::Instant;

/// Runs the transform pipeline for every change record of a notification
/// batch and folds the per-item outcomes into counters.
///
/// Failures are isolated at both levels: a bad outer record counts once and
/// is skipped, a bad change record counts once and is skipped. Processing is
/// strictly sequential and in delivery order.
pub struct BatchProcessor<S, C> {
    pipeline: TransformPipeline<S, C>,
}

impl<S: ObjectStore, C: ImageCodec> BatchProcessor<S, C> {
    pub fn new(store: S, codec: C) -> Self {
        Self {
            pipeline: TransformPipeline::new(store, codec),
        }
    }

    pub fn process(&self, event: &BatchEvent) -> ProcessingResult {
        info!("Resize batch triggered");
        info!("Event received with {} outer records", event.records.len());
        let start_time = Instant::now();

        let mut result = ProcessingResult::default();
        for outer in &event.records {
            match self.process_outer(outer) {
                Ok(tally) => result.merge(tally),
                Err(err) => {
                    error!("{}", err);
                    result.failed += 1;
                }
            }
        }

        info!(
            duration = &*format!("{:?}", start_time.elapsed());
            "Processing complete: {} succeeded, {} failed",
            result.processed,
            result.failed
        );
        result
    }

    fn process_outer(&self, outer: &OuterRecord) -> Result<ProcessingResult, BatchError> {
        let inner = outer.inner_batch().map_err(BatchError::OuterParse)?;

        let mut tally = ProcessingResult::default();
        for change in &inner.records {
            let outcome = self.process_change(change);
            if let Err(err) = &outcome {
                error!("{}", err);
            }
            tally.record(&outcome);
        }
        Ok(tally)
    }

    fn process_change(&self, change: &ChangeRecord) -> Result<String, BatchError> {
        let descriptor = change
            .descriptor()
            .map_err(|source| BatchError::item(None, source))?;
        info!("Processing: s3://{}/{}", descriptor.bucket, descriptor.key);

        let start_time = Instant::now();
        match self.pipeline.run(&descriptor.bucket, &descriptor.key) {
            Ok(output_key) => {
                info!(
                    duration = &*format!("{:?}", start_time.elapsed());
                    "Finished s3://{}/{}", descriptor.bucket, descriptor.key
                );
                Ok(output_key)
            }
            Err(source) => Err(BatchError::item(Some(descriptor), source)),
        }
    }
}
