use crate::constant::{STATUS_MULTI_STATUS, STATUS_OK};
use serde::Serialize;

/// Success and failure counters for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessingResult {
    pub processed: u64,
    pub failed: u64,
}

impl ProcessingResult {
    pub fn record<T, E>(&mut self, outcome: &Result<T, E>) {
        match outcome {
            Ok(_) => self.processed += 1,
            Err(_) => self.failed += 1,
        }
    }

    pub fn merge(&mut self, other: ProcessingResult) {
        self.processed += other.processed;
        self.failed += other.failed;
    }

    pub fn total(&self) -> u64 {
        self.processed + self.failed
    }

    /// 200 when nothing failed, 207 otherwise, including when everything failed.
    pub fn status_code(&self) -> u16 {
        if self.failed == 0 {
            STATUS_OK
        } else {
            STATUS_MULTI_STATUS
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            status_code: self.status_code(),
            processed: self.processed,
            failed: self.failed,
        }
    }
}

/// Value returned to the invocation harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub status_code: u16,
    pub processed: u64,
    pub failed: u64,
}

impl From<ProcessingResult> for Summary {
    fn from(result: ProcessingResult) -> Self {
        result.summary()
    }
}
