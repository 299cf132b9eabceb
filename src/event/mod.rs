//! Notification event model
//!
//! - `notification`: the outer envelope, the embedded change batch and its records
//! - `key`: object key decoding and derived output keys

pub mod key;
pub mod notification;

pub use key::{decode_object_key, derived_output_key};
pub use notification::{BatchEvent, ChangeDescriptor, ChangeRecord, InnerBatch, OuterRecord};
