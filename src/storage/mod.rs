//! Object storage collaborators
//!
//! - `local`: buckets as directories under a root folder
//! - `memory`: in-process buckets

pub mod local;
pub mod memory;

pub use local::LocalStore;
pub use memory::{MemoryStore, StoredObject};

use anyhow::Result;

/// Download/upload capability the transform pipeline runs against.
pub trait ObjectStore {
    fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;

    /// Uploading to an existing key replaces the previous object.
    fn upload(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<()>;
}

impl<S: ObjectStore + ?Sized> ObjectStore for &S {
    fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        (**self).download(bucket, key)
    }

    fn upload(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        (**self).upload(bucket, key, body, content_type)
    }
}
