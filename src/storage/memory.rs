use super::ObjectStore;
use anyhow::{Result, anyhow};
use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub body: Vec<u8>,
    pub content_type: String,
}

/// Buckets kept in memory, keyed by `(bucket, key)`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RefCell<BTreeMap<(String, String), StoredObject>>,
    upload_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) {
        self.objects.borrow_mut().insert(
            (bucket.to_string(), key.to_string()),
            StoredObject {
                body,
                content_type: content_type.to_string(),
            },
        );
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
        self.objects
            .borrow()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// Keys currently present in `bucket`, sorted.
    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.objects
            .borrow()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, k)| k.clone())
            .collect()
    }

    /// Number of successful uploads, overwrites included.
    pub fn upload_count(&self) -> usize {
        self.upload_count.get()
    }
}

impl ObjectStore for MemoryStore {
    fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        self.objects
            .borrow()
            .get(&(bucket.to_string(), key.to_string()))
            .map(|object| object.body.clone())
            .ok_or_else(|| anyhow!("object s3://{}/{} does not exist", bucket, key))
    }

    fn upload(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        self.insert(bucket, key, body, content_type);
        self.upload_count.set(self.upload_count.get() + 1);
        Ok(())
    }
}
