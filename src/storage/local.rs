use super::ObjectStore;
use anyhow::{Context, Result, bail};
use log::debug;
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

/// Buckets stored as directories: object `(bucket, key)` lives at `root/bucket/key`.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf> {
        for (label, part) in [("bucket", bucket), ("key", key)] {
            if part.is_empty() {
                bail!("{} must not be empty", label);
            }
            let escapes = Path::new(part).components().any(|component| {
                !matches!(component, Component::Normal(_) | Component::CurDir)
            });
            if escapes {
                bail!("{} {:?} escapes the storage root", label, part);
            }
        }
        Ok(self.root.join(bucket).join(key))
    }
}

impl ObjectStore for LocalStore {
    fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        let path = self.object_path(bucket, key)?;
        fs::read(&path).context(format!("failed to read object file {:?}", path))
    }

    fn upload(&self, bucket: &str, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        let path = self.object_path(bucket, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context(format!("failed to create directory tree {:?}", parent))?;
        }
        fs::write(&path, &body).context(format!("failed to write object file {:?}", path))?;
        debug!("Stored {} bytes of {} at {:?}", body.len(), content_type, path);
        Ok(())
    }
}
