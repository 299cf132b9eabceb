use crate::event::ChangeDescriptor;
use std::fmt;

/// Failure of one unit of work inside a batch. Neither variant aborts the batch.
#[derive(Debug)]
pub enum BatchError {
    /// The outer record's envelope or embedded payload could not be read.
    OuterParse(anyhow::Error),
    /// A single change record failed. `location` is `None` when bucket or key
    /// could not be extracted from the record.
    Item {
        location: Option<ChangeDescriptor>,
        source: anyhow::Error,
    },
}

impl BatchError {
    pub fn item(location: Option<ChangeDescriptor>, source: anyhow::Error) -> Self {
        Self::Item { location, source }
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OuterParse(source) => write!(f, "Failed to process outer record: {:#}", source),
            Self::Item {
                location: Some(location),
                source,
            } => write!(
                f,
                "Failed to process {}/{}: {:#}",
                location.bucket, location.key, source
            ),
            Self::Item {
                location: None,
                source,
            } => write!(f, "Failed to process change record: {:#}", source),
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OuterParse(source) | Self::Item { source, .. } => Some(&**source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn display_names_the_failing_object() {
        let err = BatchError::item(
            Some(ChangeDescriptor {
                bucket: "media".to_string(),
                key: "in/cat.png".to_string(),
            }),
            anyhow!("boom").context("failed to decode image"),
        );
        assert_eq!(
            err.to_string(),
            "Failed to process media/in/cat.png: failed to decode image: boom"
        );
    }

    #[test]
    fn display_without_location() {
        let err = BatchError::item(None, anyhow!("missing `s3`"));
        assert_eq!(err.to_string(), "Failed to process change record: missing `s3`");

        let err = BatchError::OuterParse(anyhow!("`Sns.Message` is not valid JSON"));
        assert_eq!(
            err.to_string(),
            "Failed to process outer record: `Sns.Message` is not valid JSON"
        );
    }
}
