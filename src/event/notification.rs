use super::key::decode_object_key;
use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ────────────────────────────────────────────────────────────────
// Outer envelope
// ────────────────────────────────────────────────────────────────

/// One invocation's worth of outer records, in delivery order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawEvent")]
pub struct BatchEvent {
    pub records: Vec<OuterRecord>,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "Records", default)]
    records: Value,
}

impl From<RawEvent> for BatchEvent {
    fn from(raw: RawEvent) -> Self {
        let records = match raw.records {
            Value::Null => Vec::new(),
            Value::Array(items) => items.into_iter().map(OuterRecord::Envelope).collect(),
            other => vec![OuterRecord::Unlisted(other)],
        };
        Self { records }
    }
}

impl BatchEvent {
    /// Parse the invocation document. Only a document that is not a JSON
    /// object is rejected; everything inside it fails record by record later.
    pub fn from_json(document: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(document).context("invocation event is not valid JSON")?;
        if !value.is_object() {
            bail!("invocation event is not a JSON object");
        }
        serde_json::from_value(value).context("failed to read invocation event")
    }
}

/// One entry of the outer batch.
#[derive(Debug, Clone)]
pub enum OuterRecord {
    /// A messaging envelope whose `Sns.Message` holds a JSON-encoded [`InnerBatch`].
    Envelope(Value),
    /// Whatever stood in place of the `Records` list when it was not a list.
    /// Always fails, as a single outer record.
    Unlisted(Value),
}

impl OuterRecord {
    pub fn message(&self) -> Result<&str> {
        let envelope = match self {
            Self::Envelope(envelope) => envelope,
            Self::Unlisted(_) => bail!("invocation event `Records` is not a list"),
        };
        envelope
            .get("Sns")
            .ok_or_else(|| anyhow!("record has no `Sns` envelope"))?
            .get("Message")
            .ok_or_else(|| anyhow!("`Sns` envelope has no `Message`"))?
            .as_str()
            .ok_or_else(|| anyhow!("`Sns.Message` is not a string"))
    }

    pub fn inner_batch(&self) -> Result<InnerBatch> {
        let message = self.message()?;
        let value: Value =
            serde_json::from_str(message).context("`Sns.Message` is not valid JSON")?;
        if !value.is_object() {
            bail!("`Sns.Message` is not a JSON object");
        }
        serde_json::from_value(value).context("`Sns.Message` `Records` is not a list")
    }
}

// ────────────────────────────────────────────────────────────────
// Inner change batch
// ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InnerBatch {
    #[serde(rename = "Records", default, deserialize_with = "null_as_empty")]
    pub records: Vec<ChangeRecord>,
}

/// A single storage-change entry, still unvalidated.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ChangeRecord(pub Value);

#[derive(Debug, Deserialize)]
struct ChangeWire {
    s3: S3Entity,
}

#[derive(Debug, Deserialize)]
struct S3Entity {
    bucket: S3Bucket,
    object: S3Object,
}

#[derive(Debug, Deserialize)]
struct S3Bucket {
    name: String,
}

#[derive(Debug, Deserialize)]
struct S3Object {
    key: String,
}

/// Bucket and decoded key of one newly created object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDescriptor {
    pub bucket: String,
    pub key: String,
}

impl ChangeRecord {
    pub fn descriptor(&self) -> Result<ChangeDescriptor> {
        let wire = ChangeWire::deserialize(&self.0)
            .context("change record is missing `s3.bucket.name` or `s3.object.key`")?;
        Ok(ChangeDescriptor {
            bucket: wire.s3.bucket.name,
            key: decode_object_key(&wire.s3.object.key),
        })
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
