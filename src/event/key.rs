use crate::constant::OUTPUT_PREFIX;
use anyhow::{Result, anyhow};
use percent_encoding::percent_decode_str;

/// Decode an object key as delivered in a storage notification.
///
/// Keys arrive form-encoded: `+` stands for a space and `%XX` for a raw byte.
/// Byte sequences that are not valid UTF-8 are replaced rather than rejected.
pub fn decode_object_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Final `/`-separated segment of a key, ignoring trailing slashes.
pub fn file_name(key: &str) -> Option<&str> {
    key.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
}

/// Output key for a decoded source key: `processed/resize/<file name>`.
///
/// Two sources sharing a file name map to the same output key.
pub fn derived_output_key(key: &str) -> Result<String> {
    let name = file_name(key).ok_or_else(|| anyhow!("object key {:?} has no file name", key))?;
    Ok(format!("{}{}", OUTPUT_PREFIX, name))
}
