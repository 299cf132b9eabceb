/// Every output image is resized to exactly this width and height.
pub const CANONICAL_WIDTH: u32 = 512;
pub const CANONICAL_HEIGHT: u32 = 512;

/// Output objects are written to `<OUTPUT_PREFIX><file name>` in the source bucket.
pub const OUTPUT_PREFIX: &str = "processed/resize/";

pub const OUTPUT_CONTENT_TYPE: &str = "image/jpeg";

pub const STATUS_OK: u16 = 200;
pub const STATUS_MULTI_STATUS: u16 = 207;
