//! Domain constants
//!
//! Limits and defaults that describe the backend contract rather than any
//! particular adapter.

/// Default and maximum number of keys returned by one list page
pub const LIST_MAX_PAGE_SIZE: usize = 1000;

/// Default bound on the serialized size of entry metadata, in bytes
pub const METADATA_DEFAULT_MAX_BYTES: usize = 1024;

/// Size of chunks yielded by byte-stream reads
pub const STREAM_CHUNK_SIZE: usize = 64 * 1024;

/// Metadata field carrying the advisory schema identifier of typed writes
pub const SCHEMA_METADATA_FIELD: &str = "__schema";
