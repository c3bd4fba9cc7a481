//! Provider constants

/// Registry name of the in-memory backend
pub const MEMORY_BACKEND_NAME: &str = "memory";

/// Registry name of the Redis backend
pub const REDIS_BACKEND_NAME: &str = "redis";

/// Redis URI used when none is configured
pub const REDIS_DEFAULT_URI: &str = "redis://localhost:6379";

/// Hash field holding the stored value (Redis backend)
pub const REDIS_VALUE_FIELD: &str = "value";

/// Hash field holding the serialized metadata (Redis backend)
pub const REDIS_METADATA_FIELD: &str = "metadata";
