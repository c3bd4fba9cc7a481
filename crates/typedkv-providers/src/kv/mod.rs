//! Key-Value Backend Implementations
//!
//! ## Backend Selection Guide
//!
//! - **Tests and local runs**: `MemoryKvBackend`. Records but never enforces
//!   expiration, and does not bound metadata size.
//! - **Deployments**: `RedisKvBackend`. Expiration is enforced by Redis.

#[cfg(feature = "backend-memory")]
pub mod memory;
#[cfg(feature = "backend-redis")]
pub mod redis;

#[cfg(feature = "backend-memory")]
pub use memory::MemoryKvBackend;
#[cfg(feature = "backend-redis")]
pub use redis::RedisKvBackend;
