//! # typedkv Providers
//!
//! Backend adapters implementing `typedkv_domain::ports::KvBackend`. Each
//! adapter registers itself in the `KV_BACKENDS` registry so that the
//! composition root can select it by name.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | [`kv::MemoryKvBackend`] | `backend-memory` | In-process ordered map, deterministic, for tests |
//! | `kv::RedisKvBackend` | `backend-redis` | Live adapter over a Redis server |

pub mod constants;
pub mod kv;
