//! Backend Failure Mapping Tests
//!
//! Every backend failure surfaces as exactly one taxonomy kind.

use typedkv_application::KvStore;
use typedkv_domain::error::{ErrorKind, KvError};
use typedkv_domain::ports::BackendOperation;
use typedkv_domain::value_objects::{GetOptions, ListOptions, PutOptions};
use typedkv_providers::kv::MemoryKvBackend;

fn failing(operation: BackendOperation) -> KvStore {
    let backend = MemoryKvBackend::new();
    backend.inject_failure(operation, "backend unavailable");
    KvStore::from_backend(backend)
}

#[tokio::test]
async fn test_read_failure_is_get_failure_for_every_representation() {
    let kv = failing(BackendOperation::Read);

    let err = kv.get("k", GetOptions::default()).await.unwrap_err();
    assert_eq!(err.key, "k");
    assert!(err.cause.message().contains("backend unavailable"));

    assert!(kv.get_json::<serde_json::Value>("k", GetOptions::default()).await.is_err());
    assert!(kv.get_array_buffer("k", GetOptions::default()).await.is_err());
    assert!(kv.get_stream("k", GetOptions::default()).await.is_err());
    assert!(kv.get_with_metadata("k", GetOptions::default()).await.is_err());
    assert!(kv.get_or_else("k", "default", GetOptions::default()).await.is_err());
}

#[tokio::test]
async fn test_read_failure_in_get_or_fail_is_not_key_not_found() {
    let kv = failing(BackendOperation::Read);
    let err = kv.get_or_fail("k", GetOptions::default()).await.unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(KvError::from(err).kind(), ErrorKind::GetFailure);
}

#[tokio::test]
async fn test_write_failure_is_put_failure() {
    let kv = failing(BackendOperation::Write);

    let err = kv.put("k", "v", PutOptions::default()).await.unwrap_err();
    assert_eq!(err.key, "k");
    let err = KvError::from(err);
    assert_eq!(err.kind(), ErrorKind::PutFailure);
    assert_eq!(err.key(), Some("k"));

    assert!(
        kv.put_json("k", &serde_json::json!({"a": 1}), PutOptions::default())
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_remove_failure_is_delete_failure() {
    let kv = failing(BackendOperation::Remove);
    let err = kv.delete("k").await.unwrap_err();
    assert_eq!(err.key, "k");
    assert_eq!(KvError::from(err).kind(), ErrorKind::DeleteFailure);
}

#[tokio::test]
async fn test_enumerate_failure_is_list_failure() {
    let kv = failing(BackendOperation::Enumerate);
    let err = kv
        .list(ListOptions::new().with_prefix("user:"))
        .await
        .unwrap_err();
    assert_eq!(err.prefix.as_deref(), Some("user:"));
    assert!(err.to_string().contains("user:"));

    let err = kv.list_all(ListOptions::new()).await.unwrap_err();
    assert_eq!(KvError::from(err).kind(), ErrorKind::ListFailure);
}

#[tokio::test]
async fn test_invalid_cursor_is_list_failure() {
    let kv = KvStore::from_backend(MemoryKvBackend::new());
    let err = kv
        .list(ListOptions::new().with_cursor("***"))
        .await
        .unwrap_err();
    assert!(err.cause.message().contains("invalid list cursor"));
}
