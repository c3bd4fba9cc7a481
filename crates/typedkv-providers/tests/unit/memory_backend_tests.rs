//! Memory Backend Tests

use bytes::Bytes;
use futures::TryStreamExt;
use typedkv_domain::ports::{BackendOperation, KvBackend};
use typedkv_domain::value_objects::{GetOptions, ListOptions, PutOptions, Representation};
use typedkv_providers::kv::MemoryKvBackend;

async fn seed(backend: &MemoryKvBackend, keys: &[&str]) {
    for key in keys {
        backend
            .write(key, Bytes::from(key.to_string()), &PutOptions::default())
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_memory_backend_basic_operations() {
    let backend = MemoryKvBackend::new();
    let metadata = serde_json::json!({"owner": "tests"});

    backend
        .write(
            "greeting",
            Bytes::from_static(b"hello"),
            &PutOptions::new().with_metadata(metadata.clone()),
        )
        .await
        .unwrap();

    let entry = backend
        .read("greeting", Representation::Text, &GetOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(&entry.value[..], b"hello");
    assert_eq!(entry.metadata, Some(metadata));

    backend.remove("greeting").await.unwrap();
    assert!(
        backend
            .read("greeting", Representation::Text, &GetOptions::default())
            .await
            .unwrap()
            .is_none()
    );
    assert!(backend.is_empty());
}

#[tokio::test]
async fn test_memory_backend_absent_key_and_idempotent_remove() {
    let backend = MemoryKvBackend::new();

    assert!(
        backend
            .read("missing", Representation::Text, &GetOptions::default())
            .await
            .unwrap()
            .is_none()
    );
    backend.remove("missing").await.unwrap();
    backend.remove("missing").await.unwrap();
}

#[tokio::test]
async fn test_memory_backend_overwrite_replaces_metadata() {
    let backend = MemoryKvBackend::new();
    backend
        .write(
            "k",
            Bytes::from_static(b"1"),
            &PutOptions::new().with_metadata(serde_json::json!({"v": 1})),
        )
        .await
        .unwrap();
    backend
        .write("k", Bytes::from_static(b"2"), &PutOptions::default())
        .await
        .unwrap();

    let entry = backend
        .read("k", Representation::Text, &GetOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(&entry.value[..], b"2");
    assert!(entry.metadata.is_none());
    assert_eq!(backend.len(), 1);
}

#[tokio::test]
async fn test_memory_backend_lists_in_key_order_with_prefix() {
    let backend = MemoryKvBackend::new();
    seed(&backend, &["user:2", "order:1", "user:1", "user:10", "users"]).await;

    let page = backend
        .enumerate(&ListOptions::new().with_prefix("user:"))
        .await
        .unwrap();

    assert!(page.list_complete);
    assert!(page.cursor.is_none());
    assert_eq!(
        page.names().collect::<Vec<_>>(),
        vec!["user:1", "user:10", "user:2"]
    );
}

#[tokio::test]
async fn test_memory_backend_paginates_with_cursor() {
    let backend = MemoryKvBackend::new();
    seed(&backend, &["a", "b", "c", "d", "e"]).await;

    let first = backend
        .enumerate(&ListOptions::new().with_limit(2))
        .await
        .unwrap();
    assert!(!first.list_complete);
    assert_eq!(first.names().collect::<Vec<_>>(), vec!["a", "b"]);

    let second = backend
        .enumerate(
            &ListOptions::new()
                .with_limit(2)
                .with_cursor(first.cursor.clone().unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(second.names().collect::<Vec<_>>(), vec!["c", "d"]);

    let third = backend
        .enumerate(
            &ListOptions::new()
                .with_limit(2)
                .with_cursor(second.cursor.clone().unwrap()),
        )
        .await
        .unwrap();
    assert!(third.list_complete);
    assert_eq!(third.names().collect::<Vec<_>>(), vec!["e"]);
}

#[tokio::test]
async fn test_memory_backend_exact_page_boundary_is_complete() {
    let backend = MemoryKvBackend::new();
    seed(&backend, &["a", "b"]).await;

    let page = backend
        .enumerate(&ListOptions::new().with_limit(2))
        .await
        .unwrap();
    assert!(page.list_complete);
    assert_eq!(page.keys.len(), 2);
}

#[tokio::test]
async fn test_memory_backend_page_limit_caps_requested_limit() {
    let backend = MemoryKvBackend::with_page_limit(2);
    seed(&backend, &["a", "b", "c"]).await;

    let page = backend
        .enumerate(&ListOptions::new().with_limit(50))
        .await
        .unwrap();
    assert_eq!(page.keys.len(), 2);
    assert!(!page.list_complete);
}

#[tokio::test]
async fn test_memory_backend_rejects_invalid_cursor() {
    let backend = MemoryKvBackend::new();
    let result = backend
        .enumerate(&ListOptions::new().with_cursor("%%%"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_memory_backend_records_expiration() {
    let backend = MemoryKvBackend::new();
    backend
        .write(
            "absolute",
            Bytes::from_static(b"x"),
            &PutOptions::new().with_expiration(4_000_000_000),
        )
        .await
        .unwrap();
    backend
        .write(
            "relative",
            Bytes::from_static(b"x"),
            &PutOptions::new().with_expiration_ttl(60),
        )
        .await
        .unwrap();

    let page = backend.enumerate(&ListOptions::new()).await.unwrap();
    let absolute = page.keys.iter().find(|k| k.name == "absolute").unwrap();
    let relative = page.keys.iter().find(|k| k.name == "relative").unwrap();

    assert_eq!(absolute.expiration, Some(4_000_000_000));
    assert!(relative.expiration.unwrap() > 1_600_000_000);

    // Recorded, not enforced
    assert!(
        backend
            .read("relative", Representation::Text, &GetOptions::default())
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_memory_backend_injected_failures() {
    let backend = MemoryKvBackend::new();
    backend.inject_failure(BackendOperation::Read, "unreachable");

    let err = backend
        .read("k", Representation::Text, &GetOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("unreachable"));

    // Other operations are unaffected
    backend
        .write("k", Bytes::from_static(b"v"), &PutOptions::default())
        .await
        .unwrap();

    backend.clear_failures();
    assert!(
        backend
            .read("k", Representation::Text, &GetOptions::default())
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_memory_backend_default_stream_read() {
    let backend = MemoryKvBackend::new();
    backend
        .write("blob", Bytes::from(vec![7u8; 100]), &PutOptions::default())
        .await
        .unwrap();

    let stream = backend
        .read_stream("blob", &GetOptions::default())
        .await
        .unwrap()
        .unwrap();
    let chunks: Vec<Bytes> = stream.try_collect().await.unwrap();
    let total: usize = chunks.iter().map(Bytes::len).sum();
    assert_eq!(total, 100);

    assert!(
        backend
            .read_stream("missing", &GetOptions::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_memory_backend_clones_share_state() {
    let backend = MemoryKvBackend::new();
    let clone = backend.clone();
    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        clone
            .write("shared", Bytes::from_static(b"1"), &PutOptions::default())
            .await
            .unwrap();
    });
    assert_eq!(backend.len(), 1);
    assert_eq!(backend.backend_name(), "memory");
}
