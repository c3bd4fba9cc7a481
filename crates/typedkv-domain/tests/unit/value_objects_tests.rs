//! Unit tests for domain value objects

use bytes::Bytes;
use futures::TryStreamExt;
use std::time::Duration;
use typedkv_domain::value_objects::{
    GetOptions, KvValue, ListKey, ListOptions, ListPage, PutOptions, Representation,
    chunked_stream,
};

#[test]
fn test_put_options_builder() {
    let opts = PutOptions::new()
        .with_expiration(1_900_000_000)
        .with_expiration_ttl(120)
        .with_metadata(serde_json::json!({"v": 1}));

    assert_eq!(opts.expiration, Some(1_900_000_000));
    assert_eq!(opts.expiration_ttl, Some(120));
    assert_eq!(opts.metadata, Some(serde_json::json!({"v": 1})));
}

#[test]
fn test_get_and_list_options_builders() {
    let get = GetOptions::new().with_cache_ttl(Duration::from_secs(60));
    assert_eq!(get.cache_ttl, Some(Duration::from_secs(60)));

    let list = ListOptions::new()
        .with_prefix("user:")
        .with_limit(10)
        .with_cursor("abc");
    assert_eq!(list.prefix.as_deref(), Some("user:"));
    assert_eq!(list.limit, Some(10));
    assert_eq!(list.cursor.as_deref(), Some("abc"));
}

#[test]
fn test_list_page_constructors() {
    let page = ListPage::partial(vec![ListKey::new("a"), ListKey::new("b")], "c1".to_string());
    assert!(!page.list_complete);
    assert_eq!(page.cursor.as_deref(), Some("c1"));
    assert_eq!(page.names().collect::<Vec<_>>(), vec!["a", "b"]);

    let done = ListPage::complete(vec![]);
    assert!(done.list_complete);
    assert!(done.cursor.is_none());
}

#[test]
fn test_list_page_serializes_without_empty_fields() {
    let page = ListPage::complete(vec![ListKey::new("a")]);
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"keys": [{"name": "a"}], "list_complete": true})
    );
}

#[test]
fn test_representation_display() {
    assert_eq!(Representation::ArrayBuffer.to_string(), "arrayBuffer");
    assert_eq!(Representation::Json.to_string(), "json");
}

#[tokio::test]
async fn test_kv_value_stream_drains_into_bytes() {
    let chunks = vec![
        Ok(Bytes::from_static(b"hello ")),
        Ok(Bytes::from_static(b"world")),
    ];
    let value = KvValue::stream(futures::stream::iter(chunks));
    assert_eq!(value.kind(), "stream");

    let bytes = value.into_bytes().await.unwrap();
    assert_eq!(&bytes[..], b"hello world");
}

#[tokio::test]
async fn test_kv_value_stream_error_propagates() {
    let chunks = vec![
        Ok(Bytes::from_static(b"partial")),
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "cut")),
    ];
    let value = KvValue::stream(futures::stream::iter(chunks));
    assert!(value.into_bytes().await.is_err());
}

#[tokio::test]
async fn test_chunked_stream_splits_buffer() {
    let stream = chunked_stream(Bytes::from_static(b"abcdefg"), 3);
    let chunks: Vec<Bytes> = stream.try_collect().await.unwrap();
    assert_eq!(
        chunks,
        vec![
            Bytes::from_static(b"abc"),
            Bytes::from_static(b"def"),
            Bytes::from_static(b"g"),
        ]
    );
}

#[tokio::test]
async fn test_chunked_stream_empty_buffer_yields_nothing() {
    let stream = chunked_stream(Bytes::new(), 3);
    let chunks: Vec<Bytes> = stream.try_collect().await.unwrap();
    assert!(chunks.is_empty());
}

#[test]
fn test_kv_value_conversions() {
    assert_eq!(KvValue::from("a").kind(), "text");
    assert_eq!(KvValue::from(vec![1u8, 2]).kind(), "bytes");
}
