//! JSON Schema Codec Tests

use serde_json::{Value, json};
use typedkv_application::schema::JsonSchemaCodec;
use typedkv_application::{KvStore, SchemaStore};
use typedkv_domain::constants::SCHEMA_METADATA_FIELD;
use typedkv_domain::ports::ValidationSchema;
use typedkv_domain::value_objects::{GetOptions, PutOptions};
use typedkv_providers::kv::MemoryKvBackend;

fn product_schema() -> Value {
    json!({
        "$id": "https://example.com/product.json",
        "type": "object",
        "properties": {
            "sku": {"type": "string", "minLength": 3},
            "price": {"type": "number", "minimum": 0}
        },
        "required": ["sku", "price"]
    })
}

#[test]
fn test_identifier_taken_from_document() {
    let codec = JsonSchemaCodec::<Value>::new(&product_schema()).unwrap();
    assert_eq!(codec.identifier(), Some("https://example.com/product.json"));

    let codec = codec.with_identifier("product/v2");
    assert_eq!(codec.identifier(), Some("product/v2"));
}

#[test]
fn test_invalid_document_rejected() {
    let result = JsonSchemaCodec::<Value>::new(&json!({"type": "string", "pattern": "(unclosed"}));
    assert!(result.is_err());
}

#[test]
fn test_decode_reports_every_violation() {
    let codec = JsonSchemaCodec::<Value>::new(&product_schema()).unwrap();
    let err = codec.decode(json!({"sku": "x", "price": -1})).unwrap_err();
    assert!(err.message().contains("; "));
}

#[tokio::test]
async fn test_json_schema_store() {
    let raw = KvStore::from_backend(MemoryKvBackend::new());
    let codec = JsonSchemaCodec::<Value>::new(&product_schema()).unwrap();
    let products = SchemaStore::new(raw.clone(), codec);

    let widget = json!({"sku": "W-100", "price": 9.5});
    products
        .put("product:w100", &widget, PutOptions::default())
        .await
        .unwrap();
    assert_eq!(
        products
            .get("product:w100", GetOptions::default())
            .await
            .unwrap(),
        Some(widget)
    );

    let (_, metadata) = raw
        .get_with_metadata("product:w100", GetOptions::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        metadata.unwrap()[SCHEMA_METADATA_FIELD],
        "https://example.com/product.json"
    );

    let err = products
        .put("product:bad", &json!({"sku": "W-1"}), PutOptions::default())
        .await
        .unwrap_err();
    assert!(err.cause.message().starts_with("encoding failed:"));

    raw.put_json("product:raw", &json!({"price": 1}), PutOptions::default())
        .await
        .unwrap();
    let err = products
        .get("product:raw", GetOptions::default())
        .await
        .unwrap_err();
    assert!(err.cause.message().starts_with("validation failed:"));
}
