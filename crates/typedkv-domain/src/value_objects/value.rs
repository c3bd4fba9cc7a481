//! Stored and written values

use bytes::{Bytes, BytesMut};
use futures::{Stream, TryStreamExt, stream};
use serde_json::Value;
use std::fmt;
use std::pin::Pin;

/// Boxed stream of byte chunks
pub type ByteStream = Pin<Box<dyn Stream<Item = std::io::Result<Bytes>> + Send + 'static>>;

/// A value handed to `put`
///
/// Exactly one representation per write. Streams are drained before the
/// backend write is issued.
pub enum KvValue {
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Bytes(Bytes),
    /// Byte stream
    Stream(ByteStream),
}

impl KvValue {
    /// Wrap a byte stream
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = std::io::Result<Bytes>> + Send + 'static,
    {
        Self::Stream(Box::pin(stream))
    }

    /// Collapse into a single buffer, draining a stream if necessary
    pub async fn into_bytes(self) -> std::io::Result<Bytes> {
        match self {
            Self::Text(text) => Ok(Bytes::from(text)),
            Self::Bytes(bytes) => Ok(bytes),
            Self::Stream(stream) => {
                let buf = stream
                    .try_fold(BytesMut::new(), |mut acc, chunk| async move {
                        acc.extend_from_slice(&chunk);
                        Ok(acc)
                    })
                    .await?;
                Ok(buf.freeze())
            }
        }
    }

    /// Short name of the representation
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Stream(_) => "stream",
        }
    }
}

impl fmt::Debug for KvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<String> for KvValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for KvValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Bytes> for KvValue {
    fn from(value: Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for KvValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(value))
    }
}

/// What a backend returns for a present key
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    /// Stored bytes
    pub value: Bytes,
    /// Stored metadata, if any
    pub metadata: Option<Value>,
}

impl StoredEntry {
    /// Entry without metadata
    pub fn new<B: Into<Bytes>>(value: B) -> Self {
        Self {
            value: value.into(),
            metadata: None,
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Option<Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Split a buffer into a stream of chunks of at most `chunk_size` bytes
pub fn chunked_stream(bytes: Bytes, chunk_size: usize) -> ByteStream {
    let chunk_size = chunk_size.max(1);
    let mut chunks = Vec::with_capacity(bytes.len() / chunk_size + 1);
    let mut offset = 0;
    while offset < bytes.len() {
        let end = (offset + chunk_size).min(bytes.len());
        chunks.push(Ok(bytes.slice(offset..end)));
        offset = end;
    }
    Box::pin(stream::iter(chunks))
}
