//! Value objects for key-value operations

pub mod options;
pub mod page;
pub mod value;

pub use options::{GetOptions, ListOptions, PutOptions, Representation};
pub use page::{ListKey, ListPage};
pub use value::{ByteStream, KvValue, StoredEntry, chunked_stream};
