//! Error taxonomy for key-value operations
//!
//! The taxonomy is closed and flat: five kinds, each a plain struct carrying the
//! offending key and an opaque [`Cause`]. Operations return the narrowest type
//! that covers their failure modes (`get` returns [`GetFailure`], `get_or_fail`
//! returns [`GetOrFailError`], ...). [`KvError`] is the union of all kinds for
//! callers that want a single `match`.
//!
//! Schema validation failures are not a separate kind. They are reported as
//! [`GetFailure`] or [`PutFailure`] with a descriptive cause message.

use std::fmt;
use thiserror::Error;

/// Boxed error used as the opaque source of a [`Cause`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Opaque underlying cause of a taxonomy failure
///
/// Carries a human-readable message and, when available, the original error.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Cause {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl Cause {
    /// Create a cause from a message only
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a cause wrapping an underlying error
    pub fn with_source<S: Into<String>, E: Into<BoxError>>(message: S, source: E) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a cause whose message is the display form of the error
    pub fn from_error<E: Into<BoxError>>(error: E) -> Self {
        let source = error.into();
        Self {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying error, if one was captured
    pub fn inner(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

/// Backend read failed for a reason other than absence, or the stored value
/// could not be projected into the requested representation
#[derive(Debug, Error)]
#[error("get failed for key '{key}': {cause}")]
pub struct GetFailure {
    /// Key that was being read
    pub key: String,
    /// Underlying cause
    pub cause: Cause,
}

/// Backend write failed, including value serialization failures
#[derive(Debug, Error)]
#[error("put failed for key '{key}': {cause}")]
pub struct PutFailure {
    /// Key that was being written
    pub key: String,
    /// Underlying cause
    pub cause: Cause,
}

/// Backend delete failed
///
/// Never produced because the key was absent; deletion is idempotent.
#[derive(Debug, Error)]
#[error("delete failed for key '{key}': {cause}")]
pub struct DeleteFailure {
    /// Key that was being deleted
    pub key: String,
    /// Underlying cause
    pub cause: Cause,
}

/// Backend enumeration failed
#[derive(Debug, Error)]
#[error("list failed{}: {cause}", prefix_suffix(.prefix))]
pub struct ListFailure {
    /// Prefix requested by the failing call, if any
    pub prefix: Option<String>,
    /// Underlying cause
    pub cause: Cause,
}

/// A key resolved to absent where presence was required
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("key not found: '{key}'")]
pub struct KeyNotFound {
    /// Key that was absent
    pub key: String,
}

fn prefix_suffix(prefix: &Option<String>) -> String {
    prefix
        .as_ref()
        .map(|p| format!(" for prefix '{}'", p))
        .unwrap_or_default()
}

impl GetFailure {
    /// Create a get failure
    pub fn new<K: Into<String>>(key: K, cause: Cause) -> Self {
        Self {
            key: key.into(),
            cause,
        }
    }
}

impl PutFailure {
    /// Create a put failure
    pub fn new<K: Into<String>>(key: K, cause: Cause) -> Self {
        Self {
            key: key.into(),
            cause,
        }
    }
}

impl DeleteFailure {
    /// Create a delete failure
    pub fn new<K: Into<String>>(key: K, cause: Cause) -> Self {
        Self {
            key: key.into(),
            cause,
        }
    }
}

impl ListFailure {
    /// Create a list failure
    pub fn new(prefix: Option<String>, cause: Cause) -> Self {
        Self { prefix, cause }
    }
}

impl KeyNotFound {
    /// Create a key-not-found error
    pub fn new<K: Into<String>>(key: K) -> Self {
        Self { key: key.into() }
    }
}

/// Failure channel of `get_or_fail`
#[derive(Debug, Error)]
pub enum GetOrFailError {
    /// The read itself failed
    #[error(transparent)]
    Get(#[from] GetFailure),
    /// The read succeeded but the key was absent
    #[error(transparent)]
    NotFound(#[from] KeyNotFound),
}

impl GetOrFailError {
    /// Key the failing call was made for
    pub fn key(&self) -> &str {
        match self {
            Self::Get(e) => &e.key,
            Self::NotFound(e) => &e.key,
        }
    }

    /// Whether this is the absence case
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Discriminant of a [`KvError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`GetFailure`]
    GetFailure,
    /// See [`PutFailure`]
    PutFailure,
    /// See [`DeleteFailure`]
    DeleteFailure,
    /// See [`ListFailure`]
    ListFailure,
    /// See [`KeyNotFound`]
    KeyNotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::GetFailure => "GetFailure",
            Self::PutFailure => "PutFailure",
            Self::DeleteFailure => "DeleteFailure",
            Self::ListFailure => "ListFailure",
            Self::KeyNotFound => "KeyNotFound",
        };
        f.write_str(name)
    }
}

/// Union of every taxonomy kind
#[derive(Debug, Error)]
pub enum KvError {
    /// Read failure
    #[error(transparent)]
    Get(#[from] GetFailure),
    /// Write failure
    #[error(transparent)]
    Put(#[from] PutFailure),
    /// Delete failure
    #[error(transparent)]
    Delete(#[from] DeleteFailure),
    /// Enumeration failure
    #[error(transparent)]
    List(#[from] ListFailure),
    /// Required key was absent
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFound),
}

impl From<GetOrFailError> for KvError {
    fn from(err: GetOrFailError) -> Self {
        match err {
            GetOrFailError::Get(e) => Self::Get(e),
            GetOrFailError::NotFound(e) => Self::KeyNotFound(e),
        }
    }
}

impl KvError {
    /// Discriminant of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Get(_) => ErrorKind::GetFailure,
            Self::Put(_) => ErrorKind::PutFailure,
            Self::Delete(_) => ErrorKind::DeleteFailure,
            Self::List(_) => ErrorKind::ListFailure,
            Self::KeyNotFound(_) => ErrorKind::KeyNotFound,
        }
    }

    /// Offending key; `None` for list failures
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Get(e) => Some(&e.key),
            Self::Put(e) => Some(&e.key),
            Self::Delete(e) => Some(&e.key),
            Self::List(_) => None,
            Self::KeyNotFound(e) => Some(&e.key),
        }
    }

    /// Underlying cause; `None` for [`KeyNotFound`]
    pub fn cause(&self) -> Option<&Cause> {
        match self {
            Self::Get(e) => Some(&e.cause),
            Self::Put(e) => Some(&e.cause),
            Self::Delete(e) => Some(&e.cause),
            Self::List(e) => Some(&e.cause),
            Self::KeyNotFound(_) => None,
        }
    }
}

/// Result alias for operations whose failure may be any taxonomy kind
pub type KvResult<T> = std::result::Result<T, KvError>;
