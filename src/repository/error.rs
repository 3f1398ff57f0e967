//! Repository error types
//!
//! Structured errors for persistence operations, carrying the operation
//! being performed and a coarse failure category. The HTTP layer collapses
//! all of these into one opaque 500 response; the structure exists for
//! logging and retriability checks.

use std::fmt;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Operation being performed when the error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Establishing the database connection
    Connect,
    /// Finding all records
    FindAll,
    /// Finding a single record by id
    FindById,
    /// Creating a new record
    Create,
    /// Updating an existing record
    Update,
    /// Deleting a record
    Delete,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => write!(f, "connect"),
            Self::FindAll => write!(f, "find_all"),
            Self::FindById => write!(f, "find_by_id"),
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Failed to establish or use the connection
    ConnectionFailed,
    /// Query execution failed
    QueryFailed,
    /// Operation timed out
    Timeout,
    /// Permission denied by the store
    PermissionDenied,
    /// Serialization or deserialization error
    Serialization,
    /// Other/unknown error
    Other,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::QueryFailed => write!(f, "query_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::PermissionDenied => write!(f, "permission_denied"),
            Self::Serialization => write!(f, "serialization"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Structured repository error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
        }
    }

    /// Create a connection failed error
    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::Connect,
            RepositoryErrorKind::ConnectionFailed,
            message,
        )
    }

    /// Classify a driver error for the given operation
    ///
    /// SurrealDB surfaces most failures as strings; the category is derived
    /// from the message the same way the driver's own tooling does.
    pub fn from_surreal(operation: RepositoryOperation, err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        let lower = msg.to_lowercase();

        let kind = if lower.contains("timeout") || lower.contains("timed out") {
            RepositoryErrorKind::Timeout
        } else if lower.contains("connect")
            || lower.contains("connection")
            || lower.contains("refused")
        {
            RepositoryErrorKind::ConnectionFailed
        } else if lower.contains("permission")
            || lower.contains("not allowed")
            || lower.contains("denied")
        {
            RepositoryErrorKind::PermissionDenied
        } else if lower.contains("deserializ") || lower.contains("serializ") {
            RepositoryErrorKind::Serialization
        } else if lower.contains("parse") || lower.contains("syntax") {
            RepositoryErrorKind::QueryFailed
        } else {
            RepositoryErrorKind::Other
        };

        Self::new(operation, kind, msg)
    }

    /// Check if this error is retriable (transient errors that may succeed on retry)
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind,
            RepositoryErrorKind::ConnectionFailed | RepositoryErrorKind::Timeout
        )
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )
    }
}

impl std::error::Error for RepositoryError {}
