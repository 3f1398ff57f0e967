//! Persistence adapter for the `user` table
//!
//! All SurrealDB calls live behind [`UserRepository`]; handlers never talk
//! to the driver directly. Absent records are represented as `Ok(None)`,
//! not as errors.

pub mod error;
pub mod users;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation, RepositoryResult};
pub use users::UserRepository;
