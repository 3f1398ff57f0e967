//! # user-service
//!
//! HTTP CRUD service exposing a single `user` resource backed by SurrealDB.
//!
//! ## Features
//!
//! - **REST surface**: list/get/create/update/delete under `/users`
//! - **Documentation**: OpenAPI 3.0 generated from route annotations,
//!   browsable via Swagger UI at `/api-docs`
//! - **Health checks**: liveness and readiness probes
//! - **Graceful shutdown**: proper signal handling (SIGTERM, SIGINT)
//!
//! The database connection is established in the background at startup;
//! a connection failure is logged but never prevents the HTTP listener
//! from accepting requests.
//!
//! ## Example
//!
//! ```rust,no_run
//! use user_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config);
//!
//!     let state = AppState::new(config);
//!     state.spawn_database_init();
//!
//!     let app = user_service::routes::router(state);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod database;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod repository;
pub mod routes;
pub mod state;

/// Commonly used types, re-exported for convenience
pub mod prelude {
    pub use crate::config::{Config, ServiceConfig, SurrealDbConfig};
    pub use crate::database::SurrealClient;
    pub use crate::error::{Error, ErrorResponse, Result};
    pub use crate::models::{CreateUserRequest, UpdateUserRequest, User};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{RepositoryError, UserRepository};
    pub use crate::state::AppState;
}
