//! Application state management
//!
//! The database client is not a global: it lives in [`AppState`] and is
//! threaded explicitly into every handler via axum's `State` extractor.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::database::{self, SurrealClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,

    /// `None` until the background connection task succeeds. Handlers that
    /// need the store while it is `None` fail their request; the listener
    /// itself is never gated on the database.
    db: Arc<RwLock<Option<SurrealClient>>>,
}

impl AppState {
    /// Create a new AppState with the given configuration and no database
    /// connection
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            db: Arc::new(RwLock::new(None)),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the database client, if connected
    ///
    /// The client is reference-counted internally, so cloning is cheap.
    pub async fn db(&self) -> Option<SurrealClient> {
        self.db.read().await.clone()
    }

    /// Install a connected client
    pub async fn set_db(&self, client: SurrealClient) {
        *self.db.write().await = Some(client);
    }

    /// Establish the database connection in the background
    ///
    /// Connection failure is logged and the service keeps serving; requests
    /// that need the store return an error until a later restart succeeds.
    pub fn spawn_database_init(&self) {
        let state = self.clone();
        tokio::spawn(async move {
            match database::create_client(&state.config.database).await {
                Ok(client) => {
                    state.set_db(client).await;
                    tracing::info!("Database connection ready");
                }
                Err(e) => {
                    tracing::error!("Database connection failed, continuing without store: {}", e);
                }
            }
        });
    }
}
