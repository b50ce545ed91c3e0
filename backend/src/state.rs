//! Application state shared by every handler.

use std::sync::Arc;

use crate::auth::AuthService;
use crate::config::Config;
use crate::database::{self, Database};

pub struct AppState {
    pub db: Database,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(db: Database, auth: AuthService) -> Self {
        Self { db, auth }
    }

    /// Fresh in-memory store plus credential adapters built from `config`.
    pub fn from_config(config: &Config) -> Arc<Self> {
        Arc::new(Self::new(
            database::init_store(),
            AuthService::from_config(config),
        ))
    }
}
