//! Shared application state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Version metadata of the running binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    pub commit_hash: String,
    pub build_date: String,
    pub tag: String,
}

/// State shared by all handlers. Cheap to clone and immutable after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub version: Arc<VersionInfo>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(version: VersionInfo, config: Config) -> Self {
        Self {
            version: Arc::new(version),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            VersionInfo {
                commit_hash: "0000000000000000000000000000000000000000".to_owned(),
                build_date: "1970-01-01T00:00:00Z".to_owned(),
                tag: "v0.0.0-dev".to_owned(),
            },
            Config::from_env(),
        )
    }
}
