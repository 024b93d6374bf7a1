pub mod api;
pub mod config;
pub mod error;
pub mod extractor;
pub mod telemetry;

use std::sync::Arc;
use config::Config;
use extractor::ViewCountExtractor;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub extractor: ViewCountExtractor,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let extractor = ViewCountExtractor::new(&config.fetch)?;
        Ok(AppState {
            config: Arc::new(config),
            extractor,
        })
    }
}
