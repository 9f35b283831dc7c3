// Re-export modules
pub mod analyzer;
pub mod categorize;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod normalize;
pub mod parsers;
pub mod recommend;
pub mod results;
pub mod server;

// Re-export commonly used types for convenience
pub use analyzer::PageAnalyzer;
pub use categorize::{LinkCategory, categorize};
pub use error::AnalysisError;
pub use normalize::normalize;
pub use results::{AnalysisResult, CategorizedLinks, ImageRecord, LinkRecord, PageMetadata};

use config::{AppConfig, HeaderProfile};
use recommend::Recommender;
use server::{AppState, HttpServer};
use std::error::Error;
use std::sync::Arc;

/// Main builder wiring configuration into an analyzer, recommender and server
#[derive(Debug, Clone, Default)]
pub struct LinkScope {
    config: AppConfig,
}

impl LinkScope {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let config = AppConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, Box<dyn Error>> {
        let config = AppConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Override the outbound request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.analyzer.fetch.timeout_secs = timeout_secs;
        self
    }

    /// Override the outbound header profile
    pub fn with_profile(mut self, profile: HeaderProfile) -> Self {
        self.config.analyzer.fetch.profile = profile;
        self
    }

    /// Override the address the HTTP server listens on
    pub fn with_listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server.listen_addr = addr.into();
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the page analyzer
    pub fn analyzer(&self) -> Result<PageAnalyzer, Box<dyn Error>> {
        PageAnalyzer::new(&self.config.analyzer)
    }

    /// Build the configured recommender
    pub fn recommender(&self) -> Arc<dyn Recommender> {
        recommend::from_kind(self.config.recommender)
    }

    /// Build the shared state for the HTTP handlers
    pub fn app_state(&self) -> Result<AppState, Box<dyn Error>> {
        Ok(AppState {
            analyzer: Arc::new(self.analyzer()?),
            recommender: self.recommender(),
        })
    }

    /// Build the HTTP server
    pub fn server(&self) -> Result<HttpServer, Box<dyn Error>> {
        Ok(HttpServer::new(self.config.server.clone(), self.app_state()?))
    }
}
