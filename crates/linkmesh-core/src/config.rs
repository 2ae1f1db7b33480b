//! Graph configuration for linkmesh
//!
//! Configuration is plain TOML. Every field has a default, so an empty
//! file (or no file at all) yields [`GraphConfig::default`].

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::Result;

pub use types::{
    GraphConfig, LoggingConfig, SearchConfig, SearchStrategy, DEFAULT_RECURSION_LIMIT,
};

impl GraphConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), strategy = %config.search.strategy, "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the search cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.search.recursion_limit == 0 {
            bail_invalid!("search.recursion_limit", self.search.recursion_limit);
        }
        Ok(())
    }
}
