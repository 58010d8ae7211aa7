//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{export, outline};
use crate::error::Result;
use crate::template::registry::DEFAULT_TEMPLATE;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Template applied when a caller does not name one
    pub default_template: String,
    /// Directory where exported decks are written
    pub export_dir: PathBuf,
    /// Maximum content sections the outline builder will produce
    pub max_outline_sections: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            default_template: DEFAULT_TEMPLATE.to_string(),
            export_dir: PathBuf::from(export::DEFAULT_EXPORT_DIR),
            max_outline_sections: outline::DEFAULT_MAX_SECTIONS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(template) = env::var("DECKFLOW_DEFAULT_TEMPLATE") {
            if !template.trim().is_empty() {
                config.default_template = template;
            }
        }

        if let Ok(dir) = env::var("DECKFLOW_EXPORT_DIR") {
            if !dir.trim().is_empty() {
                config.export_dir = PathBuf::from(dir);
            }
        }

        // Section cap can be configured via environment
        if let Ok(sections) = env::var("DECKFLOW_MAX_SECTIONS") {
            if let Ok(sections) = sections.parse::<usize>() {
                if sections > 0 {
                    config.max_outline_sections = sections;
                }
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_template, "professional");
        assert_eq!(config.max_outline_sections, 10);
        assert_eq!(config.app_name(), "deckflow");
    }
}
