//! CLI configuration.

use anyhow::{Context, Result};
use serde::Deserialize;

/// CLI configuration file (`vitrine.toml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
    /// Synthetic catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Load from an explicit path, or fall back to defaults when none given.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

/// Settings for the synthetic catalog provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Number of products to generate.
    pub count: usize,
    /// Seed for the generator; the same seed yields the same catalog.
    pub seed: u64,
    /// Simulated fetch latency in milliseconds.
    pub latency_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            count: 50,
            seed: 20,
            latency_ms: 800,
        }
    }
}

/// Settings for list display.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Products per page.
    pub per_page: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { per_page: 12 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.catalog.count, 50);
        assert_eq!(config.display.per_page, 12);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: CliConfig = toml::from_str("[catalog]\ncount = 8\n").unwrap();
        assert_eq!(config.catalog.count, 8);
        assert_eq!(config.catalog.latency_ms, 800);
        assert_eq!(config.display.per_page, 12);
    }
}
