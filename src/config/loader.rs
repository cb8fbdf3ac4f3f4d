//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{AnalyticsError, AnalyticsResult};

use super::types::{AnalyticsConfig, LayoutConfig, RollupConfig};

/// Loads and provides access to engine configuration.
///
/// # File Format
///
/// ```text
/// layout:
///   x_spacing: 300
///   y_spacing: 200
/// rollups:
///   net_pay_code: "NET_PAY"
///   top_events: 10
///   salary_bucket_bounds: [1500, 3000, 5000, 8000]
///   company_name_filter: null
/// ```
///
/// Every section and field is optional.
///
/// # Example
///
/// ```no_run
/// use people_analytics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/analytics.yaml").unwrap();
/// println!("Net pay code: {}", loader.rollups().net_pay_code);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AnalyticsConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - A value fails validation (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> AnalyticsResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyticsError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(path = %path_str, "Loaded analytics configuration");
        Ok(loader)
    }

    /// Parses configuration from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use people_analytics::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("layout:\n  x_spacing: 120\n")?;
    /// assert_eq!(loader.layout().x_spacing, 120.0);
    /// assert_eq!(loader.layout().y_spacing, 200.0);
    /// # Ok::<(), people_analytics::error::AnalyticsError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> AnalyticsResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, source: &str) -> AnalyticsResult<Self> {
        // An empty document deserializes to unit, not a mapping.
        let config: AnalyticsConfig = if content.trim().is_empty() {
            AnalyticsConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| AnalyticsError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?
        };

        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Returns the layout settings.
    pub fn layout(&self) -> &LayoutConfig {
        &self.config.layout
    }

    /// Returns the rollup settings.
    pub fn rollups(&self) -> &RollupConfig {
        &self.config.rollups
    }
}
