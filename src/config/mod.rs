//! Configuration loading and management.
//!
//! This module provides the layout spacing and rollup settings, loadable
//! from a YAML file or taken from their defaults.
//!
//! # Example
//!
//! ```no_run
//! use people_analytics::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/analytics.yaml").unwrap();
//! println!("Top events: {:?}", config.rollups().top_events);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnalyticsConfig, DEFAULT_NET_PAY_CODE, DEFAULT_TOP_EVENTS, DEFAULT_X_SPACING,
    DEFAULT_Y_SPACING, LayoutConfig, RollupConfig,
};
