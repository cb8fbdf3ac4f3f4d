//! Configuration types for layout and rollups.
//!
//! These are the only tunables of the engine. Every field has a default so a
//! YAML file only needs to name what it changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Default horizontal distance between sibling nodes.
pub const DEFAULT_X_SPACING: f64 = 300.0;

/// Default vertical distance between hierarchy levels.
pub const DEFAULT_Y_SPACING: f64 = 200.0;

/// Default event code that carries an employee's net pay.
pub const DEFAULT_NET_PAY_CODE: &str = "NET_PAY";

/// Default number of entries kept in the main events rollup.
pub const DEFAULT_TOP_EVENTS: usize = 10;

/// Spacing used when placing org-chart nodes.
///
/// # Example
///
/// ```
/// use people_analytics::config::LayoutConfig;
///
/// let layout = LayoutConfig::default();
/// assert_eq!(layout.x_spacing, 300.0);
/// assert_eq!(layout.y_spacing, 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal distance between siblings at the same level.
    pub x_spacing: f64,
    /// Vertical distance between consecutive levels.
    pub y_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            x_spacing: DEFAULT_X_SPACING,
            y_spacing: DEFAULT_Y_SPACING,
        }
    }
}

impl LayoutConfig {
    /// Checks that both spacings are finite and positive.
    pub fn validate(&self) -> AnalyticsResult<()> {
        for (field, value) in [
            ("layout.x_spacing", self.x_spacing),
            ("layout.y_spacing", self.y_spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AnalyticsError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("must be a positive number, got {}", value),
                });
            }
        }
        Ok(())
    }
}

/// Settings that shape the payroll rollups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollupConfig {
    /// The event code whose value is an employee's net pay.
    pub net_pay_code: String,
    /// Maximum number of entries in the main events rollup. `None` keeps all.
    pub top_events: Option<usize>,
    /// Inclusive upper bounds of the salary histogram buckets, ascending.
    /// One extra open-ended bucket collects everything above the last bound.
    pub salary_bucket_bounds: Vec<Decimal>,
    /// When set, only company names containing this text are offered as
    /// company filter options.
    pub company_name_filter: Option<String>,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            net_pay_code: DEFAULT_NET_PAY_CODE.to_string(),
            top_events: Some(DEFAULT_TOP_EVENTS),
            salary_bucket_bounds: vec![
                Decimal::from(1500),
                Decimal::from(3000),
                Decimal::from(5000),
                Decimal::from(8000),
            ],
            company_name_filter: None,
        }
    }
}

impl RollupConfig {
    /// Checks the net-pay code and the histogram bounds.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.net_pay_code.trim().is_empty() {
            return Err(AnalyticsError::InvalidConfig {
                field: "rollups.net_pay_code".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.salary_bucket_bounds.is_empty() {
            return Err(AnalyticsError::InvalidConfig {
                field: "rollups.salary_bucket_bounds".to_string(),
                message: "at least one bound is required".to_string(),
            });
        }

        if self
            .salary_bucket_bounds
            .windows(2)
            .any(|pair| pair[0] >= pair[1])
        {
            return Err(AnalyticsError::InvalidConfig {
                field: "rollups.salary_bucket_bounds".to_string(),
                message: "bounds must be strictly ascending".to_string(),
            });
        }

        Ok(())
    }
}

/// The complete engine configuration as stored in YAML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Org-chart layout settings.
    pub layout: LayoutConfig,
    /// Payroll rollup settings.
    pub rollups: RollupConfig,
}

impl AnalyticsConfig {
    /// Validates every section.
    pub fn validate(&self) -> AnalyticsResult<()> {
        self.layout.validate()?;
        self.rollups.validate()
    }
}
