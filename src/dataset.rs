//! Dataset loading functionality.
//!
//! Payroll and org-chart records are fetched upstream and handed over as
//! JSON documents. This module reads them into the engine's models.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{Company, Position};

/// Either a bare array or an object wrapping it under a named key.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document<T> {
    List(Vec<T>),
    Companies { companies: Vec<T> },
    Positions { positions: Vec<T> },
}

impl<T> Document<T> {
    fn into_records(self) -> Vec<T> {
        match self {
            Document::List(records) => records,
            Document::Companies { companies } => companies,
            Document::Positions { positions } => positions,
        }
    }
}

/// Reads payroll and position datasets from JSON.
///
/// Both loaders accept a bare array, or an object holding the array under
/// `companies` / `positions`.
///
/// # Example
///
/// ```
/// use people_analytics::dataset::DatasetLoader;
///
/// let companies = DatasetLoader::companies_from_str(
///     r#"{"companies": [{"cnpj": "001", "competency": "03/2024"}]}"#,
/// )?;
/// assert_eq!(companies.len(), 1);
///
/// let positions = DatasetLoader::positions_from_str(r#"[{"id": "ceo", "name": "CEO"}]"#)?;
/// assert_eq!(positions[0].id, "ceo");
/// # Ok::<(), people_analytics::error::AnalyticsError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads companies from a JSON file.
    pub fn load_companies<P: AsRef<Path>>(path: P) -> AnalyticsResult<Vec<Company>> {
        let companies: Vec<Company> = Self::load_json(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            companies = companies.len(),
            "Loaded payroll dataset"
        );
        Ok(companies)
    }

    /// Loads positions from a JSON file.
    pub fn load_positions<P: AsRef<Path>>(path: P) -> AnalyticsResult<Vec<Position>> {
        let positions: Vec<Position> = Self::load_json(path.as_ref())?;
        info!(
            path = %path.as_ref().display(),
            positions = positions.len(),
            "Loaded positions dataset"
        );
        Ok(positions)
    }

    /// Parses companies from an in-memory JSON document.
    pub fn companies_from_str(content: &str) -> AnalyticsResult<Vec<Company>> {
        Self::parse(content, "<inline>")
    }

    /// Parses positions from an in-memory JSON document.
    pub fn positions_from_str(content: &str) -> AnalyticsResult<Vec<Position>> {
        Self::parse(content, "<inline>")
    }

    fn load_json<T: DeserializeOwned>(path: &Path) -> AnalyticsResult<Vec<T>> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyticsError::DatasetNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    fn parse<T: DeserializeOwned>(content: &str, source: &str) -> AnalyticsResult<Vec<T>> {
        serde_json::from_str::<Document<T>>(content)
            .map(Document::into_records)
            .map_err(|e| AnalyticsError::DatasetParseError {
                path: source.to_string(),
                message: e.to_string(),
            })
    }
}
