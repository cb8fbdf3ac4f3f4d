//! Declarative filter specification for the payroll dataset.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeCondition;

/// Inclusive bounds on an employee's net pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Lower bound (inclusive).
    pub min: Decimal,
    /// Upper bound (inclusive).
    pub max: Decimal,
}

impl SalaryRange {
    /// Returns true if `value` lies within the range.
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Inclusive bounds on an employee's admission date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First admitted date (inclusive).
    pub start: NaiveDate,
    /// Last admitted date (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns true if `date` lies within the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Constraints a caller applies to the payroll dataset.
///
/// Every dimension is optional. An empty list or a missing range places no
/// constraint on that dimension.
///
/// # Example
///
/// ```
/// use people_analytics::models::{EmployeeCondition, FilterSpec};
///
/// let spec = FilterSpec::default()
///     .with_status([EmployeeCondition::Active])
///     .with_functions(["Driver", "Mechanic"]);
/// assert_eq!(spec.active_filter_count(), 2);
///
/// let parsed: FilterSpec = serde_json::from_str(r#"{"status": ["Active"]}"#).unwrap();
/// assert_eq!(parsed.status, vec![EmployeeCondition::Active]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Company display names or cnpjs to keep.
    pub companies: Vec<String>,
    /// Job functions to keep.
    pub functions: Vec<String>,
    /// Competencies (reference periods) to keep.
    pub competencies: Vec<String>,
    /// Employee conditions to keep.
    pub status: Vec<EmployeeCondition>,
    /// Net-pay range to keep.
    pub salary_range: Option<SalaryRange>,
    /// Admission date range to keep.
    pub admission_date: Option<DateRange>,
    /// Event codes; an employee needs at least one of them.
    pub events: Vec<String>,
}

impl FilterSpec {
    /// Returns the number of dimensions that constrain the result.
    pub fn active_filter_count(&self) -> usize {
        [
            !self.companies.is_empty(),
            !self.functions.is_empty(),
            !self.competencies.is_empty(),
            !self.status.is_empty(),
            self.salary_range.is_some(),
            self.admission_date.is_some(),
            !self.events.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Returns true if no dimension constrains the result.
    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Restricts to the given companies.
    pub fn with_companies<I, S>(mut self, companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.companies = companies.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts to the given functions.
    pub fn with_functions<I, S>(mut self, functions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functions = functions.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts to the given competencies.
    pub fn with_competencies<I, S>(mut self, competencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.competencies = competencies.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts to the given employee conditions.
    pub fn with_status<I>(mut self, status: I) -> Self
    where
        I: IntoIterator<Item = EmployeeCondition>,
    {
        self.status = status.into_iter().collect();
        self
    }

    /// Restricts net pay to `[min, max]`.
    pub fn with_salary_range(mut self, min: Decimal, max: Decimal) -> Self {
        self.salary_range = Some(SalaryRange { min, max });
        self
    }

    /// Restricts admission dates to `[start, end]`.
    pub fn with_admission_date(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.admission_date = Some(DateRange { start, end });
        self
    }

    /// Requires at least one of the given event codes.
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }
}
