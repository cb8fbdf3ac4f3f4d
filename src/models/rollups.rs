//! Rollup models produced by the payroll aggregation engine.
//!
//! Field names serialize in camelCase so dashboards can consume the
//! structures directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payroll cost of one job function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCost {
    /// The job function.
    pub function: String,
    /// Sum of net pay.
    pub cost: Decimal,
    /// Number of employees.
    pub employees: usize,
    /// `cost / employees`.
    pub average: Decimal,
}

/// Payroll cost of one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCost {
    /// Company display name.
    pub company: String,
    /// Sum of net pay.
    pub cost: Decimal,
    /// Number of employees.
    pub employees: usize,
    /// `cost / employees`.
    pub average: Decimal,
}

/// Totals of one payroll event code across employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventSummary {
    /// The event code.
    pub code: String,
    /// Description of the first occurrence seen.
    pub description: String,
    /// Sum of event values.
    pub total: Decimal,
    /// Number of occurrences.
    pub count: usize,
    /// `total / count`.
    pub average: Decimal,
}

/// One bar of the salary histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBucket {
    /// Display label, e.g. `"1501 - 3000"`.
    pub label: String,
    /// Exclusive lower bound; `None` for the first bucket.
    pub min: Option<Decimal>,
    /// Inclusive upper bound; `None` for the open-ended last bucket.
    pub max: Option<Decimal>,
    /// Number of salaries in the bucket.
    pub count: usize,
    /// Share of all positive salaries, 0-100.
    pub percentage: Decimal,
}

/// Filtered-versus-total counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStatistics {
    /// Companies left after filtering.
    pub filtered_company_count: usize,
    /// Companies in the stored dataset.
    pub total_company_count: usize,
    /// Employees left after filtering.
    pub filtered_employee_count: usize,
    /// Employees in the stored dataset.
    pub total_employee_count: usize,
    /// `filtered / total * 100` over employees; 0 when the dataset is empty.
    pub filtered_percentage: Decimal,
}

/// Distinct values available to populate filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Company display names.
    pub companies: Vec<String>,
    /// Job functions.
    pub functions: Vec<String>,
    /// Competencies.
    pub competencies: Vec<String>,
    /// Event codes, excluding the net-pay code.
    pub event_codes: Vec<String>,
}

/// Every aggregate computed for a filtered payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rollups {
    /// Sum of net pay.
    pub total_payroll: Decimal,
    /// Number of employees.
    pub total_employees: usize,
    /// Employees whose condition is `Active`.
    pub active_employees: usize,
    /// Employees whose condition is `Inactive`.
    pub inactive_employees: usize,
    /// `total_payroll / total_employees`, 0 when there are none.
    pub average_salary: Decimal,
    /// Cost per function, highest first.
    pub costs_by_function: Vec<FunctionCost>,
    /// Cost per company, highest first.
    pub costs_by_company: Vec<CompanyCost>,
    /// Largest non-net-pay events, highest total first.
    pub main_events: Vec<EventSummary>,
    /// Salary histogram.
    pub salary_distribution: Vec<SalaryBucket>,
    /// Filtered-versus-total counts.
    pub filter_statistics: FilterStatistics,
    /// Filter catalogs.
    pub filter_options: FilterOptions,
}
