//! Payroll filtering and aggregation.
//!
//! This module contains the [`PayrollAggregationEngine`] together with the
//! pieces it is built from: admission date parsing, filter predicates and the
//! individual rollup computations.

mod admission;
mod engine;
mod filters;
mod rollups;

pub use admission::{ADMISSION_DATE_FORMATS, parse_admission_date};
pub use engine::PayrollAggregationEngine;
pub use filters::{EmployeeFilter, company_matches};
pub use rollups::{
    MISSING_DESCRIPTION, PayrollTotals, UNSPECIFIED_FUNCTION, costs_by_company,
    costs_by_function, filter_options, filter_statistics, main_events, payroll_totals,
    salary_distribution,
};
