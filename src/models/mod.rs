//! Core data models.
//!
//! This module contains the records consumed by the engines (positions,
//! companies, employees, events, filters) and the structures they produce.

mod filter;
mod payroll;
mod position;
mod rollups;

pub use filter::{DateRange, FilterSpec, SalaryRange};
pub use payroll::{Company, Employee, EmployeeCondition, PayrollEvent};
pub use position::{Edge, LayoutNode, OrgChartLayout, Position};
pub use rollups::{
    CompanyCost, EventSummary, FilterOptions, FilterStatistics, FunctionCost, Rollups,
    SalaryBucket,
};
