//! People analytics engine for HR and payroll dashboards
//!
//! This crate provides the two data-shaping cores behind the dashboards: an
//! org-chart layout builder over flat position records, and a payroll
//! aggregation engine that filters a company/employee/event dataset and
//! computes rollups for charts and tables.

#![warn(missing_docs)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod payroll;
