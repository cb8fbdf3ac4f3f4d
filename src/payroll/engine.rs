//! The payroll aggregation engine.

use tracing::debug;

use crate::config::RollupConfig;
use crate::models::{Company, FilterOptions, FilterSpec, Rollups};

use super::filters::{EmployeeFilter, company_matches};
use super::rollups::{
    costs_by_company, costs_by_function, filter_options, filter_statistics, main_events,
    payroll_totals, salary_distribution,
};

/// Filters a payroll dataset and computes dashboard rollups.
///
/// The dataset is fixed at construction and never mutated, so the engine can
/// be shared freely between callers. Every operation is a pure function of
/// the stored dataset and its arguments.
///
/// # Example
///
/// ```
/// use people_analytics::models::{Company, EmployeeCondition, FilterSpec};
/// use people_analytics::payroll::PayrollAggregationEngine;
///
/// let dataset: Vec<Company> = serde_json::from_str(r#"[{
///     "cnpj": "001",
///     "name": "Acme LTDA",
///     "competency": "03/2024",
///     "employees": [
///         {"cpf": "1", "function": "Driver", "condition": "Active",
///          "events": [{"code": "NET_PAY", "value": 2000}]},
///         {"cpf": "2", "function": "Clerk", "condition": "Inactive",
///          "events": [{"code": "NET_PAY", "value": 1000}]}
///     ]
/// }]"#).unwrap();
///
/// let engine = PayrollAggregationEngine::new(dataset);
/// let spec = FilterSpec::default().with_status([EmployeeCondition::Active]);
/// let rollups = engine.processed_data(&spec);
///
/// assert_eq!(rollups.total_employees, 1);
/// assert_eq!(rollups.total_payroll.to_string(), "2000");
/// ```
#[derive(Debug, Clone)]
pub struct PayrollAggregationEngine {
    dataset: Vec<Company>,
    config: RollupConfig,
}

impl PayrollAggregationEngine {
    /// Creates an engine over `dataset` with default rollup settings.
    pub fn new(dataset: Vec<Company>) -> Self {
        Self::with_config(dataset, RollupConfig::default())
    }

    /// Creates an engine over `dataset` with the given rollup settings.
    pub fn with_config(dataset: Vec<Company>, config: RollupConfig) -> Self {
        Self { dataset, config }
    }

    /// Returns the unfiltered dataset.
    pub fn original_data(&self) -> &[Company] {
        &self.dataset
    }

    /// Returns the rollup settings.
    pub fn config(&self) -> &RollupConfig {
        &self.config
    }

    /// Returns the companies and employees that satisfy `spec`.
    ///
    /// Company-level dimensions (companies, competencies) are checked first,
    /// then each employee against the employee-level dimensions. Companies
    /// left without employees are dropped.
    pub fn apply_filters(&self, spec: &FilterSpec) -> Vec<Company> {
        let employee_filter = EmployeeFilter::new(spec, &self.config.net_pay_code);

        let filtered: Vec<Company> = self
            .dataset
            .iter()
            .filter(|company| company_matches(spec, company))
            .filter_map(|company| {
                let employees: Vec<_> = company
                    .employees
                    .iter()
                    .filter(|e| employee_filter.matches(e))
                    .cloned()
                    .collect();

                if employees.is_empty() {
                    return None;
                }

                Some(Company {
                    cnpj: company.cnpj.clone(),
                    name: company.name.clone(),
                    competency: company.competency.clone(),
                    employees,
                })
            })
            .collect();

        debug!(
            active_filters = spec.active_filter_count(),
            companies = filtered.len(),
            employees = filtered.iter().map(Company::employee_count).sum::<usize>(),
            "Applied payroll filters"
        );

        filtered
    }

    /// Computes every rollup for an already filtered set of companies.
    ///
    /// Statistics compare `filtered` against the stored dataset, and filter
    /// options are drawn from the stored dataset so the catalogs do not
    /// shrink as filters are applied.
    pub fn aggregate(&self, filtered: &[Company]) -> Rollups {
        let net_pay_code = self.config.net_pay_code.as_str();
        let totals = payroll_totals(filtered, net_pay_code);

        Rollups {
            total_payroll: totals.total_payroll,
            total_employees: totals.employees,
            active_employees: totals.active,
            inactive_employees: totals.inactive,
            average_salary: totals.average_salary(),
            costs_by_function: costs_by_function(filtered, net_pay_code),
            costs_by_company: costs_by_company(filtered, net_pay_code),
            main_events: main_events(filtered, net_pay_code, self.config.top_events),
            salary_distribution: salary_distribution(
                filtered,
                net_pay_code,
                &self.config.salary_bucket_bounds,
            ),
            filter_statistics: filter_statistics(filtered, &self.dataset),
            filter_options: self.filter_options(),
        }
    }

    /// Filters with `spec`, then aggregates the result.
    pub fn processed_data(&self, spec: &FilterSpec) -> Rollups {
        let filtered = self.apply_filters(spec);
        self.aggregate(&filtered)
    }

    /// Rollups of the whole, unfiltered dataset.
    pub fn reset(&self) -> Rollups {
        self.processed_data(&FilterSpec::default())
    }

    /// Distinct values for populating filter controls.
    pub fn filter_options(&self) -> FilterOptions {
        filter_options(&self.dataset, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, EmployeeCondition, PayrollEvent};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(cpf: &str, function: &str, condition: EmployeeCondition, net: &str) -> Employee {
        Employee {
            cpf: cpf.to_string(),
            name: format!("Employee {}", cpf),
            function: function.to_string(),
            condition,
            admission: Some("2020-06-01".to_string()),
            events: vec![
                PayrollEvent::new("001", "Base salary", dec(net) + dec("500")),
                PayrollEvent::new("NET_PAY", "Net pay", dec(net)),
            ],
        }
    }

    /// Two companies; the first holds 3 active and 1 inactive employee.
    fn dataset() -> Vec<Company> {
        vec![
            Company {
                cnpj: "11.111.111/0001-11".to_string(),
                name: Some("Alpha LTDA".to_string()),
                competency: "03/2024".to_string(),
                employees: vec![
                    employee("1", "Driver", EmployeeCondition::Active, "1000"),
                    employee("2", "Driver", EmployeeCondition::Active, "2000"),
                    employee("3", "Mechanic", EmployeeCondition::Active, "3000"),
                    employee("4", "Clerk", EmployeeCondition::Inactive, "1500"),
                ],
            },
            Company {
                cnpj: "22.222.222/0001-22".to_string(),
                name: Some("Beta SA".to_string()),
                competency: "04/2024".to_string(),
                employees: vec![],
            },
        ]
    }

    #[test]
    fn test_apply_filters_empty_spec_keeps_every_employee() {
        let engine = PayrollAggregationEngine::new(dataset());
        let filtered = engine.apply_filters(&FilterSpec::default());

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].employees.len(), 4);
        assert_eq!(filtered[0], engine.original_data()[0]);
    }

    #[test]
    fn test_apply_filters_drops_companies_without_matches() {
        let engine = PayrollAggregationEngine::new(dataset());
        let spec = FilterSpec::default().with_functions(["Pilot"]);

        assert!(engine.apply_filters(&spec).is_empty());
    }

    #[test]
    fn test_apply_filters_does_not_mutate_dataset() {
        let engine = PayrollAggregationEngine::new(dataset());
        let spec = FilterSpec::default().with_status([EmployeeCondition::Active]);

        let _ = engine.apply_filters(&spec);
        assert_eq!(engine.original_data(), dataset().as_slice());
    }

    #[test]
    fn test_status_filter_rollups() {
        let engine = PayrollAggregationEngine::new(dataset());
        let spec = FilterSpec::default().with_status([EmployeeCondition::Active]);
        let rollups = engine.processed_data(&spec);

        assert_eq!(rollups.total_employees, 3);
        assert_eq!(rollups.active_employees, 3);
        assert_eq!(rollups.inactive_employees, 0);
        assert_eq!(rollups.total_payroll, dec("6000"));
        assert_eq!(rollups.average_salary, dec("2000"));
    }

    #[test]
    fn test_salary_and_admission_filters_combine() {
        let engine = PayrollAggregationEngine::new(dataset());
        let spec = FilterSpec::default()
            .with_salary_range(dec("1500"), dec("2500"))
            .with_admission_date(
                NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2020, 12, 31).unwrap(),
            );
        let filtered = engine.apply_filters(&spec);

        let cpfs: Vec<&str> = filtered[0].employees.iter().map(|e| e.cpf.as_str()).collect();
        assert_eq!(cpfs, vec!["2", "4"]);
    }

    #[test]
    fn test_aggregate_empty_set() {
        let engine = PayrollAggregationEngine::new(dataset());
        let rollups = engine.aggregate(&[]);

        assert_eq!(rollups.total_payroll, Decimal::ZERO);
        assert_eq!(rollups.average_salary, Decimal::ZERO);
        assert!(rollups.costs_by_function.is_empty());
        assert!(rollups.main_events.is_empty());
        assert_eq!(rollups.filter_statistics.filtered_employee_count, 0);
        assert_eq!(rollups.filter_statistics.total_employee_count, 4);
        assert_eq!(rollups.filter_statistics.total_company_count, 2);
    }

    #[test]
    fn test_reset_matches_unfiltered() {
        let engine = PayrollAggregationEngine::new(dataset());
        let rollups = engine.reset();

        assert_eq!(rollups.total_employees, 4);
        assert_eq!(rollups.filter_statistics.filtered_percentage, dec("100"));
        assert_eq!(rollups, engine.processed_data(&FilterSpec::default()));
    }

    #[test]
    fn test_filter_options_independent_of_filters() {
        let engine = PayrollAggregationEngine::new(dataset());
        let spec = FilterSpec::default().with_functions(["Clerk"]);
        let rollups = engine.processed_data(&spec);

        assert_eq!(rollups.filter_options, engine.filter_options());
        assert_eq!(rollups.filter_options.companies, vec!["Alpha LTDA", "Beta SA"]);
        assert_eq!(rollups.filter_options.event_codes, vec!["001"]);
    }

    #[test]
    fn test_custom_net_pay_code() {
        let config = RollupConfig {
            net_pay_code: "001".to_string(),
            ..RollupConfig::default()
        };
        let engine = PayrollAggregationEngine::with_config(dataset(), config);
        let rollups = engine.reset();

        // "001" is now net pay: base salaries are net + 500
        assert_eq!(rollups.total_payroll, dec("9500"));
        assert_eq!(rollups.main_events.len(), 1);
        assert_eq!(rollups.main_events[0].code, "NET_PAY");
    }

    #[test]
    fn test_every_filter_option_selects_its_records() {
        let mut data = dataset();
        data[0].competency = "03/2024 ".to_string();
        data[0].employees[0].function = "Driver ".to_string();
        data[0].employees[3].function = "  Clerk".to_string();
        let engine = PayrollAggregationEngine::new(data);
        let options = engine.filter_options();

        assert_eq!(options.functions, vec!["Clerk", "Driver", "Mechanic"]);
        assert_eq!(options.competencies, vec!["03/2024"]);

        let kept = |spec: FilterSpec| {
            engine
                .apply_filters(&spec)
                .iter()
                .map(Company::employee_count)
                .sum::<usize>()
        };
        for function in &options.functions {
            let spec = FilterSpec::default().with_functions([function]);
            assert!(kept(spec) > 0, "{}", function);
        }
        for competency in &options.competencies {
            let spec = FilterSpec::default().with_competencies([competency]);
            assert!(kept(spec) > 0, "{}", competency);
        }
        // Beta SA has no employees, so only Alpha's options are checked
        assert!(kept(FilterSpec::default().with_companies([options.companies[0].as_str()])) > 0);
        for code in &options.event_codes {
            assert!(kept(FilterSpec::default().with_events([code])) > 0, "{}", code);
        }
    }

    #[test]
    fn test_reset_survives_net_pay_near_decimal_max() {
        let max = Decimal::MAX.to_string();
        let engine = PayrollAggregationEngine::new(vec![Company {
            cnpj: "99".to_string(),
            name: Some("Huge LTDA".to_string()),
            competency: "03/2024".to_string(),
            employees: vec![
                employee("1", "Driver", EmployeeCondition::Active, "1"),
                employee("2", "Driver", EmployeeCondition::Active, "1"),
            ]
            .into_iter()
            .map(|mut e| {
                e.events = vec![PayrollEvent::new("NET_PAY", "Net pay", dec(&max))];
                e
            })
            .collect(),
        }]);

        let rollups = engine.reset();
        assert_eq!(rollups.total_payroll, Decimal::MAX);
        assert_eq!(rollups.total_employees, 2);
        assert_eq!(rollups.costs_by_function[0].cost, Decimal::MAX);
        assert_eq!(rollups.salary_distribution.last().map(|b| b.count), Some(2));
    }

    #[test]
    fn test_engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PayrollAggregationEngine>();
    }
}
