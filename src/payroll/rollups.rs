//! Rollup computations over a payroll dataset.
//!
//! Every function is a pure fold over the companies it is given. Empty
//! inputs produce zero totals and averages rather than errors. Money sums
//! saturate at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;

use crate::config::RollupConfig;
use crate::models::{
    Company, CompanyCost, Employee, EmployeeCondition, EventSummary, FilterOptions,
    FilterStatistics, FunctionCost, SalaryBucket,
};

/// Group label for employees without a function.
pub const UNSPECIFIED_FUNCTION: &str = "Unspecified";

/// Description used when an event carries none.
pub const MISSING_DESCRIPTION: &str = "No description";

/// `total / count`, or zero when `count` is zero.
pub(crate) fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    (total / Decimal::from(count)).normalize()
}

/// `part / whole * 100` rounded to two places, or zero when `whole` is zero.
pub(crate) fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
        .round_dp(2)
        .normalize()
}

fn employees(companies: &[Company]) -> impl Iterator<Item = (&Company, &Employee)> {
    companies
        .iter()
        .flat_map(|c| c.employees.iter().map(move |e| (c, e)))
}

/// Headcount and payroll totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PayrollTotals {
    /// Sum of net pay.
    pub total_payroll: Decimal,
    /// Number of employees.
    pub employees: usize,
    /// Employees whose condition is `Active`.
    pub active: usize,
    /// Employees whose condition is `Inactive`.
    pub inactive: usize,
}

impl PayrollTotals {
    /// Average net pay, zero when there are no employees.
    pub fn average_salary(&self) -> Decimal {
        average(self.total_payroll, self.employees)
    }
}

/// Sums net pay and counts employees by condition.
pub fn payroll_totals(companies: &[Company], net_pay_code: &str) -> PayrollTotals {
    employees(companies).fold(PayrollTotals::default(), |mut totals, (_, e)| {
        totals.total_payroll = totals.total_payroll.saturating_add(e.net_pay(net_pay_code));
        totals.employees += 1;
        match e.condition {
            EmployeeCondition::Active => totals.active += 1,
            EmployeeCondition::Inactive => totals.inactive += 1,
            EmployeeCondition::Other(_) => {}
        }
        totals
    })
}

/// Groups net pay by key, keeping first-seen key order before sorting by
/// cost (highest first, then key).
fn cost_groups<'a, F>(
    companies: &'a [Company],
    net_pay_code: &str,
    key: F,
) -> Vec<(String, Decimal, usize)>
where
    F: Fn(&'a Company, &'a Employee) -> &'a str,
{
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(String, Decimal, usize)> = Vec::new();

    for (company, employee) in employees(companies) {
        let label = key(company, employee);
        let slot = *slots.entry(label).or_insert_with(|| {
            groups.push((label.to_string(), Decimal::ZERO, 0));
            groups.len() - 1
        });
        groups[slot].1 = groups[slot].1.saturating_add(employee.net_pay(net_pay_code));
        groups[slot].2 += 1;
    }

    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    groups
}

/// Net pay grouped by job function.
pub fn costs_by_function(companies: &[Company], net_pay_code: &str) -> Vec<FunctionCost> {
    cost_groups(companies, net_pay_code, |_, e| {
        let function = e.function_label();
        if function.is_empty() {
            UNSPECIFIED_FUNCTION
        } else {
            function
        }
    })
    .into_iter()
    .map(|(function, cost, employees)| FunctionCost {
        function,
        cost,
        employees,
        average: average(cost, employees),
    })
    .collect()
}

/// Net pay grouped by company display name.
pub fn costs_by_company(companies: &[Company], net_pay_code: &str) -> Vec<CompanyCost> {
    cost_groups(companies, net_pay_code, |c, _| c.display_name())
        .into_iter()
        .map(|(company, cost, employees)| CompanyCost {
            company,
            cost,
            employees,
            average: average(cost, employees),
        })
        .collect()
}

/// Non-net-pay events grouped by code, highest total first, capped at
/// `limit` entries when given.
pub fn main_events(
    companies: &[Company],
    net_pay_code: &str,
    limit: Option<usize>,
) -> Vec<EventSummary> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<EventSummary> = Vec::new();

    let events = employees(companies)
        .flat_map(|(_, e)| e.events.iter())
        .filter(|event| event.code != net_pay_code);

    for event in events {
        let slot = *slots.entry(event.code.as_str()).or_insert_with(|| {
            summaries.push(EventSummary {
                code: event.code.clone(),
                description: String::new(),
                total: Decimal::ZERO,
                count: 0,
                average: Decimal::ZERO,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        if summary.description.is_empty() {
            if let Some(description) = event.description.as_deref().map(str::trim) {
                summary.description = description.to_string();
            }
        }
        summary.total = summary.total.saturating_add(event.value);
        summary.count += 1;
    }

    for summary in &mut summaries {
        if summary.description.is_empty() {
            summary.description = MISSING_DESCRIPTION.to_string();
        }
        summary.average = average(summary.total, summary.count);
    }

    summaries.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.code.cmp(&b.code)));
    if let Some(limit) = limit {
        summaries.truncate(limit);
    }
    summaries
}

fn bucket_label(min: Option<Decimal>, max: Option<Decimal>) -> String {
    match (min, max) {
        (None, Some(max)) => format!("up to {}", max.normalize()),
        (Some(min), Some(max)) => format!(
            "{} - {}",
            min.saturating_add(Decimal::ONE).normalize(),
            max.normalize()
        ),
        (Some(min), None) => format!("above {}", min.normalize()),
        (None, None) => "all".to_string(),
    }
}

/// Histogram of non-zero net pay values.
///
/// `bounds` are inclusive upper limits in ascending order; a final bucket
/// collects everything above the last bound. Negative net pay falls in the
/// first bucket. Zero net pay, including a missing net-pay event, is left out
/// of both the counts and the percentage base.
pub fn salary_distribution(
    companies: &[Company],
    net_pay_code: &str,
    bounds: &[Decimal],
) -> Vec<SalaryBucket> {
    let mut counts = vec![0usize; bounds.len() + 1];
    let mut salaried = 0usize;

    for (_, employee) in employees(companies) {
        let salary = employee.net_pay(net_pay_code);
        if salary.is_zero() {
            continue;
        }
        salaried += 1;
        let slot = bounds
            .iter()
            .position(|bound| salary <= *bound)
            .unwrap_or(bounds.len());
        counts[slot] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let min = i.checked_sub(1).map(|prev| bounds[prev]);
            let max = bounds.get(i).copied();
            SalaryBucket {
                label: bucket_label(min, max),
                min,
                max,
                count,
                percentage: percentage(count, salaried),
            }
        })
        .collect()
}

/// Compares the filtered companies against the full dataset.
pub fn filter_statistics(filtered: &[Company], dataset: &[Company]) -> FilterStatistics {
    let filtered_employee_count: usize = filtered.iter().map(Company::employee_count).sum();
    let total_employee_count: usize = dataset.iter().map(Company::employee_count).sum();

    FilterStatistics {
        filtered_company_count: filtered.len(),
        total_company_count: dataset.len(),
        filtered_employee_count,
        total_employee_count,
        filtered_percentage: percentage(filtered_employee_count, total_employee_count),
    }
}

/// Sorted distinct values for populating filter controls.
pub fn filter_options(dataset: &[Company], config: &RollupConfig) -> FilterOptions {
    let companies: BTreeSet<&str> = dataset
        .iter()
        .map(Company::display_name)
        .filter(|name| match config.company_name_filter.as_deref() {
            Some(pattern) => name.contains(pattern),
            None => true,
        })
        .collect();

    let competencies: BTreeSet<&str> = dataset
        .iter()
        .map(Company::competency_label)
        .filter(|c| !c.is_empty())
        .collect();

    let functions: BTreeSet<&str> = employees(dataset)
        .map(|(_, e)| e.function_label())
        .filter(|f| !f.is_empty())
        .collect();

    let event_codes: BTreeSet<&str> = employees(dataset)
        .flat_map(|(_, e)| e.events.iter())
        .map(|event| event.code.as_str())
        .filter(|code| *code != config.net_pay_code)
        .collect();

    FilterOptions {
        companies: companies.into_iter().map(str::to_string).collect(),
        functions: functions.into_iter().map(str::to_string).collect(),
        competencies: competencies.into_iter().map(str::to_string).collect(),
        event_codes: event_codes.into_iter().map(str::to_string).collect(),
    }
}
