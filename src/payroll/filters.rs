//! Filter predicates for companies and employees.
//!
//! Each employee dimension of a [`FilterSpec`] becomes an optional predicate.
//! Present predicates are ANDed; absent ones impose no constraint.

use crate::models::{Company, Employee, FilterSpec};

type EmployeePredicate<'a> = Box<dyn Fn(&Employee) -> bool + Send + Sync + 'a>;

/// Returns true if `company` passes the company-level dimensions.
///
/// Names, cnpjs and competencies are compared with surrounding whitespace
/// removed on both sides.
pub fn company_matches(spec: &FilterSpec, company: &Company) -> bool {
    let name = company.display_name();
    let cnpj = company.cnpj.trim();
    let name_ok = spec.companies.is_empty()
        || spec.companies.iter().map(|c| c.trim()).any(|c| c == name || c == cnpj);

    let competency = company.competency_label();
    let competency_ok = spec.competencies.is_empty()
        || spec.competencies.iter().any(|c| c.trim() == competency);

    name_ok && competency_ok
}

fn function_predicate(spec: &FilterSpec) -> Option<EmployeePredicate<'_>> {
    if spec.functions.is_empty() {
        return None;
    }
    Some(Box::new(move |e: &Employee| {
        let function = e.function_label();
        spec.functions.iter().any(|f| f.trim() == function)
    }))
}

fn status_predicate(spec: &FilterSpec) -> Option<EmployeePredicate<'_>> {
    if spec.status.is_empty() {
        return None;
    }
    Some(Box::new(move |e: &Employee| spec.status.contains(&e.condition)))
}

fn salary_predicate<'a>(
    spec: &'a FilterSpec,
    net_pay_code: &'a str,
) -> Option<EmployeePredicate<'a>> {
    let range = spec.salary_range?;
    Some(Box::new(move |e: &Employee| {
        range.contains(e.net_pay(net_pay_code))
    }))
}

fn admission_predicate(spec: &FilterSpec) -> Option<EmployeePredicate<'_>> {
    let range = spec.admission_date?;
    Some(Box::new(move |e: &Employee| {
        e.admission_date().is_some_and(|d| range.contains(d))
    }))
}

fn event_predicate(spec: &FilterSpec) -> Option<EmployeePredicate<'_>> {
    if spec.events.is_empty() {
        return None;
    }
    Some(Box::new(move |e: &Employee| e.has_any_event(&spec.events)))
}

/// The employee-level dimensions of a [`FilterSpec`], ready to evaluate.
///
/// # Example
///
/// ```
/// use people_analytics::models::{Employee, EmployeeCondition, FilterSpec};
/// use people_analytics::payroll::EmployeeFilter;
///
/// let spec = FilterSpec::default().with_status([EmployeeCondition::Active]);
/// let filter = EmployeeFilter::new(&spec, "NET_PAY");
///
/// let employee: Employee =
///     serde_json::from_str(r#"{"cpf": "1", "condition": "Inactive"}"#).unwrap();
/// assert!(!filter.matches(&employee));
/// ```
pub struct EmployeeFilter<'a> {
    predicates: Vec<EmployeePredicate<'a>>,
}

impl<'a> EmployeeFilter<'a> {
    /// Builds the predicates present in `spec`.
    pub fn new(spec: &'a FilterSpec, net_pay_code: &'a str) -> Self {
        let predicates = [
            function_predicate(spec),
            status_predicate(spec),
            salary_predicate(spec, net_pay_code),
            admission_predicate(spec),
            event_predicate(spec),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self { predicates }
    }

    /// Returns true if `employee` satisfies every present predicate.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.predicates
            .iter()
            .fold(true, |keep, predicate| keep && predicate(employee))
    }

    /// Number of active employee-level predicates.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns true if no employee-level predicate is active.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
