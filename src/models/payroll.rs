//! Payroll dataset models: companies, employees and payroll events.
//!
//! The upstream dataset is loosely typed, so most fields default when
//! absent and lookups never fail.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payroll::parse_admission_date;

/// Employment condition of an employee.
///
/// Labels other than `Active` and `Inactive` are preserved verbatim and
/// count as neither in the rollups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmployeeCondition {
    /// Currently employed.
    Active,
    /// Dismissed or otherwise not working.
    Inactive,
    /// Any other label found in the source data.
    Other(String),
}

impl Default for EmployeeCondition {
    fn default() -> Self {
        EmployeeCondition::Other(String::new())
    }
}

impl From<String> for EmployeeCondition {
    fn from(value: String) -> Self {
        match value.trim() {
            v if v.eq_ignore_ascii_case("active") => EmployeeCondition::Active,
            v if v.eq_ignore_ascii_case("inactive") => EmployeeCondition::Inactive,
            _ => EmployeeCondition::Other(value),
        }
    }
}

impl From<&str> for EmployeeCondition {
    fn from(value: &str) -> Self {
        EmployeeCondition::from(value.to_string())
    }
}

impl From<EmployeeCondition> for String {
    fn from(value: EmployeeCondition) -> Self {
        value.to_string()
    }
}

impl fmt::Display for EmployeeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeCondition::Active => f.write_str("Active"),
            EmployeeCondition::Inactive => f.write_str("Inactive"),
            EmployeeCondition::Other(label) => f.write_str(label),
        }
    }
}

/// A single payroll line for an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEvent {
    /// Event code; one reserved code carries the net pay.
    pub code: String,
    /// Human-readable label.
    #[serde(default)]
    pub description: Option<String>,
    /// Amount of the event.
    #[serde(default)]
    pub value: Decimal,
}

impl PayrollEvent {
    /// Creates an event.
    pub fn new(code: impl Into<String>, description: impl Into<String>, value: Decimal) -> Self {
        Self {
            code: code.into(),
            description: Some(description.into()),
            value,
        }
    }
}

/// An employee within a company's payroll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Taxpayer id, used as the employee key.
    pub cpf: String,
    /// Full name.
    #[serde(default)]
    pub name: String,
    /// Job title or category.
    #[serde(default)]
    pub function: String,
    /// Employment condition.
    #[serde(default)]
    pub condition: EmployeeCondition,
    /// Admission date as found in the source (format not guaranteed).
    #[serde(default)]
    pub admission: Option<String>,
    /// Payroll events in source order.
    #[serde(default)]
    pub events: Vec<PayrollEvent>,
}

impl Employee {
    /// Returns the value of the first event with `net_pay_code`, or zero.
    ///
    /// # Example
    ///
    /// ```
    /// use people_analytics::models::{Employee, EmployeeCondition, PayrollEvent};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     cpf: "123".to_string(),
    ///     name: "Ana".to_string(),
    ///     function: "Analyst".to_string(),
    ///     condition: EmployeeCondition::Active,
    ///     admission: None,
    ///     events: vec![PayrollEvent::new("NET_PAY", "Net pay", Decimal::from(2500))],
    /// };
    /// assert_eq!(employee.net_pay("NET_PAY"), Decimal::from(2500));
    /// assert_eq!(employee.net_pay("OTHER"), Decimal::ZERO);
    /// ```
    pub fn net_pay(&self, net_pay_code: &str) -> Decimal {
        self.events
            .iter()
            .find(|e| e.code == net_pay_code)
            .map(|e| e.value)
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns the function with surrounding whitespace removed.
    ///
    /// This is the label used for grouping, filter options and filtering.
    pub fn function_label(&self) -> &str {
        self.function.trim()
    }

    /// Parses the admission date, if present and in a known format.
    pub fn admission_date(&self) -> Option<NaiveDate> {
        self.admission.as_deref().and_then(parse_admission_date)
    }

    /// Returns true if any event carries one of `codes`.
    pub fn has_any_event<S: AsRef<str>>(&self, codes: &[S]) -> bool {
        self.events
            .iter()
            .any(|e| codes.iter().any(|c| c.as_ref() == e.code))
    }

    /// Returns true if the employee is active.
    pub fn is_active(&self) -> bool {
        self.condition == EmployeeCondition::Active
    }
}

/// A company and its payroll for one competency (reference period).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Tax id of the company; also accepted as `id`.
    #[serde(alias = "id")]
    pub cnpj: String,
    /// Registered name, if known.
    #[serde(default)]
    pub name: Option<String>,
    /// Reference period label (e.g. "03/2024").
    #[serde(default)]
    pub competency: String,
    /// Employees on this payroll.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Company {
    /// Returns the name, falling back to the cnpj when the name is blank.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.cnpj)
    }

    /// Returns the competency with surrounding whitespace removed.
    pub fn competency_label(&self) -> &str {
        self.competency.trim()
    }

    /// Returns the number of employees.
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_company_with_id_alias() {
        let json = r#"{
            "id": "12.345.678/0001-90",
            "competency": "03/2024",
            "employees": []
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();

        assert_eq!(company.cnpj, "12.345.678/0001-90");
        assert_eq!(company.display_name(), "12.345.678/0001-90");
    }

    #[test]
    fn test_display_name_prefers_name() {
        let company = Company {
            cnpj: "001".to_string(),
            name: Some("Acme LTDA".to_string()),
            competency: "01/2024".to_string(),
            employees: vec![],
        };
        assert_eq!(company.display_name(), "Acme LTDA");
    }

    #[test]
    fn test_labels_are_trimmed() {
        let company = Company {
            cnpj: "001".to_string(),
            name: None,
            competency: " 03/2024 ".to_string(),
            employees: vec![],
        };
        assert_eq!(company.competency_label(), "03/2024");

        let employee: Employee =
            serde_json::from_str(r#"{"cpf": "1", "function": "Driver \t"}"#).unwrap();
        assert_eq!(employee.function_label(), "Driver");
    }

    #[test]
    fn test_display_name_skips_blank_name() {
        let company = Company {
            cnpj: "001".to_string(),
            name: Some("  ".to_string()),
            competency: "01/2024".to_string(),
            employees: vec![],
        };
        assert_eq!(company.display_name(), "001");
    }

    #[test]
    fn test_deserialize_employee_with_numeric_and_string_values() {
        let json = r#"{
            "cpf": "111.222.333-44",
            "name": "Bruno",
            "function": "Driver",
            "condition": "Active",
            "admission": "15/03/2021",
            "events": [
                {"code": "NET_PAY", "description": "Net pay", "value": 2150.75},
                {"code": "001", "value": "3000.00"}
            ]
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();

        assert!(employee.is_active());
        assert_eq!(employee.net_pay("NET_PAY"), dec("2150.75"));
        assert_eq!(employee.events[1].value, dec("3000.00"));
        assert_eq!(employee.events[1].description, None);
        assert_eq!(
            employee.admission_date(),
            NaiveDate::from_ymd_opt(2021, 3, 15)
        );
    }

    #[test]
    fn test_sparse_employee_uses_defaults() {
        let employee: Employee = serde_json::from_str(r#"{"cpf": "1"}"#).unwrap();

        assert_eq!(employee.condition, EmployeeCondition::default());
        assert_eq!(employee.net_pay("NET_PAY"), Decimal::ZERO);
        assert_eq!(employee.admission_date(), None);
        assert!(employee.events.is_empty());
    }

    #[test]
    fn test_condition_parsing() {
        assert_eq!(EmployeeCondition::from("Active"), EmployeeCondition::Active);
        assert_eq!(EmployeeCondition::from("inactive"), EmployeeCondition::Inactive);
        assert_eq!(
            EmployeeCondition::from("On leave"),
            EmployeeCondition::Other("On leave".to_string())
        );
    }

    #[test]
    fn test_condition_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&EmployeeCondition::Active).unwrap(),
            "\"Active\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeCondition::Other("Leave".to_string())).unwrap(),
            "\"Leave\""
        );
    }

    #[test]
    fn test_has_any_event() {
        let employee = Employee {
            cpf: "1".to_string(),
            name: String::new(),
            function: String::new(),
            condition: EmployeeCondition::Active,
            admission: None,
            events: vec![
                PayrollEvent::new("001", "Salary", dec("3000")),
                PayrollEvent::new("020", "Overtime", dec("150")),
            ],
        };

        assert!(employee.has_any_event(&["020"]));
        assert!(employee.has_any_event(&["999", "001"]));
        assert!(!employee.has_any_event(&["999"]));
        assert!(!employee.has_any_event::<&str>(&[]));
    }
}
