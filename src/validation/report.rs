//! Validation report models.

use serde::{Deserialize, Serialize};

use crate::models::{EmployeeId, PositionId};

/// One broken rule.
///
/// # Example
///
/// ```
/// use roster_engine::models::PositionId;
/// use roster_engine::validation::Violation;
///
/// let violation = Violation::new("daily_cap", "9h block exceeds the 8h daily cap")
///     .with_position(PositionId(4));
/// assert_eq!(violation.rule_name, "daily_cap");
/// assert_eq!(violation.position_id, Some(PositionId(4)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the rule that failed.
    pub rule_name: String,
    /// The position the failing block belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_id: Option<PositionId>,
    /// The employee the rule was evaluated for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<EmployeeId>,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Creates a violation not yet tied to a position or employee.
    pub fn new(rule_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule_name: rule_name.into(),
            position_id: None,
            employee_id: None,
            message: message.into(),
        }
    }

    /// Ties the violation to a position.
    pub fn with_position(mut self, position: PositionId) -> Self {
        self.position_id = Some(position);
        self
    }

    /// Ties the violation to an employee.
    pub fn with_employee(mut self, employee: EmployeeId) -> Self {
        self.employee_id = Some(employee);
        self
    }
}

/// The outcome of validating a batch: every violation found, in the order
/// the rules were evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no rule failed.
    pub ok: bool,
    /// Everything that failed.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Builds a report; `ok` is derived from the violation list.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            ok: violations.is_empty(),
            violations,
        }
    }

    /// Violations raised by the named rule.
    pub fn by_rule<'a>(&'a self, rule_name: &'a str) -> impl Iterator<Item = &'a Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.rule_name == rule_name)
    }

    /// Returns true if the named rule failed at least once.
    pub fn has_rule(&self, rule_name: &str) -> bool {
        self.by_rule(rule_name).next().is_some()
    }
}
