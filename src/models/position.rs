//! Position and branch operating hours models.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::{BranchId, EmployeeId, PositionId};

/// A schedulable slot for a role at a branch on a specific date.
///
/// # Example
///
/// ```
/// use roster_engine::models::{BranchId, NewPosition};
/// use chrono::{NaiveDate, Weekday};
///
/// let slot = NewPosition::new(
///     BranchId(1),
///     "cashier",
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     "Till 1",
/// );
/// assert_eq!(slot.weekday, Weekday::Thu);
/// assert!(slot.employee_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Stored identity.
    pub id: PositionId,
    /// The branch the slot belongs to.
    pub branch: BranchId,
    /// The role worked in this slot (e.g. "cashier").
    pub role: String,
    /// Day of week of `date`.
    pub weekday: Weekday,
    /// The calendar date of the slot.
    pub date: NaiveDate,
    /// Free-form label shown on the roster.
    pub label: String,
    /// The employee bound to the slot, if any.
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
}

/// A position that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPosition {
    /// The branch the slot belongs to.
    pub branch: BranchId,
    /// The role worked in this slot.
    pub role: String,
    /// Day of week of `date`.
    pub weekday: Weekday,
    /// The calendar date of the slot.
    pub date: NaiveDate,
    /// Free-form label shown on the roster.
    pub label: String,
    /// The employee bound to the slot, if any.
    #[serde(default)]
    pub employee_id: Option<EmployeeId>,
}

impl NewPosition {
    /// Creates an unbound slot; the weekday is derived from `date`.
    pub fn new(
        branch: BranchId,
        role: impl Into<String>,
        date: NaiveDate,
        label: impl Into<String>,
    ) -> Self {
        Self {
            branch,
            role: role.into(),
            weekday: date.weekday(),
            date,
            label: label.into(),
            employee_id: None,
        }
    }

    /// Binds an employee to the slot.
    pub fn with_employee(mut self, employee: EmployeeId) -> Self {
        self.employee_id = Some(employee);
        self
    }

    /// Attaches a stored identity.
    pub fn with_id(self, id: PositionId) -> Position {
        Position {
            id,
            branch: self.branch,
            role: self.role,
            weekday: self.weekday,
            date: self.date,
            label: self.label,
            employee_id: self.employee_id,
        }
    }
}

impl Position {
    /// A copy of this position moved forward by `weeks`, without an identity.
    ///
    /// The employee binding is carried over unchanged.
    pub fn shifted_by_weeks(&self, weeks: i64) -> NewPosition {
        NewPosition {
            branch: self.branch,
            role: self.role.clone(),
            weekday: self.weekday,
            date: self.date + Duration::weeks(weeks),
            label: self.label.clone(),
            employee_id: self.employee_id,
        }
    }
}

/// Opening and closing time of a branch on one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOperatingHours {
    /// The branch these hours apply to.
    pub branch: BranchId,
    /// The weekday these hours apply to.
    pub weekday: Weekday,
    /// Opening time.
    pub open: NaiveTime,
    /// Closing time.
    pub close: NaiveTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_shifted_by_weeks_keeps_weekday_and_employee() {
        let position = NewPosition::new(BranchId(1), "cashier", date(12), "Till 1")
            .with_employee(EmployeeId(9))
            .with_id(PositionId(3));

        let shifted = position.shifted_by_weeks(2);
        assert_eq!(shifted.date, date(26));
        assert_eq!(shifted.weekday, Weekday::Mon);
        assert_eq!(shifted.employee_id, Some(EmployeeId(9)));
        assert_eq!(shifted.label, "Till 1");
    }

    #[test]
    fn test_position_deserialization() {
        let json = r#"{
            "id": 5,
            "branch": 2,
            "role": "stocker",
            "weekday": "Sat",
            "date": "2026-01-17",
            "label": "Back room"
        }"#;

        let position: Position = serde_json::from_str(json).unwrap();
        assert_eq!(position.weekday, Weekday::Sat);
        assert_eq!(position.employee_id, None);
    }
}
