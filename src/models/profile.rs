//! Employee categories and their hour profiles.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The labor category an employee is hired under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCategory {
    /// 45 hours per week over six days.
    FullTime,
    /// 30 hours per week over six days.
    PartTime,
    /// 22 hours per week over two long days.
    SpecialSchedule,
}

impl EmployeeCategory {
    /// Stable snake_case name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeCategory::FullTime => "full_time",
            EmployeeCategory::PartTime => "part_time",
            EmployeeCategory::SpecialSchedule => "special_schedule",
        }
    }
}

impl fmt::Display for EmployeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a category's expected weekly pattern: `count` days of
/// exactly `hours` worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySignature {
    /// Worked hours on each qualifying day.
    pub hours: Decimal,
    /// Number of days expected at that length.
    pub count: u32,
}

impl DaySignature {
    /// Builds a signature line from whole hours.
    pub fn new(hours: i64, count: u32) -> Self {
        Self {
            hours: Decimal::from(hours),
            count,
        }
    }

    /// The signature's day length in minutes.
    pub fn minutes(&self) -> Decimal {
        self.hours * Decimal::from(60)
    }
}

/// Hour policy for one employee category.
///
/// # Example
///
/// ```
/// use roster_engine::models::{EmployeeCategory, EmployeeTypeProfile};
/// use rust_decimal::Decimal;
///
/// let profile = EmployeeTypeProfile::canonical(EmployeeCategory::FullTime);
/// assert_eq!(profile.weekly_hour_target, Decimal::from(45));
/// assert_eq!(profile.weekly_target_minutes(), Decimal::from(2700));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTypeProfile {
    /// The category this profile applies to.
    pub category: EmployeeCategory,
    /// Longest single block allowed, in hours.
    pub daily_hour_cap: Decimal,
    /// Exact weekly total required, in hours.
    pub weekly_hour_target: Decimal,
    /// Whether at least one weekday must be left unworked.
    pub rest_day_required: bool,
    /// The canonical day-length pattern for a week.
    pub signature: Vec<DaySignature>,
}

impl EmployeeTypeProfile {
    /// The built-in profile for a category.
    pub fn canonical(category: EmployeeCategory) -> Self {
        match category {
            EmployeeCategory::FullTime => Self {
                category,
                daily_hour_cap: Decimal::from(8),
                weekly_hour_target: Decimal::from(45),
                rest_day_required: true,
                signature: vec![DaySignature::new(7, 3), DaySignature::new(8, 3)],
            },
            EmployeeCategory::PartTime => Self {
                category,
                daily_hour_cap: Decimal::from(5),
                weekly_hour_target: Decimal::from(30),
                rest_day_required: true,
                signature: vec![DaySignature::new(5, 6)],
            },
            EmployeeCategory::SpecialSchedule => Self {
                category,
                daily_hour_cap: Decimal::from(11),
                weekly_hour_target: Decimal::from(22),
                rest_day_required: false,
                signature: vec![DaySignature::new(11, 2)],
            },
        }
    }

    /// Daily cap converted to minutes.
    pub fn daily_cap_minutes(&self) -> Decimal {
        self.daily_hour_cap * Decimal::from(60)
    }

    /// Weekly target converted to minutes.
    pub fn weekly_target_minutes(&self) -> Decimal {
        self.weekly_hour_target * Decimal::from(60)
    }

    /// Total days the signature expects to be worked.
    pub fn expected_days(&self) -> u32 {
        self.signature.iter().map(|line| line.count).sum()
    }
}
