//! Weekly total: the week's worked minutes must equal the category target.
//!
//! This is an exact match, not a ceiling. A week one hour short and a week
//! one hour over both fail.

use rust_decimal::Decimal;

use crate::specification::Specification;

use super::{ScheduleRule, WeekRoster, hours_label};

/// Satisfied when the roster totals exactly `weekly_hour_target` hours.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyTotal;

impl Specification<WeekRoster<'_>> for WeeklyTotal {
    fn is_satisfied_by(&self, roster: &WeekRoster<'_>) -> bool {
        Decimal::from(roster.total_minutes()) == roster.profile.weekly_target_minutes()
    }
}

impl ScheduleRule<WeekRoster<'_>> for WeeklyTotal {
    fn name(&self) -> &'static str {
        "weekly_total"
    }

    fn explain(&self, roster: &WeekRoster<'_>) -> String {
        format!(
            "week of {} totals {}, {} requires exactly {}h",
            roster.week.start,
            hours_label(roster.total_minutes()),
            roster.profile.category,
            roster.profile.weekly_hour_target.normalize()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DatedBlock, EmployeeCategory, WeekRange};
    use crate::rules::fixtures::*;

    #[test]
    fn test_full_time_forty_five_hours_passes() {
        let employee = employee(EmployeeCategory::FullTime);
        let profile = profile(EmployeeCategory::FullTime);
        let roster = WeekRoster::new(
            &employee,
            &profile,
            WeekRange::containing(day(0)),
            full_time_week(),
        );
        assert!(WeeklyTotal.is_satisfied_by(&roster));
    }

    #[test]
    fn test_one_eight_hour_block_short_fails() {
        let employee = employee(EmployeeCategory::FullTime);
        let profile = profile(EmployeeCategory::FullTime);
        let mut blocks = full_time_week();
        blocks.pop();
        let roster = WeekRoster::new(&employee, &profile, WeekRange::containing(day(0)), blocks);

        assert!(!WeeklyTotal.is_satisfied_by(&roster));
        assert_eq!(
            WeeklyTotal.explain(&roster),
            "week of 2026-01-12 totals 37h, full_time requires exactly 45h"
        );
    }

    #[test]
    fn test_over_target_also_fails() {
        let employee = employee(EmployeeCategory::FullTime);
        let profile = profile(EmployeeCategory::FullTime);
        let mut blocks = full_time_week();
        blocks.push(DatedBlock::new(day(6), block(9, 10)));
        let roster = WeekRoster::new(&employee, &profile, WeekRange::containing(day(0)), blocks);

        assert!(!WeeklyTotal.is_satisfied_by(&roster));
    }

    #[test]
    fn test_part_time_thirty_hours() {
        let employee = employee(EmployeeCategory::PartTime);
        let profile = profile(EmployeeCategory::PartTime);
        let blocks = (0..6).map(|d| DatedBlock::new(day(d), block(9, 14)));
        let roster = WeekRoster::new(&employee, &profile, WeekRange::containing(day(0)), blocks);
        assert!(WeeklyTotal.is_satisfied_by(&roster));
    }
}
