//! Day-off minimum: categories that require rest must leave at least one
//! weekday unworked.

use crate::specification::Specification;

use super::{ScheduleRule, WeekRoster};

const DAYS_PER_WEEK: usize = 7;

/// Satisfied when the profile is exempt or fewer than seven distinct
/// weekdays are worked.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayOffMinimum;

impl Specification<WeekRoster<'_>> for DayOffMinimum {
    fn is_satisfied_by(&self, roster: &WeekRoster<'_>) -> bool {
        !roster.profile.rest_day_required || roster.worked_weekdays().len() < DAYS_PER_WEEK
    }
}

impl ScheduleRule<WeekRoster<'_>> for DayOffMinimum {
    fn name(&self) -> &'static str {
        "day_off_minimum"
    }

    fn explain(&self, roster: &WeekRoster<'_>) -> String {
        format!(
            "{} works all {} days in the week of {} with no rest day",
            roster.employee.name, DAYS_PER_WEEK, roster.week.start
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DatedBlock, EmployeeCategory, WeekRange};
    use crate::rules::fixtures::*;

    fn satisfied(category: EmployeeCategory, days: u32) -> bool {
        let employee = employee(category);
        let profile = profile(category);
        let blocks = (0..days).map(|d| DatedBlock::new(day(d), block(9, 12)));
        let roster = WeekRoster::new(&employee, &profile, WeekRange::containing(day(0)), blocks);
        DayOffMinimum.is_satisfied_by(&roster)
    }

    #[test]
    fn test_seven_days_fails_for_full_time() {
        assert!(!satisfied(EmployeeCategory::FullTime, 7));
    }

    #[test]
    fn test_seven_days_fails_for_part_time() {
        assert!(!satisfied(EmployeeCategory::PartTime, 7));
    }

    #[test]
    fn test_six_days_passes() {
        assert!(satisfied(EmployeeCategory::FullTime, 6));
        assert!(satisfied(EmployeeCategory::PartTime, 6));
    }

    #[test]
    fn test_special_schedule_exempt() {
        assert!(satisfied(EmployeeCategory::SpecialSchedule, 7));
    }

    #[test]
    fn test_two_blocks_same_day_count_once() {
        let employee = employee(EmployeeCategory::FullTime);
        let profile = profile(EmployeeCategory::FullTime);
        let mut blocks: Vec<DatedBlock> =
            (0..6).map(|d| DatedBlock::new(day(d), block(9, 12))).collect();
        blocks.push(DatedBlock::new(day(5), block(16, 20)));
        let roster = WeekRoster::new(&employee, &profile, WeekRange::containing(day(0)), blocks);
        assert!(DayOffMinimum.is_satisfied_by(&roster));
    }
}
