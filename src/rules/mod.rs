//! Labor-policy rules for proposed shifts.
//!
//! Every rule is a [`Specification`] over one of the candidate types below:
//! per-block rules look at a single proposed block, roster rules look at an
//! employee's whole week. [`RuleSet`] bundles the rules configured by a
//! [`PolicyConfig`].

mod branch_hours;
mod category_defaults;
mod daily_cap;
mod day_off;
mod overlap;
mod role;
mod split_shift;
mod vacation;
mod weekly_total;

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};

use crate::config::PolicyConfig;
use crate::models::{
    BranchOperatingHours, DatedBlock, Employee, EmployeeTypeProfile, Position, TimeBlock,
    WeekRange,
};
use crate::specification::Specification;

pub use branch_hours::BranchHoursContainment;
pub use category_defaults::CategoryDefaults;
pub use daily_cap::DailyCap;
pub use day_off::DayOffMinimum;
pub use overlap::OverlapFree;
pub use role::RoleAllowed;
pub use split_shift::SplitShiftStructure;
pub use vacation::VacationFree;
pub use weekly_total::WeeklyTotal;

/// A specification that can name itself and describe a failure.
pub trait ScheduleRule<T: ?Sized>: Specification<T> {
    /// Stable rule identifier used in violation reports.
    fn name(&self) -> &'static str;

    /// Human-readable description of why `candidate` fails.
    fn explain(&self, candidate: &T) -> String;

    /// `None` when satisfied, otherwise the failure description.
    fn check(&self, candidate: &T) -> Option<String> {
        if self.is_satisfied_by(candidate) {
            None
        } else {
            Some(self.explain(candidate))
        }
    }
}

/// A single proposed block for a bound employee.
#[derive(Debug, Clone, Copy)]
pub struct BlockCandidate<'a> {
    /// The block being proposed.
    pub block: &'a TimeBlock,
    /// The date the block would be worked.
    pub date: NaiveDate,
    /// The employee it would be assigned to.
    pub employee: &'a Employee,
    /// That employee's hour profile.
    pub profile: &'a EmployeeTypeProfile,
}

/// A proposed block against its branch's hours for the day.
#[derive(Debug, Clone, Copy)]
pub struct HoursCandidate<'a> {
    /// The block being proposed.
    pub block: &'a TimeBlock,
    /// Operating hours, or `None` when the branch is closed that day.
    pub hours: Option<&'a BranchOperatingHours>,
}

/// A position against the roles its branch format allows.
#[derive(Debug, Clone, Copy)]
pub struct RoleCandidate<'a> {
    /// The position being staffed.
    pub position: &'a Position,
    /// The branch format name and its roles, when the branch has a format.
    pub format: Option<(&'a str, &'a BTreeSet<String>)>,
}

/// Every block an employee would work during one week.
#[derive(Debug, Clone)]
pub struct WeekRoster<'a> {
    /// The employee.
    pub employee: &'a Employee,
    /// That employee's hour profile.
    pub profile: &'a EmployeeTypeProfile,
    /// The week being checked.
    pub week: WeekRange,
    /// Already-assigned and proposed blocks falling in `week`.
    pub blocks: Vec<DatedBlock>,
}

impl<'a> WeekRoster<'a> {
    /// Builds the roster from the employee's existing blocks in `week` plus
    /// `proposed`.
    pub fn new(
        employee: &'a Employee,
        profile: &'a EmployeeTypeProfile,
        week: WeekRange,
        proposed: impl IntoIterator<Item = DatedBlock>,
    ) -> Self {
        let blocks = employee
            .blocks_in_week(&week)
            .copied()
            .chain(proposed.into_iter().filter(|dated| week.contains(dated.date)))
            .collect();
        Self {
            employee,
            profile,
            week,
            blocks,
        }
    }

    /// Blocks grouped by date, each day sorted by start time.
    pub fn days(&self) -> BTreeMap<NaiveDate, Vec<TimeBlock>> {
        let mut days: BTreeMap<NaiveDate, Vec<TimeBlock>> = BTreeMap::new();
        for dated in &self.blocks {
            days.entry(dated.date).or_default().push(dated.block);
        }
        for blocks in days.values_mut() {
            blocks.sort_by_key(|block| (block.start(), block.end()));
        }
        days
    }

    /// Worked minutes summed over the week.
    pub fn total_minutes(&self) -> i64 {
        self.blocks
            .iter()
            .map(|dated| dated.block.duration_minutes())
            .sum()
    }

    /// Distinct weekdays with at least one block.
    pub fn worked_weekdays(&self) -> BTreeSet<u32> {
        self.blocks
            .iter()
            .map(|dated| dated.date.weekday().num_days_from_monday())
            .collect()
    }
}

/// Worked minutes on one day.
pub(crate) fn day_minutes(blocks: &[TimeBlock]) -> i64 {
    blocks.iter().map(TimeBlock::duration_minutes).sum()
}

/// Formats minutes as hours for messages, e.g. `7.5h`.
pub(crate) fn hours_label(minutes: i64) -> String {
    let hours = rust_decimal::Decimal::from(minutes) / rust_decimal::Decimal::from(60);
    format!("{}h", hours.normalize())
}

/// The rules evaluated by the validation engine.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Per-block length cap.
    pub daily_cap: DailyCap,
    /// Blocks on leave days.
    pub vacation: VacationFree,
    /// Branch opening hours.
    pub branch_hours: BranchHoursContainment,
    /// Roles permitted by branch format.
    pub role: RoleAllowed,
    /// Exact weekly total.
    pub weekly_total: WeeklyTotal,
    /// No overlapping blocks on the same date.
    pub overlap: OverlapFree,
    /// At least one rest day.
    pub day_off: DayOffMinimum,
    /// Canonical day-length pattern.
    pub category_defaults: CategoryDefaults,
    /// Split-day structure.
    pub split_shift: SplitShiftStructure,
}

impl RuleSet {
    /// Builds every rule from `policy`.
    pub fn from_policy(policy: &PolicyConfig) -> Self {
        Self {
            daily_cap: DailyCap,
            vacation: VacationFree,
            branch_hours: BranchHoursContainment,
            role: RoleAllowed,
            weekly_total: WeeklyTotal,
            overlap: OverlapFree,
            day_off: DayOffMinimum,
            category_defaults: CategoryDefaults,
            split_shift: SplitShiftStructure::new(policy.split_shift().clone()),
        }
    }

    /// Failures of the rules that look at one proposed block.
    pub fn check_block(&self, candidate: &BlockCandidate<'_>) -> Vec<(&'static str, String)> {
        let mut failures = Vec::new();
        collect(&self.daily_cap, candidate, &mut failures);
        collect(&self.vacation, candidate, &mut failures);
        failures
    }

    /// Failure of the branch opening-hours rule, if any.
    pub fn check_hours(&self, candidate: &HoursCandidate<'_>) -> Option<(&'static str, String)> {
        self.branch_hours
            .check(candidate)
            .map(|message| (self.branch_hours.name(), message))
    }

    /// Failure of the branch format role rule, if any.
    pub fn check_role(&self, candidate: &RoleCandidate<'_>) -> Option<(&'static str, String)> {
        self.role
            .check(candidate)
            .map(|message| (self.role.name(), message))
    }

    /// Failures of the rules that look at a whole week.
    pub fn check_week(&self, roster: &WeekRoster<'_>) -> Vec<(&'static str, String)> {
        let mut failures = Vec::new();
        collect(&self.weekly_total, roster, &mut failures);
        collect(&self.overlap, roster, &mut failures);
        collect(&self.day_off, roster, &mut failures);
        collect(&self.category_defaults, roster, &mut failures);
        collect(&self.split_shift, roster, &mut failures);
        failures
    }
}

fn collect<T, R: ScheduleRule<T>>(
    rule: &R,
    candidate: &T,
    failures: &mut Vec<(&'static str, String)>,
) {
    if let Some(message) = rule.check(candidate) {
        failures.push((rule.name(), message));
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::models::{EmployeeCategory, TimeBlock};

    #[test]
    fn test_week_roster_merges_existing_and_proposed() {
        let mut employee = employee(EmployeeCategory::FullTime);
        employee.assign_block(day(0), block(9, 16));
        employee.assign_block(day(7), block(9, 16));
        let profile = profile(EmployeeCategory::FullTime);

        let roster = WeekRoster::new(
            &employee,
            &profile,
            WeekRange::containing(day(0)),
            vec![
                DatedBlock::new(day(1), block(9, 17)),
                DatedBlock::new(day(8), block(9, 17)),
            ],
        );

        assert_eq!(roster.blocks.len(), 2);
        assert_eq!(roster.total_minutes(), 900);
        assert_eq!(roster.worked_weekdays().len(), 2);
    }

    #[test]
    fn test_days_sorted_by_start() {
        let employee = employee(EmployeeCategory::FullTime);
        let profile = profile(EmployeeCategory::FullTime);
        let roster = WeekRoster::new(
            &employee,
            &profile,
            WeekRange::containing(day(0)),
            vec![
                DatedBlock::new(day(0), block(16, 20)),
                DatedBlock::new(day(0), block(9, 12)),
            ],
        );

        let days = roster.days();
        let monday: &Vec<TimeBlock> = &days[&day(0)];
        assert_eq!(monday[0], block(9, 12));
        assert_eq!(day_minutes(monday), 420);
    }

    #[test]
    fn test_hours_label() {
        assert_eq!(hours_label(450), "7.5h");
        assert_eq!(hours_label(480), "8h");
    }

    #[test]
    fn test_rule_set_full_time_week_is_clean() {
        let employee = employee(EmployeeCategory::FullTime);
        let profile = profile(EmployeeCategory::FullTime);
        let roster = WeekRoster::new(
            &employee,
            &profile,
            WeekRange::containing(day(0)),
            full_time_week(),
        );

        let rules = RuleSet::from_policy(&PolicyConfig::default());
        assert!(rules.check_week(&roster).is_empty());
    }

    #[test]
    fn test_rule_set_reports_every_failure() {
        let employee = employee(EmployeeCategory::FullTime);
        let profile = profile(EmployeeCategory::FullTime);
        let mut blocks = full_time_week();
        blocks.push(DatedBlock::new(day(6), block(9, 17)));

        let roster = WeekRoster::new(&employee, &profile, WeekRange::containing(day(0)), blocks);
        let rules = RuleSet::from_policy(&PolicyConfig::default());
        let names: Vec<&str> = rules
            .check_week(&roster)
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(names, vec!["weekly_total", "day_off_minimum", "category_defaults"]);
    }
}
