//! Category defaults: the week must follow the category's canonical pattern
//! of day lengths.
//!
//! Days are measured by their total worked minutes, so a split day of
//! 3h + 4h counts as one 7h day.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::specification::Specification;

use super::{ScheduleRule, WeekRoster, day_minutes, hours_label};

/// Satisfied when every signature line is matched by exactly `count` days
/// and no day falls outside the signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryDefaults;

impl CategoryDefaults {
    /// Number of worked days per day length, in minutes.
    fn day_lengths(roster: &WeekRoster<'_>) -> BTreeMap<i64, u32> {
        let mut lengths = BTreeMap::new();
        for blocks in roster.days().values() {
            *lengths.entry(day_minutes(blocks)).or_insert(0) += 1;
        }
        lengths
    }
}

impl Specification<WeekRoster<'_>> for CategoryDefaults {
    fn is_satisfied_by(&self, roster: &WeekRoster<'_>) -> bool {
        let lengths = Self::day_lengths(roster);
        let signature = &roster.profile.signature;

        let lines_match = signature.iter().all(|line| {
            let matched: u32 = lengths
                .iter()
                .filter(|(minutes, _)| Decimal::from(**minutes) == line.minutes())
                .map(|(_, days)| *days)
                .sum();
            matched == line.count
        });
        let worked_days: u32 = lengths.values().sum();

        lines_match && worked_days == roster.profile.expected_days()
    }
}

impl ScheduleRule<WeekRoster<'_>> for CategoryDefaults {
    fn name(&self) -> &'static str {
        "category_defaults"
    }

    fn explain(&self, roster: &WeekRoster<'_>) -> String {
        let expected: Vec<String> = roster
            .profile
            .signature
            .iter()
            .map(|line| format!("{}x{}h", line.count, line.hours.normalize()))
            .collect();
        let actual: Vec<String> = Self::day_lengths(roster)
            .into_iter()
            .map(|(minutes, days)| format!("{}x{}", days, hours_label(minutes)))
            .collect();
        format!(
            "{} pattern expects {}, week of {} has {}",
            roster.profile.category,
            expected.join(" + "),
            roster.week.start,
            if actual.is_empty() {
                "no worked days".to_string()
            } else {
                actual.join(" + ")
            }
        )
    }
}
