//! Split-shift structure.
//!
//! Employees without a continuous schedule work every day as a split shift:
//! exactly two blocks, each at least three hours, separated by a gap of at
//! least four hours, adding up to seven or eight hours. The figures come from
//! [`SplitShiftPolicy`].

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::SplitShiftPolicy;
use crate::models::TimeBlock;
use crate::specification::Specification;

use super::{ScheduleRule, WeekRoster, day_minutes, hours_label};

/// Checks each worked day of a non-continuous employee against the
/// split-shift policy. Continuous-schedule employees always pass.
#[derive(Debug, Clone)]
pub struct SplitShiftStructure {
    policy: SplitShiftPolicy,
}

impl SplitShiftStructure {
    /// Creates the rule with the given parameters.
    pub fn new(policy: SplitShiftPolicy) -> Self {
        Self { policy }
    }

    /// Describes what is wrong with one day's blocks, or `None` if the day
    /// is a well-formed split shift. `blocks` must be sorted by start.
    pub fn day_problem(&self, blocks: &[TimeBlock]) -> Option<String> {
        let policy = &self.policy;
        if blocks.len() != policy.blocks_per_day {
            return Some(format!(
                "{} block(s), expected {}",
                blocks.len(),
                policy.blocks_per_day
            ));
        }

        let min_block = policy.min_block_hours * Decimal::from(60);
        if let Some(short) = blocks
            .iter()
            .find(|block| Decimal::from(block.duration_minutes()) < min_block)
        {
            return Some(format!(
                "block of {} is under {}h",
                hours_label(short.duration_minutes()),
                policy.min_block_hours.normalize()
            ));
        }

        let min_gap = policy.min_gap_hours * Decimal::from(60);
        for pair in blocks.windows(2) {
            let gap = (pair[1].start() - pair[0].end()).num_minutes();
            if Decimal::from(gap) < min_gap {
                return Some(format!(
                    "gap of {} is under {}h",
                    hours_label(gap),
                    policy.min_gap_hours.normalize()
                ));
            }
        }

        let total = Decimal::from(day_minutes(blocks));
        let allowed = policy
            .allowed_total_hours
            .iter()
            .any(|hours| *hours * Decimal::from(60) == total);
        if !allowed {
            let options: Vec<String> = policy
                .allowed_total_hours
                .iter()
                .map(|hours| format!("{}h", hours.normalize()))
                .collect();
            return Some(format!(
                "total of {} is not one of {}",
                hours_label(day_minutes(blocks)),
                options.join(", ")
            ));
        }

        None
    }

    fn problems(&self, roster: &WeekRoster<'_>) -> Vec<(NaiveDate, String)> {
        if roster.employee.continuous_schedule {
            return Vec::new();
        }
        roster
            .days()
            .into_iter()
            .filter_map(|(date, blocks)| self.day_problem(&blocks).map(|problem| (date, problem)))
            .collect()
    }
}

impl Specification<WeekRoster<'_>> for SplitShiftStructure {
    fn is_satisfied_by(&self, roster: &WeekRoster<'_>) -> bool {
        self.problems(roster).is_empty()
    }
}

impl ScheduleRule<WeekRoster<'_>> for SplitShiftStructure {
    fn name(&self) -> &'static str {
        "split_shift"
    }

    fn explain(&self, roster: &WeekRoster<'_>) -> String {
        let days: Vec<String> = self
            .problems(roster)
            .into_iter()
            .map(|(date, problem)| format!("{date}: {problem}"))
            .collect();
        format!("invalid split shift on {}", days.join("; "))
    }
}
