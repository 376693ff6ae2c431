//! Branch-hours containment: a block must fit inside the branch's opening
//! hours for that weekday.

use crate::specification::Specification;

use super::{HoursCandidate, ScheduleRule};

/// Satisfied when `[block.start, block.end]` lies within `[open, close]`.
///
/// A branch with no hours for the weekday is closed, and every block fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchHoursContainment;

impl Specification<HoursCandidate<'_>> for BranchHoursContainment {
    fn is_satisfied_by(&self, candidate: &HoursCandidate<'_>) -> bool {
        candidate
            .hours
            .is_some_and(|hours| candidate.block.within(hours.open, hours.close))
    }
}

impl ScheduleRule<HoursCandidate<'_>> for BranchHoursContainment {
    fn name(&self) -> &'static str {
        "branch_hours"
    }

    fn explain(&self, candidate: &HoursCandidate<'_>) -> String {
        let block = candidate.block;
        match candidate.hours {
            Some(hours) => format!(
                "block {}-{} falls outside branch {} hours {}-{} on {}",
                block.start().format("%H:%M"),
                block.end().format("%H:%M"),
                hours.branch,
                hours.open.format("%H:%M"),
                hours.close.format("%H:%M"),
                hours.weekday
            ),
            None => format!(
                "block {}-{} is on a day the branch is closed",
                block.start().format("%H:%M"),
                block.end().format("%H:%M")
            ),
        }
    }
}
