//! Vacation conflict: no blocks on an employee's leave days.

use crate::specification::Specification;

use super::{BlockCandidate, ScheduleRule};

/// Satisfied when the block's date is not one of the employee's vacation dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct VacationFree;

impl Specification<BlockCandidate<'_>> for VacationFree {
    fn is_satisfied_by(&self, candidate: &BlockCandidate<'_>) -> bool {
        !candidate.employee.is_on_vacation(candidate.date)
    }
}

impl ScheduleRule<BlockCandidate<'_>> for VacationFree {
    fn name(&self) -> &'static str {
        "vacation"
    }

    fn explain(&self, candidate: &BlockCandidate<'_>) -> String {
        format!(
            "{} is on vacation on {}",
            candidate.employee.name, candidate.date
        )
    }
}
