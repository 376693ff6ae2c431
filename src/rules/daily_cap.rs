//! Daily cap: a single block may not exceed the category's daily hour cap.

use rust_decimal::Decimal;

use crate::specification::Specification;

use super::{BlockCandidate, ScheduleRule, hours_label};

/// Satisfied when the proposed block is no longer than
/// `profile.daily_hour_cap` hours.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyCap;

impl Specification<BlockCandidate<'_>> for DailyCap {
    fn is_satisfied_by(&self, candidate: &BlockCandidate<'_>) -> bool {
        Decimal::from(candidate.block.duration_minutes()) <= candidate.profile.daily_cap_minutes()
    }
}

impl ScheduleRule<BlockCandidate<'_>> for DailyCap {
    fn name(&self) -> &'static str {
        "daily_cap"
    }

    fn explain(&self, candidate: &BlockCandidate<'_>) -> String {
        format!(
            "{} block on {} exceeds the {}h daily cap for {}",
            hours_label(candidate.block.duration_minutes()),
            candidate.date,
            candidate.profile.daily_hour_cap.normalize(),
            candidate.profile.category
        )
    }
}
