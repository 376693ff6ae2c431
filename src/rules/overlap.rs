//! Overlap-free: no two blocks on the same date may overlap.

use chrono::NaiveDate;

use crate::models::TimeBlock;
use crate::specification::Specification;

use super::{ScheduleRule, WeekRoster};

/// Satisfied when no pair of same-date blocks overlaps, using the closed
/// interval test of [`TimeBlock::overlaps`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapFree;

impl OverlapFree {
    fn overlapping_pairs(roster: &WeekRoster<'_>) -> Vec<(NaiveDate, TimeBlock, TimeBlock)> {
        let mut pairs = Vec::new();
        for (date, blocks) in roster.days() {
            for (i, first) in blocks.iter().enumerate() {
                for second in &blocks[i + 1..] {
                    if first.overlaps(second) {
                        pairs.push((date, *first, *second));
                    }
                }
            }
        }
        pairs
    }
}

impl Specification<WeekRoster<'_>> for OverlapFree {
    fn is_satisfied_by(&self, roster: &WeekRoster<'_>) -> bool {
        Self::overlapping_pairs(roster).is_empty()
    }
}

impl ScheduleRule<WeekRoster<'_>> for OverlapFree {
    fn name(&self) -> &'static str {
        "overlap_free"
    }

    fn explain(&self, roster: &WeekRoster<'_>) -> String {
        let pairs: Vec<String> = Self::overlapping_pairs(roster)
            .into_iter()
            .map(|(date, a, b)| {
                format!(
                    "{} {}-{} with {}-{}",
                    date,
                    a.start().format("%H:%M"),
                    a.end().format("%H:%M"),
                    b.start().format("%H:%M"),
                    b.end().format("%H:%M")
                )
            })
            .collect();
        format!("overlapping blocks: {}", pairs.join("; "))
    }
}
