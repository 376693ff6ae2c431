//! Role allowed: a position's role must belong to its branch format.

use crate::specification::Specification;

use super::{RoleCandidate, ScheduleRule};

/// Satisfied when the branch has no format, or the format's role list
/// includes the position's role.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAllowed;

impl Specification<RoleCandidate<'_>> for RoleAllowed {
    fn is_satisfied_by(&self, candidate: &RoleCandidate<'_>) -> bool {
        match candidate.format {
            Some((_, roles)) => roles.contains(&candidate.position.role),
            None => true,
        }
    }
}

impl ScheduleRule<RoleCandidate<'_>> for RoleAllowed {
    fn name(&self) -> &'static str {
        "role_allowed"
    }

    fn explain(&self, candidate: &RoleCandidate<'_>) -> String {
        let format = candidate.format.map_or("unknown", |(name, _)| name);
        format!(
            "role '{}' is not staffed at {} branch {}",
            candidate.position.role, format, candidate.position.branch
        )
    }
}
