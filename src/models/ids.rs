//! Identifier newtypes for roster entities.
//!
//! Entities reference each other by id only; lookups go through the
//! [`EmployeeArena`](super::EmployeeArena) or the persistence collaborator.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifies a branch (store location).
    BranchId
);
entity_id!(
    /// Identifies an employee.
    EmployeeId
);
entity_id!(
    /// Identifies a persisted position.
    PositionId
);
entity_id!(
    /// Identifies a persisted time block.
    TimeBlockId
);
