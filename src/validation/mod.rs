//! Validation engine.
//!
//! Groups a batch of proposed blocks by branch, fetches each branch's
//! operating hours once per weekday, runs the [`RuleSet`](crate::rules::RuleSet)
//! and gathers every failure into a [`ValidationReport`].

mod engine;
mod report;

pub use engine::{UNKNOWN_EMPLOYEE_RULE, UNKNOWN_POSITION_RULE, ValidationEngine};
pub use report::{ValidationReport, Violation};
