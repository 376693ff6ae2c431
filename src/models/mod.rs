//! Core data models for the roster engine.
//!
//! This module contains the domain entities that the rule set and the
//! propagation planner operate on.

mod employee;
mod ids;
mod position;
mod profile;
mod time_block;
mod week;

pub use employee::{Employee, EmployeeArena};
pub use ids::{BranchId, EmployeeId, PositionId, TimeBlockId};
pub use position::{BranchOperatingHours, NewPosition, Position};
pub use profile::{DaySignature, EmployeeCategory, EmployeeTypeProfile};
pub use time_block::{DatedBlock, NewScheduledBlock, ScheduledBlock, TimeBlock};
pub use week::WeekRange;
