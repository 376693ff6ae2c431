//! Schedule propagation.
//!
//! Copies an approved week's positions and their time blocks onto later
//! weeks, keeping weekday and time-of-day and remapping each copied block to
//! the position created for it in the destination week. A run either writes
//! everything or nothing.

mod planner;

pub use planner::{PlannedPosition, PropagationPlanner, PropagationRequest, PropagationResult};
