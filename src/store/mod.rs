//! Persistence collaborator contract.
//!
//! The engine never touches storage directly. Validation reads branch hours
//! and positions through [`RosterStore`]; propagation and `submit` write
//! batches inside [`RosterStore::run_in_transaction`].

mod memory;

use chrono::Weekday;

use crate::error::EngineResult;
use crate::models::{
    BranchId, BranchOperatingHours, NewPosition, NewScheduledBlock, Position, PositionId,
    ScheduledBlock,
};

pub use memory::InMemoryStore;

/// Storage operations the engine depends on.
pub trait RosterStore {
    /// Opening hours of `branch` on `weekday`; `None` when the branch is
    /// closed that day or unknown.
    fn branch_operating_hours(
        &self,
        branch: BranchId,
        weekday: Weekday,
    ) -> EngineResult<Option<BranchOperatingHours>>;

    /// Positions for the given ids. Unknown ids are left out of the result.
    fn positions_by_ids(&self, ids: &[PositionId]) -> EngineResult<Vec<Position>>;

    /// Time blocks bound to any of the given positions.
    fn time_blocks_for_positions(&self, ids: &[PositionId]) -> EngineResult<Vec<ScheduledBlock>>;

    /// Persists positions, returning them with identities in input order.
    fn create_positions(&mut self, positions: Vec<NewPosition>) -> EngineResult<Vec<Position>>;

    /// Persists time blocks, returning them with identities in input order.
    fn create_time_blocks(
        &mut self,
        blocks: Vec<NewScheduledBlock>,
    ) -> EngineResult<Vec<ScheduledBlock>>;

    /// Runs `work` atomically: every write it made is kept when it returns
    /// `Ok` and discarded when it returns `Err`.
    fn run_in_transaction<T, F>(&mut self, work: F) -> EngineResult<T>
    where
        F: FnOnce(&mut Self) -> EngineResult<T>;
}
