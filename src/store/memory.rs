//! In-memory [`RosterStore`] implementation.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::Weekday;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{
    BranchId, BranchOperatingHours, NewPosition, NewScheduledBlock, Position, PositionId,
    ScheduledBlock, TimeBlockId,
};

use super::RosterStore;

#[derive(Debug, Clone, Default)]
struct Tables {
    positions: BTreeMap<PositionId, Position>,
    time_blocks: BTreeMap<TimeBlockId, ScheduledBlock>,
    next_position_id: u64,
    next_time_block_id: u64,
}

/// A store holding every table in memory.
///
/// Transactions snapshot the tables and restore the snapshot on failure, so
/// identity sequences roll back along with the rows.
///
/// # Example
///
/// ```
/// use roster_engine::models::{BranchId, NewPosition};
/// use roster_engine::store::{InMemoryStore, RosterStore};
/// use chrono::NaiveDate;
///
/// let mut store = InMemoryStore::new();
/// let date = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// let created = store
///     .create_positions(vec![NewPosition::new(BranchId(1), "cashier", date, "Till 1")])
///     .unwrap();
/// assert_eq!(store.position_count(), 1);
/// assert_eq!(store.positions_by_ids(&[created[0].id]).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Tables,
    hours: HashMap<(BranchId, Weekday), BranchOperatingHours>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers opening hours for a branch and weekday.
    pub fn set_operating_hours(&mut self, hours: BranchOperatingHours) {
        self.hours.insert((hours.branch, hours.weekday), hours);
    }

    /// Inserts positions outside of any transaction.
    pub fn seed_positions(&mut self, positions: Vec<NewPosition>) -> Vec<Position> {
        positions
            .into_iter()
            .map(|position| self.insert_position(position))
            .collect()
    }

    /// Number of stored positions.
    pub fn position_count(&self) -> usize {
        self.tables.positions.len()
    }

    /// Number of stored time blocks.
    pub fn time_block_count(&self) -> usize {
        self.tables.time_blocks.len()
    }

    /// All stored positions, ordered by id.
    pub fn positions(&self) -> impl Iterator<Item = &Position> {
        self.tables.positions.values()
    }

    /// All stored time blocks, ordered by id.
    pub fn time_blocks(&self) -> impl Iterator<Item = &ScheduledBlock> {
        self.tables.time_blocks.values()
    }

    fn insert_position(&mut self, position: NewPosition) -> Position {
        self.tables.next_position_id += 1;
        let stored = position.with_id(PositionId(self.tables.next_position_id));
        self.tables.positions.insert(stored.id, stored.clone());
        stored
    }

    fn insert_time_block(&mut self, block: NewScheduledBlock) -> ScheduledBlock {
        self.tables.next_time_block_id += 1;
        let stored = block.with_id(TimeBlockId(self.tables.next_time_block_id));
        self.tables.time_blocks.insert(stored.id, stored.clone());
        stored
    }
}

impl RosterStore for InMemoryStore {
    fn branch_operating_hours(
        &self,
        branch: BranchId,
        weekday: Weekday,
    ) -> EngineResult<Option<BranchOperatingHours>> {
        Ok(self.hours.get(&(branch, weekday)).copied())
    }

    fn positions_by_ids(&self, ids: &[PositionId]) -> EngineResult<Vec<Position>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.tables.positions.get(id).cloned())
            .collect())
    }

    fn time_blocks_for_positions(&self, ids: &[PositionId]) -> EngineResult<Vec<ScheduledBlock>> {
        let wanted: HashSet<PositionId> = ids.iter().copied().collect();
        Ok(self
            .tables
            .time_blocks
            .values()
            .filter(|block| wanted.contains(&block.position_id))
            .cloned()
            .collect())
    }

    fn create_positions(&mut self, positions: Vec<NewPosition>) -> EngineResult<Vec<Position>> {
        Ok(self.seed_positions(positions))
    }

    fn create_time_blocks(
        &mut self,
        blocks: Vec<NewScheduledBlock>,
    ) -> EngineResult<Vec<ScheduledBlock>> {
        Ok(blocks
            .into_iter()
            .map(|block| self.insert_time_block(block))
            .collect())
    }

    fn run_in_transaction<T, F>(&mut self, work: F) -> EngineResult<T>
    where
        F: FnOnce(&mut Self) -> EngineResult<T>,
    {
        let snapshot = self.tables.clone();
        match work(self) {
            Ok(value) => {
                debug!(
                    positions = self.tables.positions.len(),
                    time_blocks = self.tables.time_blocks.len(),
                    "Transaction committed"
                );
                Ok(value)
            }
            Err(err) => {
                warn!(error = %err, "Transaction rolled back");
                self.tables = snapshot;
                Err(err)
            }
        }
    }
}
