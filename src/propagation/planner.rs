//! Copy-forward of an approved week onto later weeks.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    BranchId, NewPosition, NewScheduledBlock, Position, PositionId, ScheduledBlock, WeekRange,
};
use crate::store::RosterStore;

/// What to copy and where to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationRequest {
    /// The branch being rostered.
    pub branch: BranchId,
    /// The approved week being copied.
    pub origin_week: WeekRange,
    /// The weeks receiving copies.
    pub destination_weeks: Vec<WeekRange>,
    /// Origin-week positions to copy, with their stored identities.
    pub resources: Vec<Position>,
    /// Origin-week blocks, bound to positions by id.
    pub events: Vec<ScheduledBlock>,
}

impl PropagationRequest {
    /// Builds a request from stored data: the given positions that belong to
    /// `branch` and fall inside `origin_week`, plus every block bound to them.
    pub fn from_store<S: RosterStore>(
        store: &S,
        branch: BranchId,
        origin_week: WeekRange,
        destination_weeks: Vec<WeekRange>,
        position_ids: &[PositionId],
    ) -> EngineResult<Self> {
        let resources: Vec<Position> = store
            .positions_by_ids(position_ids)?
            .into_iter()
            .filter(|position| position.branch == branch && origin_week.contains(position.date))
            .collect();
        let resource_ids: Vec<PositionId> = resources.iter().map(|position| position.id).collect();
        let events = store.time_blocks_for_positions(&resource_ids)?;

        Ok(Self {
            branch,
            origin_week,
            destination_weeks,
            resources,
            events,
        })
    }
}

/// Everything created by one propagation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropagationResult {
    /// New positions, grouped by destination week in request order.
    pub positions: Vec<Position>,
    /// New blocks bound to the new positions.
    pub time_blocks: Vec<ScheduledBlock>,
}

/// `(origin position, destination week start)` → new position.
type IdentityMap = HashMap<(PositionId, NaiveDate), PositionId>;

/// A position to create, remembering which origin row and week it copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPosition {
    /// The origin position's id.
    pub origin: PositionId,
    /// Start of the destination week.
    pub week_start: NaiveDate,
    /// The row to insert.
    pub position: NewPosition,
}

/// Replicates an origin week's positions and blocks onto destination weeks.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropagationPlanner;

impl PropagationPlanner {
    /// Checks the request and lays out the positions to create, one per
    /// `(destination week, resource)` pair, without touching storage.
    ///
    /// Fails with [`EngineError::InvalidWeek`] for inverted, misaligned or
    /// repeated weeks and [`EngineError::BranchMismatch`] for foreign
    /// resources.
    pub fn plan_positions(request: &PropagationRequest) -> EngineResult<Vec<PlannedPosition>> {
        let origin = WeekRange::new(request.origin_week.start, request.origin_week.end)?;

        if let Some(foreign) = request
            .resources
            .iter()
            .find(|position| position.branch != request.branch)
        {
            return Err(EngineError::BranchMismatch {
                position: foreign.id,
                expected: request.branch,
                actual: foreign.branch,
            });
        }

        let mut planned =
            Vec::with_capacity(request.destination_weeks.len() * request.resources.len());
        let mut seen: HashSet<NaiveDate> = HashSet::new();
        for destination in &request.destination_weeks {
            let destination = WeekRange::new(destination.start, destination.end)?;
            let offset = destination.offset_weeks_from(&origin)?;
            // The identity map is keyed by week start, so each may appear once.
            if !seen.insert(destination.start) {
                return Err(EngineError::InvalidWeek {
                    start: destination.start,
                    end: destination.end,
                    reason: "listed more than once".to_string(),
                });
            }
            for resource in &request.resources {
                planned.push(PlannedPosition {
                    origin: resource.id,
                    week_start: destination.start,
                    position: resource.shifted_by_weeks(offset),
                });
            }
        }
        Ok(planned)
    }

    /// Runs the whole propagation inside one transaction.
    ///
    /// Events whose position is not among `resources` are skipped without
    /// error. Any store failure rolls back every position and block created
    /// by this call.
    pub fn propagate<S: RosterStore>(
        store: &mut S,
        request: &PropagationRequest,
    ) -> EngineResult<PropagationResult> {
        let correlation_id = Uuid::new_v4();
        let started = Instant::now();
        info!(
            correlation_id = %correlation_id,
            branch = %request.branch,
            origin_week = %request.origin_week.start,
            destination_weeks = request.destination_weeks.len(),
            resources = request.resources.len(),
            events = request.events.len(),
            "Propagating roster"
        );

        let planned = Self::plan_positions(request)?;

        let outcome = store.run_in_transaction(|tx| {
            let keys: Vec<(PositionId, NaiveDate)> = planned
                .iter()
                .map(|plan| (plan.origin, plan.week_start))
                .collect();
            let rows: Vec<NewPosition> = planned.into_iter().map(|plan| plan.position).collect();

            let positions = tx.create_positions(rows)?;
            if positions.len() != keys.len() {
                return Err(EngineError::Persistence {
                    message: format!(
                        "store created {} positions for {} requested",
                        positions.len(),
                        keys.len()
                    ),
                });
            }
            let identities: IdentityMap = keys
                .into_iter()
                .zip(positions.iter().map(|position| position.id))
                .collect();

            let (blocks, skipped) = Self::remap_events(request, &identities);
            if skipped > 0 {
                debug!(
                    correlation_id = %correlation_id,
                    skipped,
                    "Skipped events bound to positions outside the request"
                );
            }
            let time_blocks = tx.create_time_blocks(blocks)?;

            Ok(PropagationResult {
                positions,
                time_blocks,
            })
        });

        match &outcome {
            Ok(result) => info!(
                correlation_id = %correlation_id,
                positions = result.positions.len(),
                time_blocks = result.time_blocks.len(),
                duration_us = started.elapsed().as_micros(),
                "Propagation completed"
            ),
            Err(err) => warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Propagation failed, nothing written"
            ),
        }
        outcome
    }

    /// New blocks for every `(destination week, event)` pair whose origin
    /// position was copied, and the count of pairs that were not.
    fn remap_events(
        request: &PropagationRequest,
        identities: &IdentityMap,
    ) -> (Vec<NewScheduledBlock>, usize) {
        let mut blocks = Vec::with_capacity(request.destination_weeks.len() * request.events.len());
        let mut skipped = 0;
        for destination in &request.destination_weeks {
            for event in &request.events {
                match identities.get(&(event.position_id, destination.start)) {
                    Some(position_id) => blocks.push(NewScheduledBlock {
                        position_id: *position_id,
                        block: event.block,
                        split_shift: event.split_shift,
                    }),
                    None => skipped += 1,
                }
            }
        }
        (blocks, skipped)
    }
}
