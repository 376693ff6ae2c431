//! Batch validation of proposed time blocks.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::time::Instant;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::PolicyConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    BranchId, BranchOperatingHours, DatedBlock, EmployeeArena, EmployeeId, NewScheduledBlock,
    Position, PositionId, ScheduledBlock, WeekRange,
};
use crate::rules::{BlockCandidate, HoursCandidate, RoleCandidate, RuleSet, WeekRoster};
use crate::store::RosterStore;

use super::report::{ValidationReport, Violation};

/// Rule name used when a proposed block names a position the store does not
/// know.
pub const UNKNOWN_POSITION_RULE: &str = "unknown_position";

/// Rule name used when a position is bound to an employee missing from the
/// arena.
pub const UNKNOWN_EMPLOYEE_RULE: &str = "unknown_employee";

/// Proposed blocks for one employee in one week, with the position of the
/// first block that put them there.
struct WeekGroup {
    first_position: PositionId,
    blocks: Vec<DatedBlock>,
}

/// Runs the rule set over batches of proposed blocks.
///
/// # Example
///
/// ```
/// use roster_engine::config::PolicyConfig;
/// use roster_engine::models::EmployeeArena;
/// use roster_engine::store::InMemoryStore;
/// use roster_engine::validation::ValidationEngine;
///
/// let engine = ValidationEngine::new(PolicyConfig::default());
/// let store = InMemoryStore::new();
/// let report = engine.validate(&store, &[], &EmployeeArena::new()).unwrap();
/// assert!(report.ok);
/// ```
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    policy: PolicyConfig,
    rules: RuleSet,
}

impl ValidationEngine {
    /// Creates an engine enforcing `policy`.
    pub fn new(policy: PolicyConfig) -> Self {
        let rules = RuleSet::from_policy(&policy);
        Self { policy, rules }
    }

    /// The policy being enforced.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }

    /// Evaluates every applicable rule for every proposed block.
    ///
    /// Rule failures never abort the run; they are all collected into the
    /// returned report. A bound employee missing from `employees` is reported
    /// as an [`UNKNOWN_EMPLOYEE_RULE`] violation and their employee rules are
    /// skipped. Errors are reserved for store failures and categories
    /// without a profile.
    pub fn validate<S: RosterStore>(
        &self,
        store: &S,
        proposed: &[NewScheduledBlock],
        employees: &EmployeeArena,
    ) -> EngineResult<ValidationReport> {
        let correlation_id = Uuid::new_v4();
        let started = Instant::now();
        info!(
            correlation_id = %correlation_id,
            blocks = proposed.len(),
            "Validating proposed time blocks"
        );

        let ids: Vec<PositionId> = proposed
            .iter()
            .map(|block| block.position_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let positions: HashMap<PositionId, Position> = store
            .positions_by_ids(&ids)?
            .into_iter()
            .map(|position| (position.id, position))
            .collect();

        let mut violations = Vec::new();
        let mut by_branch: BTreeMap<BranchId, Vec<(&NewScheduledBlock, &Position)>> =
            BTreeMap::new();
        for block in proposed {
            match positions.get(&block.position_id) {
                Some(position) => by_branch
                    .entry(position.branch)
                    .or_default()
                    .push((block, position)),
                None => {
                    warn!(
                        correlation_id = %correlation_id,
                        position_id = %block.position_id,
                        "Proposed block references unknown position"
                    );
                    violations.push(
                        Violation::new(
                            UNKNOWN_POSITION_RULE,
                            format!("position {} does not exist", block.position_id),
                        )
                        .with_position(block.position_id),
                    );
                }
            }
        }

        let mut weeks: BTreeMap<(EmployeeId, NaiveDate), WeekGroup> = BTreeMap::new();
        for (branch, entries) in &by_branch {
            self.check_branch(store, *branch, entries, employees, &mut violations)?;

            for &(block, position) in entries {
                let Some(employee_id) = position.employee_id else {
                    continue;
                };
                let week = WeekRange::containing(position.date);
                weeks
                    .entry((employee_id, week.start))
                    .or_insert_with(|| WeekGroup {
                        first_position: position.id,
                        blocks: Vec::new(),
                    })
                    .blocks
                    .push(DatedBlock::new(position.date, block.block));
            }
        }

        for ((employee_id, week_start), group) in weeks {
            // Already reported by `check_branch`.
            let Some(employee) = employees.get(employee_id) else {
                continue;
            };
            let profile = self.policy.profile(employee.category)?;
            let roster = WeekRoster::new(
                employee,
                profile,
                WeekRange::containing(week_start),
                group.blocks,
            );
            for (rule, message) in self.rules.check_week(&roster) {
                violations.push(
                    Violation::new(rule, message)
                        .with_position(group.first_position)
                        .with_employee(employee_id),
                );
            }
        }

        let report = ValidationReport::from_violations(violations);
        info!(
            correlation_id = %correlation_id,
            ok = report.ok,
            violations = report.violations.len(),
            duration_us = started.elapsed().as_micros(),
            "Validation completed"
        );
        Ok(report)
    }

    /// Validates `proposed` and, when the report is clean, persists it in a
    /// single transaction.
    ///
    /// A report with violations is returned as
    /// [`EngineError::RuleViolations`] and nothing is written.
    pub fn submit<S: RosterStore>(
        &self,
        store: &mut S,
        proposed: Vec<NewScheduledBlock>,
        employees: &EmployeeArena,
    ) -> EngineResult<Vec<ScheduledBlock>> {
        let report = self.validate(&*store, &proposed, employees)?;
        if !report.ok {
            return Err(EngineError::RuleViolations {
                violations: report.violations,
            });
        }
        let created = store.run_in_transaction(|tx| tx.create_time_blocks(proposed))?;
        info!(created = created.len(), "Persisted validated time blocks");
        Ok(created)
    }

    /// Per-block rules for the blocks of one branch. Operating hours are
    /// fetched once per weekday of the position's date.
    fn check_branch<S: RosterStore>(
        &self,
        store: &S,
        branch: BranchId,
        entries: &[(&NewScheduledBlock, &Position)],
        employees: &EmployeeArena,
        violations: &mut Vec<Violation>,
    ) -> EngineResult<()> {
        let mut hours: HashMap<Weekday, Option<BranchOperatingHours>> = HashMap::new();
        let format = self
            .policy
            .format_of(branch)
            .map(|name| (name, self.policy.roles_of(name)));
        let mut role_checked: HashSet<PositionId> = HashSet::new();
        let mut unknown_reported: HashSet<PositionId> = HashSet::new();

        debug!(branch = %branch, blocks = entries.len(), "Checking branch batch");

        for &(block, position) in entries {
            let weekday = position.date.weekday();
            let day_hours = match hours.get(&weekday) {
                Some(cached) => *cached,
                None => {
                    let fetched = store.branch_operating_hours(branch, weekday)?;
                    hours.insert(weekday, fetched);
                    fetched
                }
            };

            if let Some((rule, message)) = self.rules.check_hours(&HoursCandidate {
                block: &block.block,
                hours: day_hours.as_ref(),
            }) {
                violations.push(Violation::new(rule, message).with_position(position.id));
            }

            if role_checked.insert(position.id) {
                let candidate = RoleCandidate {
                    position,
                    format: format.as_ref().map(|(name, roles)| (*name, roles)),
                };
                if let Some((rule, message)) = self.rules.check_role(&candidate) {
                    violations.push(Violation::new(rule, message).with_position(position.id));
                }
            }

            let Some(employee_id) = position.employee_id else {
                continue;
            };
            let Some(employee) = employees.get(employee_id) else {
                if unknown_reported.insert(position.id) {
                    warn!(
                        position_id = %position.id,
                        employee_id = %employee_id,
                        "Position bound to unknown employee"
                    );
                    violations.push(
                        Violation::new(
                            UNKNOWN_EMPLOYEE_RULE,
                            format!("employee {employee_id} does not exist"),
                        )
                        .with_position(position.id)
                        .with_employee(employee_id),
                    );
                }
                continue;
            };
            let profile = self.policy.profile(employee.category)?;
            let candidate = BlockCandidate {
                block: &block.block,
                date: position.date,
                employee,
                profile,
            };
            for (rule, message) in self.rules.check_block(&candidate) {
                violations.push(
                    Violation::new(rule, message)
                        .with_position(position.id)
                        .with_employee(employee_id),
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use chrono::NaiveTime;

    use crate::config::{FormatsConfig, SplitShiftPolicy};
    use crate::models::{Employee, EmployeeCategory, EmployeeTypeProfile, NewPosition, TimeBlock};
    use crate::store::InMemoryStore;

    /// Counts operating-hours lookups made through it.
    struct CountingStore {
        inner: InMemoryStore,
        hour_lookups: Cell<usize>,
    }

    impl RosterStore for CountingStore {
        fn branch_operating_hours(
            &self,
            branch: BranchId,
            weekday: Weekday,
        ) -> EngineResult<Option<BranchOperatingHours>> {
            self.hour_lookups.set(self.hour_lookups.get() + 1);
            self.inner.branch_operating_hours(branch, weekday)
        }

        fn positions_by_ids(&self, ids: &[PositionId]) -> EngineResult<Vec<Position>> {
            self.inner.positions_by_ids(ids)
        }

        fn time_blocks_for_positions(
            &self,
            ids: &[PositionId],
        ) -> EngineResult<Vec<ScheduledBlock>> {
            self.inner.time_blocks_for_positions(ids)
        }

        fn create_positions(
            &mut self,
            positions: Vec<NewPosition>,
        ) -> EngineResult<Vec<Position>> {
            self.inner.create_positions(positions)
        }

        fn create_time_blocks(
            &mut self,
            blocks: Vec<NewScheduledBlock>,
        ) -> EngineResult<Vec<ScheduledBlock>> {
            self.inner.create_time_blocks(blocks)
        }

        fn run_in_transaction<T, F>(&mut self, work: F) -> EngineResult<T>
        where
            F: FnOnce(&mut Self) -> EngineResult<T>,
        {
            work(self)
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    }

    fn counting_store(positions: Vec<NewPosition>) -> (CountingStore, Vec<Position>) {
        let mut inner = InMemoryStore::new();
        for branch in [BranchId(1), BranchId(2)] {
            inner.set_operating_hours(BranchOperatingHours {
                branch,
                weekday: Weekday::Mon,
                open: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                close: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            });
        }
        let seeded = inner.seed_positions(positions);
        let store = CountingStore {
            inner,
            hour_lookups: Cell::new(0),
        };
        (store, seeded)
    }

    fn proposal(position: &Position, start_h: u32, end_h: u32) -> NewScheduledBlock {
        NewScheduledBlock {
            position_id: position.id,
            block: TimeBlock::from_hm(start_h, 0, end_h, 0).unwrap(),
            split_shift: false,
        }
    }

    #[test]
    fn test_hours_fetched_once_per_branch_and_weekday() {
        let (store, positions) = counting_store(vec![
            NewPosition::new(BranchId(1), "cashier", monday(), "Till 1"),
            NewPosition::new(BranchId(1), "cashier", monday(), "Till 2"),
            NewPosition::new(BranchId(1), "cashier", monday(), "Till 3"),
            NewPosition::new(BranchId(2), "cashier", monday(), "Till 1"),
        ]);
        let blocks: Vec<_> = positions
            .iter()
            .map(|position| proposal(position, 9, 13))
            .collect();

        let engine = ValidationEngine::new(PolicyConfig::default());
        let report = engine
            .validate(&store, &blocks, &EmployeeArena::new())
            .unwrap();

        assert!(report.ok);
        assert_eq!(store.hour_lookups.get(), 2);
    }

    #[test]
    fn test_week_violation_tagged_with_first_position() {
        let employee = EmployeeId(7);
        let (store, positions) = counting_store(vec![
            NewPosition::new(BranchId(1), "cashier", monday(), "Till 1").with_employee(employee),
            NewPosition::new(BranchId(1), "cashier", monday(), "Till 2").with_employee(employee),
        ]);
        let employees: EmployeeArena =
            [Employee::new(employee, "Robin", EmployeeCategory::PartTime)]
                .into_iter()
                .collect();
        let blocks = vec![proposal(&positions[0], 9, 12), proposal(&positions[1], 14, 16)];

        let engine = ValidationEngine::new(PolicyConfig::default());
        let report = engine.validate(&store, &blocks, &employees).unwrap();

        let weekly: Vec<_> = report.by_rule("weekly_total").collect();
        assert_eq!(weekly.len(), 1);
        assert_eq!(weekly[0].position_id, Some(positions[0].id));
        assert_eq!(weekly[0].employee_id, Some(employee));
    }

    #[test]
    fn test_missing_profile_is_an_error() {
        let employee = EmployeeId(7);
        let (store, positions) = counting_store(vec![
            NewPosition::new(BranchId(1), "cashier", monday(), "Till 1").with_employee(employee),
        ]);
        let employees: EmployeeArena =
            [Employee::new(employee, "Robin", EmployeeCategory::SpecialSchedule)]
                .into_iter()
                .collect();
        let policy = PolicyConfig::new(
            vec![EmployeeTypeProfile::canonical(EmployeeCategory::FullTime)],
            SplitShiftPolicy::default(),
            FormatsConfig::default(),
        );

        let result = ValidationEngine::new(policy).validate(
            &store,
            &[proposal(&positions[0], 9, 12)],
            &employees,
        );

        assert!(matches!(
            result,
            Err(EngineError::ProfileNotFound {
                category: EmployeeCategory::SpecialSchedule
            })
        ));
    }

    #[test]
    fn test_unknown_employee_keeps_other_violations() {
        let (store, positions) = counting_store(vec![
            NewPosition::new(BranchId(1), "cashier", monday(), "Till 1"),
            NewPosition::new(BranchId(1), "cashier", monday(), "Till 2")
                .with_employee(EmployeeId(42)),
        ]);
        let blocks = vec![
            proposal(&positions[0], 6, 10),
            proposal(&positions[1], 9, 12),
            proposal(&positions[1], 13, 15),
        ];

        let engine = ValidationEngine::new(PolicyConfig::default());
        let report = engine
            .validate(&store, &blocks, &EmployeeArena::new())
            .unwrap();

        assert!(!report.ok);
        assert!(report.has_rule("branch_hours"));
        let unknown: Vec<_> = report.by_rule(UNKNOWN_EMPLOYEE_RULE).collect();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].position_id, Some(positions[1].id));
        assert_eq!(unknown[0].employee_id, Some(EmployeeId(42)));
        assert!(!report.has_rule("weekly_total"));
    }

    #[test]
    fn test_hours_follow_position_date() {
        let mut mislabelled = NewPosition::new(BranchId(1), "cashier", monday(), "Till 1");
        mislabelled.weekday = Weekday::Tue;
        let (store, positions) = counting_store(vec![mislabelled]);

        let engine = ValidationEngine::new(PolicyConfig::default());
        let report = engine
            .validate(&store, &[proposal(&positions[0], 9, 13)], &EmployeeArena::new())
            .unwrap();

        assert!(report.ok, "unexpected violations: {:?}", report.violations);
    }
}
