//! Employee model and the employee arena.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::{DatedBlock, EmployeeCategory, EmployeeId, TimeBlock, WeekRange};

/// Represents an employee who can be bound to positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// The labor category the employee is hired under.
    pub category: EmployeeCategory,
    /// True when the employee works one continuous block per day; false
    /// subjects every worked day to the split-shift structure rule.
    #[serde(default = "default_continuous")]
    pub continuous_schedule: bool,
    /// Blocks already assigned, each tagged with its date.
    #[serde(default)]
    pub assigned_blocks: Vec<DatedBlock>,
    /// Weekdays the employee prefers to work.
    #[serde(default)]
    pub preferred_days: Vec<Weekday>,
    /// Dates the employee is on leave.
    #[serde(default)]
    pub vacation_dates: BTreeSet<NaiveDate>,
    /// Overtime minutes recorded per category label.
    #[serde(default)]
    pub overtime_minutes: BTreeMap<String, i64>,
}

fn default_continuous() -> bool {
    true
}

impl Employee {
    /// Creates an employee with no assignments.
    pub fn new(id: EmployeeId, name: impl Into<String>, category: EmployeeCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            continuous_schedule: true,
            assigned_blocks: Vec::new(),
            preferred_days: Vec::new(),
            vacation_dates: BTreeSet::new(),
            overtime_minutes: BTreeMap::new(),
        }
    }

    /// Records a block worked on `date`.
    pub fn assign_block(&mut self, date: NaiveDate, block: TimeBlock) {
        self.assigned_blocks.push(DatedBlock::new(date, block));
    }

    /// Marks `date` as a vacation day.
    pub fn add_vacation(&mut self, date: NaiveDate) {
        self.vacation_dates.insert(date);
    }

    /// Returns true if the employee is on leave on `date`.
    pub fn is_on_vacation(&self, date: NaiveDate) -> bool {
        self.vacation_dates.contains(&date)
    }

    /// Returns true if `weekday` is one of the employee's preferred days.
    pub fn prefers(&self, weekday: Weekday) -> bool {
        self.preferred_days.contains(&weekday)
    }

    /// Adds `minutes` to the overtime ledger under `category`.
    pub fn record_overtime(&mut self, category: impl Into<String>, minutes: i64) {
        *self.overtime_minutes.entry(category.into()).or_insert(0) += minutes;
    }

    /// Sum of all recorded overtime.
    pub fn total_overtime_minutes(&self) -> i64 {
        self.overtime_minutes.values().sum()
    }

    /// Assigned blocks falling inside `week`.
    pub fn blocks_in_week(&self, week: &WeekRange) -> impl Iterator<Item = &DatedBlock> {
        self.assigned_blocks
            .iter()
            .filter(move |dated| week.contains(dated.date))
    }
}

/// Employees keyed by id.
#[derive(Debug, Clone, Default)]
pub struct EmployeeArena {
    employees: HashMap<EmployeeId, Employee>,
}

impl EmployeeArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee.
    pub fn insert(&mut self, employee: Employee) {
        self.employees.insert(employee.id, employee);
    }

    /// Looks up an employee by id.
    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }

    /// Number of employees held.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the arena holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl FromIterator<Employee> for EmployeeArena {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut arena = Self::new();
        for employee in iter {
            arena.insert(employee);
        }
        arena
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn test_deserialize_employee_defaults() {
        let json = r#"{
            "id": 11,
            "name": "Ana",
            "category": "part_time"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.category, EmployeeCategory::PartTime);
        assert!(employee.continuous_schedule);
        assert!(employee.assigned_blocks.is_empty());
        assert!(employee.vacation_dates.is_empty());
    }

    #[test]
    fn test_record_overtime_accumulates_per_category() {
        let mut employee = Employee::new(EmployeeId(1), "Luis", EmployeeCategory::FullTime);
        employee.record_overtime("holiday", 60);
        employee.record_overtime("holiday", 30);
        employee.record_overtime("inventory", 45);

        assert_eq!(employee.overtime_minutes["holiday"], 90);
        assert_eq!(employee.total_overtime_minutes(), 135);
    }

    #[test]
    fn test_vacation_and_preferences() {
        let mut employee = Employee::new(EmployeeId(1), "Luis", EmployeeCategory::FullTime);
        employee.add_vacation(date(20));
        employee.preferred_days = vec![Weekday::Mon, Weekday::Sat];

        assert!(employee.is_on_vacation(date(20)));
        assert!(!employee.is_on_vacation(date(21)));
        assert!(employee.prefers(Weekday::Sat));
        assert!(!employee.prefers(Weekday::Sun));
    }

    #[test]
    fn test_blocks_in_week_filters_other_weeks() {
        let mut employee = Employee::new(EmployeeId(1), "Luis", EmployeeCategory::FullTime);
        let block = TimeBlock::from_hm(9, 0, 16, 0).unwrap();
        employee.assign_block(date(12), block);
        employee.assign_block(date(13), block);
        employee.assign_block(date(13), TimeBlock::from_hm(17, 0, 18, 0).unwrap());
        employee.assign_block(date(19), block);

        let week = WeekRange::containing(date(14));
        assert_eq!(employee.blocks_in_week(&week).count(), 3);
    }

    #[test]
    fn test_arena_lookup() {
        let arena: EmployeeArena = vec![
            Employee::new(EmployeeId(1), "Luis", EmployeeCategory::FullTime),
            Employee::new(EmployeeId(2), "Ana", EmployeeCategory::PartTime),
        ]
        .into_iter()
        .collect();

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(EmployeeId(2)).unwrap().name, "Ana");
        assert!(arena.get(EmployeeId(3)).is_none());
    }
}
