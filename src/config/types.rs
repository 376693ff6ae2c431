//! Policy configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files.

use std::collections::{BTreeSet, HashMap};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{BranchId, EmployeeCategory, EmployeeTypeProfile};

/// Profiles file structure (`profiles.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ProfilesConfig {
    /// One profile per employee category.
    pub profiles: Vec<EmployeeTypeProfile>,
}

/// Parameters of the split-shift structure rule (`split_shift.yaml`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SplitShiftPolicy {
    /// Number of blocks a split day must contain.
    pub blocks_per_day: usize,
    /// Shortest allowed block, in hours.
    pub min_block_hours: Decimal,
    /// Shortest allowed unpaid gap between the blocks, in hours.
    pub min_gap_hours: Decimal,
    /// Allowed combined lengths of the day, in hours.
    pub allowed_total_hours: Vec<Decimal>,
}

impl Default for SplitShiftPolicy {
    fn default() -> Self {
        Self {
            blocks_per_day: 2,
            min_block_hours: Decimal::from(3),
            min_gap_hours: Decimal::from(4),
            allowed_total_hours: vec![Decimal::from(7), Decimal::from(8)],
        }
    }
}

/// A branch format: a named role list, optionally built on another format.
///
/// Formats are flat records. A format's roles are its own `extra_roles`
/// plus every role of the format it `extends`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BranchFormat {
    /// Format name (e.g. "express", "supermarket").
    pub name: String,
    /// The format whose roles are inherited.
    #[serde(default)]
    pub extends: Option<String>,
    /// Roles added on top of the inherited ones.
    #[serde(default)]
    pub extra_roles: Vec<String>,
}

/// Formats file structure (`formats.yaml`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatsConfig {
    /// Every known format.
    #[serde(default)]
    pub formats: Vec<BranchFormat>,
    /// Which format each branch runs, keyed by branch id.
    #[serde(default)]
    pub branches: HashMap<BranchId, String>,
}

/// The complete policy used by the rule set.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    profiles: HashMap<EmployeeCategory, EmployeeTypeProfile>,
    split_shift: SplitShiftPolicy,
    formats: HashMap<String, BranchFormat>,
    branch_formats: HashMap<BranchId, String>,
}

impl Default for PolicyConfig {
    /// The canonical Full-Time, Part-Time and Special-Schedule profiles with
    /// the default split-shift parameters and no branch formats.
    fn default() -> Self {
        let profiles = [
            EmployeeCategory::FullTime,
            EmployeeCategory::PartTime,
            EmployeeCategory::SpecialSchedule,
        ]
        .into_iter()
        .map(EmployeeTypeProfile::canonical)
        .collect::<Vec<_>>();
        Self::new(profiles, SplitShiftPolicy::default(), FormatsConfig::default())
    }
}

impl PolicyConfig {
    /// Creates a policy from its component parts.
    pub fn new(
        profiles: Vec<EmployeeTypeProfile>,
        split_shift: SplitShiftPolicy,
        formats: FormatsConfig,
    ) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.category, profile))
                .collect(),
            split_shift,
            formats: formats
                .formats
                .into_iter()
                .map(|format| (format.name.clone(), format))
                .collect(),
            branch_formats: formats.branches,
        }
    }

    /// Gets the hour profile for a category.
    pub fn profile(&self, category: EmployeeCategory) -> EngineResult<&EmployeeTypeProfile> {
        self.profiles
            .get(&category)
            .ok_or(EngineError::ProfileNotFound { category })
    }

    /// Split-shift rule parameters.
    pub fn split_shift(&self) -> &SplitShiftPolicy {
        &self.split_shift
    }

    /// The format a branch runs, if one is assigned.
    pub fn format_of(&self, branch: BranchId) -> Option<&str> {
        self.branch_formats.get(&branch).map(String::as_str)
    }

    /// All roles available under `format`, following `extends` links.
    ///
    /// Unknown formats yield no roles. Cycles in `extends` are cut at the
    /// first repeated format.
    pub fn roles_of(&self, format: &str) -> BTreeSet<String> {
        let mut roles = BTreeSet::new();
        let mut visited = BTreeSet::new();
        let mut next = Some(format);

        while let Some(name) = next {
            if !visited.insert(name) {
                break;
            }
            let Some(record) = self.formats.get(name) else {
                break;
            };
            roles.extend(record.extra_roles.iter().cloned());
            next = record.extends.as_deref();
        }

        roles
    }
}
