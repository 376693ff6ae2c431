//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating or propagating
//! a roster.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::{BranchId, EmployeeCategory, PositionId};
use crate::validation::Violation;

/// The main error type for the roster engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/profiles.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/profiles.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A time block whose end does not come after its start.
    #[error("Invalid time block {start}-{end}: end must be after start")]
    InvalidBlock {
        /// The requested start time.
        start: NaiveTime,
        /// The requested end time.
        end: NaiveTime,
    },

    /// No hour profile is configured for an employee category.
    #[error("No employee type profile configured for category '{category}'")]
    ProfileNotFound {
        /// The category without a profile.
        category: EmployeeCategory,
    },

    /// A week boundary pair that cannot be used for propagation.
    #[error("Invalid week {start}..{end}: {reason}")]
    InvalidWeek {
        /// First day of the week.
        start: NaiveDate,
        /// Last day of the week.
        end: NaiveDate,
        /// Why the week was rejected.
        reason: String,
    },

    /// A position belongs to a different branch than the request.
    #[error("Position {position} belongs to branch {actual}, expected branch {expected}")]
    BranchMismatch {
        /// The offending position.
        position: PositionId,
        /// The branch named by the request.
        expected: BranchId,
        /// The branch recorded on the position.
        actual: BranchId,
    },

    /// A submitted batch broke one or more schedule rules.
    #[error("{} schedule rule violation(s)", violations.len())]
    RuleViolations {
        /// Every violation found in the batch.
        violations: Vec<Violation>,
    },

    /// The persistence collaborator failed.
    #[error("Persistence failure: {message}")]
    Persistence {
        /// A description of the underlying failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
