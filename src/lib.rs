//! Roster Engine for retail workforce scheduling
//!
//! This crate validates proposed shift time blocks against labor rules
//! (daily caps, weekly totals, rest days, split shifts, branch opening hours,
//! branch roles and vacations) and propagates an approved week's roster onto
//! later weeks.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod propagation;
pub mod rules;
pub mod specification;
pub mod store;
pub mod validation;
