//! Core types for Cartwright.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod recurrence;

pub use id::*;
pub use recurrence::{RecurringCycleInfo, RecurringCyclePeriod};
