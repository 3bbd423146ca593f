//! Recurring-order value types.
//!
//! Recurring products are billed and shipped on a repeating schedule
//! described by a cycle length, a cycle period and a total cycle count.
//! [`RecurringCycleInfo`] is the reconciled schedule for a whole cart.

use serde::{Deserialize, Serialize};

/// Unit of a recurring product's billing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecurringCyclePeriod {
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl std::fmt::Display for RecurringCyclePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Days => write!(f, "days"),
            Self::Weeks => write!(f, "weeks"),
            Self::Months => write!(f, "months"),
            Self::Years => write!(f, "years"),
        }
    }
}

/// The reconciled recurring schedule of a shopping cart.
///
/// Produced by scanning the cart's line items in order: the first recurring
/// item populates the cycle fields, and later recurring items either agree
/// with them or set [`error_message`](Self::error_message). A cart with no
/// recurring items yields the default (all fields `None`).
///
/// The struct has no persisted identity; it is built fresh per computation
/// and handed back to the caller as a plain value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RecurringCycleInfo {
    /// Cycle length of the first recurring item, e.g. 30.
    pub cycle_length: Option<i32>,
    /// Cycle period of the first recurring item, e.g. days.
    pub cycle_period: Option<RecurringCyclePeriod>,
    /// Total number of cycles of the first recurring item.
    pub total_cycles: Option<i32>,
    /// Localized conflict message, set when two recurring items disagree.
    ///
    /// Conflicts are reported as data, not as errors: callers decide what
    /// to do with a conflicting cart (typically block order placement).
    pub error_message: Option<String>,
}

impl RecurringCycleInfo {
    /// Whether a recurring item has populated the cycle fields yet.
    #[must_use]
    pub const fn has_values(&self) -> bool {
        self.cycle_length.is_some() && self.cycle_period.is_some() && self.total_cycles.is_some()
    }

    /// Whether a schedule conflict was detected.
    #[must_use]
    pub const fn has_conflict(&self) -> bool {
        self.error_message.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_values() {
        let info = RecurringCycleInfo::default();
        assert!(!info.has_values());
        assert!(!info.has_conflict());
    }

    #[test]
    fn test_has_values_requires_all_fields() {
        let info = RecurringCycleInfo {
            cycle_length: Some(30),
            cycle_period: Some(RecurringCyclePeriod::Days),
            total_cycles: None,
            error_message: None,
        };
        assert!(!info.has_values());

        let info = RecurringCycleInfo {
            total_cycles: Some(12),
            ..info
        };
        assert!(info.has_values());
    }

    #[test]
    fn test_period_serde_format() {
        let json = serde_json::to_string(&RecurringCyclePeriod::Weeks).unwrap();
        assert_eq!(json, "\"WEEKS\"");

        let parsed: RecurringCyclePeriod = serde_json::from_str("\"MONTHS\"").unwrap();
        assert_eq!(parsed, RecurringCyclePeriod::Months);
    }

    #[test]
    fn test_period_display() {
        assert_eq!(RecurringCyclePeriod::Years.to_string(), "years");
    }
}
