//! Calendar week ranges used by weekly rules and propagation.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive `[start, end]` span of dates, normally Monday to Sunday.
///
/// # Example
///
/// ```
/// use roster_engine::models::WeekRange;
/// use chrono::NaiveDate;
///
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let week = WeekRange::containing(thursday);
/// assert_eq!(week.start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
/// assert_eq!(week.end, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekRange {
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
}

impl WeekRange {
    /// Creates a range, rejecting one whose end precedes its start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidWeek {
                start,
                end,
                reason: "end precedes start".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// The Monday-to-Sunday week containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// Checks whether `date` falls inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Whole weeks between `origin.start` and `self.start`.
    ///
    /// Fails when the two starts are not a multiple of seven days apart.
    pub fn offset_weeks_from(&self, origin: &WeekRange) -> EngineResult<i64> {
        let days = (self.start - origin.start).num_days();
        if days % 7 != 0 {
            return Err(EngineError::InvalidWeek {
                start: self.start,
                end: self.end,
                reason: format!(
                    "starts {} day(s) from origin week {}, not a whole number of weeks",
                    days, origin.start
                ),
            });
        }
        Ok(days / 7)
    }
}
