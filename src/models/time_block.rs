//! Time block model and related types.
//!
//! A [`TimeBlock`] is a same-day interval of worked time. It never wraps past
//! midnight: a block whose end is not after its start is rejected at
//! construction rather than interpreted as an overnight shift.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{PositionId, TimeBlockId};

/// A start/end interval of worked time within a single day.
///
/// # Examples
///
/// ```
/// use roster_engine::models::TimeBlock;
/// use chrono::NaiveTime;
///
/// let block = TimeBlock::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(block.duration_minutes(), 480);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeBlock")]
pub struct TimeBlock {
    start: NaiveTime,
    end: NaiveTime,
}

#[derive(Deserialize)]
struct RawTimeBlock {
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<RawTimeBlock> for TimeBlock {
    type Error = EngineError;

    fn try_from(raw: RawTimeBlock) -> EngineResult<Self> {
        TimeBlock::new(raw.start, raw.end)
    }
}

impl TimeBlock {
    /// Creates a block, failing with [`EngineError::InvalidBlock`] when
    /// `end <= start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        if end <= start {
            return Err(EngineError::InvalidBlock { start, end });
        }
        Ok(Self { start, end })
    }

    /// Convenience constructor from whole hours and minutes.
    ///
    /// Out-of-range components are reported as an invalid block at midnight.
    pub fn from_hm(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> EngineResult<Self> {
        let midnight = NaiveTime::MIN;
        let start = NaiveTime::from_hms_opt(start_h, start_m, 0);
        let end = NaiveTime::from_hms_opt(end_h, end_m, 0);
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(EngineError::InvalidBlock {
                start: start.unwrap_or(midnight),
                end: end.unwrap_or(midnight),
            }),
        }
    }

    /// The start of the block.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// The end of the block.
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Wall-clock length of the block in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Returns true when the two blocks share any instant.
    ///
    /// Intervals are closed, so a block ending at 12:00 overlaps a block
    /// starting at 12:00.
    ///
    /// ```
    /// use roster_engine::models::TimeBlock;
    ///
    /// let morning = TimeBlock::from_hm(8, 0, 12, 0).unwrap();
    /// let afternoon = TimeBlock::from_hm(12, 0, 16, 0).unwrap();
    /// assert!(morning.overlaps(&afternoon));
    /// ```
    pub fn overlaps(&self, other: &TimeBlock) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Returns true when this block lies entirely within `[open, close]`.
    pub fn within(&self, open: NaiveTime, close: NaiveTime) -> bool {
        self.start >= open && self.end <= close
    }
}

/// A time block pinned to a calendar date, as recorded on an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedBlock {
    /// The calendar date the block is worked on.
    pub date: NaiveDate,
    /// The worked interval.
    pub block: TimeBlock,
}

impl DatedBlock {
    /// Pairs a block with its date.
    pub fn new(date: NaiveDate, block: TimeBlock) -> Self {
        Self { date, block }
    }
}

/// A time block bound to a position, as stored by the persistence collaborator.
///
/// The block carries no date of its own; its day is the owning position's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledBlock {
    /// Stored identity.
    pub id: TimeBlockId,
    /// The position this block staffs.
    pub position_id: PositionId,
    /// The worked interval.
    pub block: TimeBlock,
    /// Whether this block is one half of a split shift.
    #[serde(default)]
    pub split_shift: bool,
}

/// A time block that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScheduledBlock {
    /// The position this block staffs.
    pub position_id: PositionId,
    /// The worked interval.
    pub block: TimeBlock,
    /// Whether this block is one half of a split shift.
    #[serde(default)]
    pub split_shift: bool,
}

impl NewScheduledBlock {
    /// Attaches a stored identity.
    pub fn with_id(self, id: TimeBlockId) -> ScheduledBlock {
        ScheduledBlock {
            id,
            position_id: self.position_id,
            block: self.block,
            split_shift: self.split_shift,
        }
    }
}
