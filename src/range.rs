use std::{collections::VecDeque, iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Date, ParseError, RANGE_SEPARATOR, prelude::*};

/// Every date from the earlier of `start` and `end` to the later one, inclusive and
/// ascending. Argument order does not matter.
pub fn range(start: Date, end: Date) -> Vec<Date> {
    let (low, high) = if start.is_greater(end) { (end, start) } else { (start, end) };

    // Walk back from the upper bound, prepending as we go
    let mut days = VecDeque::from([high]);
    let mut current = high;
    while current != low {
        current = current.prev_day();
        days.push_front(current);
    }
    days.into()
}

/// An inclusive span of days. The start is never after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: Date,
    end:   Date,
}

/// Error type for date range parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Error parsing one of the bounds.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a range covering both dates, swapping them if given in reverse.
    pub fn new(a: Date, b: Date) -> Self {
        if a.is_greater(b) {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the range
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &Date) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Lazily walks the days of the range. Calling this again starts over.
    pub const fn iter(&self) -> Days {
        Days {
            front:    self.start,
            back:     self.end,
            finished: false,
        }
    }

    /// Materializes every day of the range
    pub fn to_vec(&self) -> Vec<Date> {
        range(self.start, self.end)
    }
}

/// Iterator over the days of a [`DateRange`], in ascending order.
#[derive(Debug, Clone)]
pub struct Days {
    front:    Date,
    back:     Date,
    finished: bool,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = self.front;
        if current == self.back {
            self.finished = true;
        } else {
            self.front = current.next_day();
        }
        Some(current)
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = self.back;
        if current == self.front {
            self.finished = true;
        } else {
            self.back = current.prev_day();
        }
        Some(current)
    }
}

impl FusedIterator for Days {}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator_count = s.matches(RANGE_SEPARATOR).count();

        match s.split_once(RANGE_SEPARATOR) {
            Some((start, end)) if separator_count == 1 => Ok(Self::new(start.parse()?, end.parse()?)),
            None => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            Some(_) => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
