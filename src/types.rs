use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DECEMBER, FALLBACK_MONTH_LENGTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE,
};
use crate::prelude::*;
use crate::{Date, ParseError};
use std::num::NonZeroU8;
use std::str::FromStr;

/// A calendar month of a given year.
///
/// The month number is guaranteed to be in `1..=12`. The year spans all of
/// `MIN_YEAR..=MAX_YEAR`, so zero and negative years extend the calendar backwards
/// proleptically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}", year, "number.get()")]
pub struct Month {
    year:   i32,
    number: NonZeroU8,
}

impl Month {
    /// Creates a new Month, validating that the month number is in `1..=12`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > 12.
    pub fn new(year: i32, month: u8) -> Result<Self, ParseError> {
        match NonZeroU8::new(month) {
            Some(number) if month <= DECEMBER => Ok(Self { year, number }),
            _ => Err(ParseError::InvalidMonth {
                year,
                month: i32::from(month),
            }),
        }
    }

    /// Caller guarantees `number <= 12`.
    pub(crate) const fn from_parts(year: i32, number: NonZeroU8) -> Self {
        Self { year, number }
    }

    /// Returns the year this month belongs to
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1 = January)
    #[inline]
    pub const fn number(self) -> u8 {
        self.number.get()
    }

    /// Number of days in this month
    pub fn days(self) -> u8 {
        days_in_month(self)
    }

    /// The month after this one, rolling December over into January of the next year.
    /// December of `MAX_YEAR` has no successor and is returned unchanged.
    pub const fn next(self) -> Self {
        if self.number.get() == DECEMBER {
            match self.year.checked_add(1) {
                Some(year) => Self::from_parts(year, NonZeroU8::MIN),
                None => self,
            }
        } else {
            Self::from_parts(self.year, self.number.saturating_add(1))
        }
    }

    /// The month before this one, rolling January back into December of the previous year.
    /// January of `MIN_YEAR` has no predecessor and is returned unchanged.
    pub const fn prev(self) -> Self {
        match (NonZeroU8::new(self.number.get() - 1), self.year.checked_sub(1)) {
            (Some(number), _) => Self::from_parts(self.year, number),
            (None, Some(year)) => Self::from_parts(year, non_zero(DECEMBER)),
            (None, None) => self,
        }
    }

    /// The first day of this month
    pub const fn first_day(self) -> Date {
        Date::from_parts(self, NonZeroU8::MIN)
    }

    /// The last day of this month
    pub fn last_day(self) -> Date {
        NonZeroU8::new(self.days()).map_or_else(|| self.first_day(), |day| Date::from_parts(self, day))
    }
}

/// Const-friendly `NonZeroU8` for calendar constants, all of which are positive.
pub(crate) const fn non_zero(value: u8) -> NonZeroU8 {
    match NonZeroU8::new(value) {
        Some(value) => value,
        None => NonZeroU8::MIN,
    }
}

impl FromStr for Month {
    type Err = ParseError;

    /// Parses `YYYY-MM`. Like dates, negative years do not survive the split on `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat {
                input:    s.to_owned(),
                expected: 2,
                found:    parts.len(),
            });
        };
        let year = crate::parse_component(year)?;
        let month = crate::parse_component(month)?;
        if month_length(year, month).is_none() {
            return Err(ParseError::InvalidMonth { year, month });
        }
        let number = u8::try_from(month).ok().and_then(NonZeroU8::new);
        number
            .map(|number| Self::from_parts(year, number))
            .ok_or(ParseError::InvalidMonth { year, month })
    }
}

impl serde::Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

/// Gregorian leap year rule, extended to zero and negative years.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or `None` if `month` is outside `1..=12`.
pub fn month_length(year: i32, month: i32) -> Option<u8> {
    let index = usize::try_from(month).ok()?;
    let length = *DAYS_IN_MONTH.get(index).filter(|_| index >= usize::from(JANUARY))?;
    if index == usize::from(FEBRUARY) && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(length)
    }
}

/// Number of days in a month known to be valid.
pub fn days_in_month(month: Month) -> u8 {
    month_length(month.year, i32::from(month.number.get())).unwrap_or(FALLBACK_MONTH_LENGTH)
}

/// True iff `month` exists and `day` falls within it.
pub fn validate_date_components(year: i32, month: i32, day: i32) -> bool {
    month_length(year, month).is_some_and(|length| (1..=i32::from(length)).contains(&day))
}
