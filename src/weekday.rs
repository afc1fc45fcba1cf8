use serde::{Deserialize, Serialize};

use crate::{
    Date,
    consts::{DAYS_PER_WEEK, MARCH, WEEKDAY_OFFSETS},
    prelude::*,
};

/// The day of week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// The next day in the week.
    #[inline]
    pub const fn succ(self) -> Self {
        match self {
            Self::Mon => Self::Tue,
            Self::Tue => Self::Wed,
            Self::Wed => Self::Thu,
            Self::Thu => Self::Fri,
            Self::Fri => Self::Sat,
            Self::Sat => Self::Sun,
            Self::Sun => Self::Mon,
        }
    }

    /// The previous day in the week.
    #[inline]
    pub const fn pred(self) -> Self {
        match self {
            Self::Mon => Self::Sun,
            Self::Tue => Self::Mon,
            Self::Wed => Self::Tue,
            Self::Thu => Self::Wed,
            Self::Fri => Self::Thu,
            Self::Sat => Self::Fri,
            Self::Sun => Self::Sat,
        }
    }

    /// Returns a day number starting from Monday = 1. (ISO 8601 weekday number)
    #[inline]
    pub const fn number_from_monday(self) -> u8 {
        match self {
            Self::Mon => 1,
            Self::Tue => 2,
            Self::Wed => 3,
            Self::Thu => 4,
            Self::Fri => 5,
            Self::Sat => 6,
            Self::Sun => 7,
        }
    }

    /// Returns a day number starting from Sunday = 1.
    #[inline]
    pub const fn number_from_sunday(self) -> u8 {
        match self {
            Self::Sun => 1,
            Self::Mon => 2,
            Self::Tue => 3,
            Self::Wed => 4,
            Self::Thu => 5,
            Self::Fri => 6,
            Self::Sat => 7,
        }
    }

    const fn from_sunday_offset(offset: i64) -> Self {
        match offset {
            0 => Self::Sun,
            1 => Self::Mon,
            2 => Self::Tue,
            3 => Self::Wed,
            4 => Self::Thu,
            5 => Self::Fri,
            // rem_euclid(7) leaves only 6
            _ => Self::Sat,
        }
    }
}

/// Day of week of `date` in the proleptic Gregorian calendar.
pub(crate) fn weekday_of(date: Date) -> Weekday {
    let month = date.month_number();
    // January and February count as the tail of the previous year
    let year = i64::from(date.year());
    let year = if month < MARCH { year - 1 } else { year };
    let offset = i64::from(WEEKDAY_OFFSETS[usize::from(month - 1)]);

    let raw = year + year.div_euclid(4) - year.div_euclid(100) + year.div_euclid(400) + offset
        + i64::from(date.day_number());
    Weekday::from_sunday_offset(raw.rem_euclid(i64::from(DAYS_PER_WEEK)))
}
