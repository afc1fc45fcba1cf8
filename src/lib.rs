mod consts;
pub mod json;
mod prelude;
mod range;
mod types;
mod weekday;

pub use consts::*;
pub use range::{DateRange, Days, RangeError, range};
pub use types::{Month, days_in_month, is_leap_year, month_length, validate_date_components};
pub use weekday::Weekday;

use crate::prelude::*;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A calendar day in the proleptic Gregorian calendar.
///
/// A `Date` always names a real day: the only ways to build one are the clamping
/// [`Date::from_ymd`] and the strict [`Date::from_iso8601`] / [`FromStr`] parsers.
/// Ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", "month.year()", "month.number()", "day.get()")]
pub struct Date {
    month: Month,
    day:   NonZeroU8,
}

/// Why a strict parse rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// The input string was empty.
    #[display(fmt = "Empty date string")]
    EmptyInput,
    /// Wrong number of `-` separated segments.
    #[display(fmt = "Invalid date format: {input:?} (expected {expected} '-' separated segments, found {found})")]
    InvalidFormat {
        input:    String,
        expected: usize,
        found:    usize,
    },
    /// A segment is not an integer.
    #[display(fmt = "Invalid number: {_0:?}")]
    InvalidNumber(String),
    /// The month is outside `1..=12`.
    #[display(fmt = "Invalid month: {month} (must be 1-12)")]
    InvalidMonth { year: i32, month: i32 },
    /// The day does not exist in that month.
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: i32 },
}

impl std::error::Error for ParseError {}

/// Parses one numeric segment of an ISO 8601 string
pub(crate) fn parse_component(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidNumber(s.to_owned()))
}

/// Pulls `value` into `1..=max`
fn clamp_component(value: i32, max: u8) -> NonZeroU8 {
    let clamped = value.clamp(i32::from(MIN_DAY), i32::from(max));
    u8::try_from(clamped)
        .ok()
        .and_then(NonZeroU8::new)
        .unwrap_or(NonZeroU8::MIN)
}

impl Date {
    /// The first day of `MIN_YEAR`
    pub const MIN: Self = Month::from_parts(MIN_YEAR, NonZeroU8::MIN).first_day();

    /// The last day of `MAX_YEAR`
    pub const MAX: Self = Self::from_parts(
        Month::from_parts(MAX_YEAR, types::non_zero(DECEMBER)),
        types::non_zero(DAYS_IN_MONTH[DAYS_IN_MONTH.len() - 1]),
    );

    /// Builds a date, clamping the month into `1..=12` and then the day into the
    /// length of that month. Never fails: `from_ymd(2019, 6, 31)` is June 30th.
    ///
    /// Use [`Date::from_iso8601`] when out-of-range components must be rejected.
    pub fn from_ymd(year: i32, month: i32, day: i32) -> Self {
        let clamped_month = Month::from_parts(year, clamp_component(month, DECEMBER));
        let clamped_day = clamp_component(day, days_in_month(clamped_month));

        #[cfg(feature = "log")]
        if i32::from(clamped_month.number()) != month || i32::from(clamped_day.get()) != day {
            log::debug!(
                "Clamped date {year}-{month}-{day} to {year}-{:02}-{:02}",
                clamped_month.number(),
                clamped_day.get()
            );
        }

        Self::from_parts(clamped_month, clamped_day)
    }

    /// Parses a strict `YYYY-MM-DD` string, returning `None` for anything that is
    /// not exactly three integers naming a real day.
    ///
    /// Splitting happens on every `-`, so negative years (`-5-01-01`) are rejected.
    pub fn from_iso8601(s: &str) -> Option<Self> {
        let parsed = s.parse::<Self>();
        #[cfg(feature = "log")]
        if let Err(err) = &parsed {
            log::trace!("Rejected date string {s:?}: {err}");
        }
        parsed.ok()
    }

    /// Formats as `{year}-{month:02}-{day:02}` with the year unpadded.
    pub fn to_iso8601(self) -> String {
        self.to_string()
    }

    /// Caller guarantees `day` fits in `month`.
    pub(crate) const fn from_parts(month: Month, day: NonZeroU8) -> Self {
        Self { month, day }
    }

    /// Validates components without clamping
    fn from_components(year: i32, month: i32, day: i32) -> Result<Self, ParseError> {
        let length = month_length(year, month).ok_or(ParseError::InvalidMonth { year, month })?;
        let number = u8::try_from(month)
            .ok()
            .and_then(NonZeroU8::new)
            .ok_or(ParseError::InvalidMonth { year, month })?;
        if !validate_date_components(year, month, day) {
            return Err(ParseError::InvalidDay {
                year,
                month: number.get(),
                day,
            });
        }
        // Already in range, so clamping only converts
        Ok(Self::from_parts(Month::from_parts(year, number), clamp_component(day, length)))
    }

    /// Returns the day of the month (1-based)
    #[inline]
    pub const fn day_number(self) -> u8 {
        self.day.get()
    }

    /// Returns the month this day belongs to
    #[inline]
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the month number (1 = January)
    #[inline]
    pub const fn month_number(self) -> u8 {
        self.month.number()
    }

    /// Returns the year
    #[inline]
    pub const fn year(self) -> i32 {
        self.month.year()
    }

    /// The following day, rolling over month and year ends.
    /// [`Date::MAX`] is its own successor.
    pub fn next_day(self) -> Self {
        if self == Self::MAX {
            self
        } else if self.day.get() >= days_in_month(self.month) {
            self.month.next().first_day()
        } else {
            Self::from_parts(self.month, self.day.saturating_add(1))
        }
    }

    /// The preceding day, rolling back over month and year starts.
    /// [`Date::MIN`] is its own predecessor.
    pub fn prev_day(self) -> Self {
        if self == Self::MIN {
            return self;
        }
        NonZeroU8::new(self.day.get() - 1).map_or_else(
            || self.month.prev().last_day(),
            |day| Self::from_parts(self.month, day),
        )
    }

    /// Day of week, computed with a closed-form congruence.
    pub fn weekday(self) -> Weekday {
        weekday::weekday_of(self)
    }

    /// True if `self` falls strictly after `other`.
    pub fn is_greater(self, other: Self) -> bool {
        self > other
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat {
                input:    s.to_owned(),
                expected: 3,
                found:    parts.len(),
            });
        };

        // Parse components - InvalidNumber if not numeric
        let year = parse_component(year)?;
        let month = parse_component(month)?;
        let day = parse_component(day)?;

        Self::from_components(year, month, day)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_iso8601(&s).ok_or_else(|| serde::de::Error::custom(INVALID_DATE_STRING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: i32, day: i32) -> Date {
        Date::from_ymd(year, month, day)
    }

    #[test]
    fn test_from_ymd_round_trips_valid_components() {
        for year in [-400, -1, 0, 1, 1900, 2000, 2019, 2020, 9999, 12345] {
            for month in 1..=12 {
                let length = i32::from(month_length(year, month).unwrap());
                for day in 1..=length {
                    let date = ymd(year, month, day);
                    assert_eq!(date.year(), year);
                    assert_eq!(date.month().year(), year);
                    assert_eq!(i32::from(date.month_number()), month);
                    assert_eq!(i32::from(date.month().number()), month);
                    assert_eq!(i32::from(date.day_number()), day);
                }
            }
        }
    }

    #[test]
    fn test_from_ymd_clamps() {
        struct TestCase {
            input:       (i32, i32, i32),
            expected:    (i32, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       (2019, 0, 10),
                expected:    (2019, 1, 10),
                description: "month 0 clamps to January",
            },
            TestCase {
                input:       (2019, 13, 10),
                expected:    (2019, 12, 10),
                description: "month 13 clamps to December",
            },
            TestCase {
                input:       (2019, 6, 31),
                expected:    (2019, 6, 30),
                description: "June has 30 days",
            },
            TestCase {
                input:       (2019, 2, 29),
                expected:    (2019, 2, 28),
                description: "February in a common year",
            },
            TestCase {
                input:       (2020, 2, 30),
                expected:    (2020, 2, 29),
                description: "February in a leap year",
            },
            TestCase {
                input:       (2019, 5, 0),
                expected:    (2019, 5, 1),
                description: "day 0 clamps to the first",
            },
            TestCase {
                input:       (2019, -7, -7),
                expected:    (2019, 1, 1),
                description: "negative month and day",
            },
            TestCase {
                input:       (2019, i32::MAX, i32::MAX),
                expected:    (2019, 12, 31),
                description: "huge month and day",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.input;
            let date = ymd(y, m, d);
            assert_eq!(
                (date.year(), date.month_number(), date.day_number()),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_from_iso8601_valid() {
        for year in [1, 99, 1991, 2019, 2020, 9999, 10000] {
            for month in 1..=12 {
                for day in 1..=28 {
                    let s = format!("{year}-{month}-{day}");
                    let date = Date::from_iso8601(&s);
                    assert_eq!(date, Some(ymd(year, month, day)), "{s} should parse");
                }
            }
        }
    }

    #[test]
    fn test_from_iso8601_padded_and_leap() {
        assert_eq!(Date::from_iso8601("2019-01-31"), Some(ymd(2019, 1, 31)));
        assert_eq!(Date::from_iso8601("2020-02-29"), Some(ymd(2020, 2, 29)));
        assert_eq!(Date::from_iso8601("2000-02-29"), Some(ymd(2000, 2, 29)));
        assert_eq!(Date::from_iso8601("0000-01-01"), Some(ymd(0, 1, 1)));
    }

    #[test]
    fn test_from_iso8601_rejects() {
        for input in [
            "foo",
            "",
            "2019-02-31",
            "2019-02-29",
            "1900-02-29",
            "2019-00-10",
            "2019-13-10",
            "2019-01-00",
            "2019-01-32",
            "2019-01",
            "2019-01-01-01",
            "2019/01/01",
            "2019-01-XX",
            " 2019-01-01",
            "2019-01-01T00:00",
        ] {
            assert_eq!(Date::from_iso8601(input), None, "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Date>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "2019-01".parse::<Date>(),
            Err(ParseError::InvalidFormat {
                expected: 3,
                found: 2,
                ..
            })
        ));
        assert!(matches!("2019-AB-01".parse::<Date>(), Err(ParseError::InvalidNumber(_))));
        assert!(matches!(
            "2019-13-01".parse::<Date>(),
            Err(ParseError::InvalidMonth { year: 2019, month: 13 })
        ));
        assert!(matches!(
            "2019-02-31".parse::<Date>(),
            Err(ParseError::InvalidDay {
                year: 2019,
                month: 2,
                day: 31
            })
        ));
    }

    #[test]
    fn test_negative_year_does_not_parse_back() {
        let date = ymd(-5, 3, 7);
        assert_eq!(date.to_iso8601(), "-5-03-07");
        // The leading sign becomes an extra empty segment
        assert!(matches!(
            date.to_iso8601().parse::<Date>(),
            Err(ParseError::InvalidFormat { found: 4, .. })
        ));
    }

    #[test]
    fn test_to_iso8601() {
        assert_eq!(ymd(2019, 1, 31).to_iso8601(), "2019-01-31");
        assert_eq!(ymd(5, 1, 1).to_iso8601(), "5-01-01");
        assert_eq!(ymd(12345, 11, 9).to_iso8601(), "12345-11-09");
        assert_eq!(ymd(2019, 1, 31).to_string(), "2019-01-31");
    }

    #[test]
    fn test_next_day() {
        assert_eq!(ymd(2019, 1, 30).next_day(), ymd(2019, 1, 31));
        assert_eq!(ymd(2019, 1, 31).next_day(), ymd(2019, 2, 1));
        assert_eq!(ymd(2019, 2, 28).next_day(), ymd(2019, 3, 1));
        assert_eq!(ymd(2020, 2, 28).next_day(), ymd(2020, 2, 29));
        assert_eq!(ymd(2020, 2, 29).next_day(), ymd(2020, 3, 1));
        assert_eq!(ymd(2019, 12, 31).next_day(), ymd(2020, 1, 1));
        assert_eq!(ymd(-1, 12, 31).next_day(), ymd(0, 1, 1));
    }

    #[test]
    fn test_prev_day() {
        assert_eq!(ymd(2019, 1, 31).prev_day(), ymd(2019, 1, 30));
        assert_eq!(ymd(2019, 3, 1).prev_day(), ymd(2019, 2, 28));
        assert_eq!(ymd(2020, 3, 1).prev_day(), ymd(2020, 2, 29));
        assert_eq!(ymd(2020, 1, 1).prev_day(), ymd(2019, 12, 31));
        assert_eq!(ymd(2019, 5, 1).prev_day(), ymd(2019, 4, 30));
        assert_eq!(ymd(0, 1, 1).prev_day(), ymd(-1, 12, 31));
    }

    #[test]
    fn test_next_prev_day_at_calendar_limits() {
        let last = ymd(i32::MAX, 12, 31);
        assert_eq!(last, Date::MAX);
        assert_eq!(last.next_day(), Date::MAX);
        assert_eq!(last.prev_day(), ymd(i32::MAX, 12, 30));
        assert_eq!(ymd(i32::MAX - 1, 12, 31).next_day(), ymd(i32::MAX, 1, 1));

        let first = ymd(i32::MIN, 1, 1);
        assert_eq!(first, Date::MIN);
        assert_eq!(first.prev_day(), Date::MIN);
        assert_eq!(first.next_day(), ymd(i32::MIN, 1, 2));
        assert_eq!(ymd(i32::MIN + 1, 1, 1).prev_day(), ymd(i32::MIN, 12, 31));
    }

    #[test]
    fn test_next_prev_inverse() {
        let mut date = ymd(1999, 1, 1);
        let end = ymd(2001, 12, 31);
        while date != end {
            assert_eq!(date.next_day().prev_day(), date, "{date}");
            assert_eq!(date.prev_day().next_day(), date, "{date}");
            date = date.next_day();
        }
    }

    #[test]
    fn test_ordering() {
        struct TestCase {
            a:       (i32, i32, i32),
            b:       (i32, i32, i32),
            greater: bool,
        }

        let cases = [
            TestCase {
                a:       (2020, 1, 1),
                b:       (2019, 12, 31),
                greater: true,
            },
            TestCase {
                a:       (2019, 2, 1),
                b:       (2019, 1, 31),
                greater: true,
            },
            TestCase {
                a:       (2019, 1, 2),
                b:       (2019, 1, 1),
                greater: true,
            },
            TestCase {
                a:       (2019, 1, 1),
                b:       (2019, 1, 1),
                greater: false,
            },
            TestCase {
                a:       (2018, 12, 31),
                b:       (2019, 1, 1),
                greater: false,
            },
            TestCase {
                a:       (-1, 12, 31),
                b:       (0, 1, 1),
                greater: false,
            },
        ];

        for case in &cases {
            let a = ymd(case.a.0, case.a.1, case.a.2);
            let b = ymd(case.b.0, case.b.1, case.b.2);
            assert_eq!(a.is_greater(b), case.greater, "{a} > {b}");
            assert_eq!(a > b, case.greater, "{a} > {b}");
        }
    }

    #[test]
    fn test_serde() {
        let date = ymd(1991, 8, 15);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid_date_string() {
        let err = serde_json::from_str::<Date>(r#""2019-02-31""#).unwrap_err();
        assert!(err.to_string().starts_with(INVALID_DATE_STRING), "{err}");

        let err = serde_json::from_str::<Date>("20190101").unwrap_err();
        assert!(!err.to_string().contains(INVALID_DATE_STRING), "{err}");
    }
}
