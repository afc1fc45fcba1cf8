/// Earliest representable year. The calendar stops at its first day.
pub const MIN_YEAR: i32 = i32::MIN;
/// Latest representable year. The calendar stops at its last day.
pub const MAX_YEAR: i32 = i32::MAX;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March, the first month not shifted by the weekday algorithm
pub const MARCH: u8 = 3;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Used by `days_in_month` if a `Month` ever holds a number outside 1..=12
pub(crate) const FALLBACK_MONTH_LENGTH: u8 = 30;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Per-month offsets for the day-of-week congruence, January first.
/// January and February are taken relative to the previous year.
pub(crate) const WEEKDAY_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
/// Days in a week
pub(crate) const DAYS_PER_WEEK: i32 = 7;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';

/// Message surfaced when a serialized date cannot be decoded
pub const INVALID_DATE_STRING: &str = "Invalid date string";
