mod consts;
mod driver;
mod prelude;
mod types;

pub use consts::*;
pub use driver::{DecodeError, DriverValue, Scan, ToDriverValue};
pub use types::{InfinityModifier, InvalidInfinityModifier};

use chrono::{DateTime, Datelike, LocalResult, Month, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

/// A calendar date that may also be null, positive infinity or negative infinity.
///
/// This mirrors what databases with infinite date support can store in a
/// nullable date column. The four states are disjoint, so structural equality
/// is semantic equality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Date {
    /// No value
    #[default]
    Null,
    /// Before every finite date
    NegativeInfinity,
    /// After every finite date
    PositiveInfinity,
    /// A proleptic Gregorian calendar day. Not validated on construction.
    Finite { year: i32, month: Month, day: u32 },
}

/// Error returned by [`Date::try_project`] for dates with no concrete instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("cannot project a null date")]
    Null,

    #[error("cannot project {0} date")]
    Infinite(InfinityModifier),

    #[error("date {year}-{month:?}-{day} is out of range")]
    OutOfRange { year: i32, month: Month, day: u32 },
}

impl Date {
    pub const fn null() -> Self {
        Self::Null
    }

    /// Creates a finite date. The tuple is trusted, not checked.
    pub const fn finite(year: i32, month: Month, day: u32) -> Self {
        Self::Finite { year, month, day }
    }

    pub const fn positive_infinity() -> Self {
        Self::PositiveInfinity
    }

    pub const fn negative_infinity() -> Self {
        Self::NegativeInfinity
    }

    /// Builds a date from the validity bit and infinity modifier layout.
    ///
    /// An invalid date is null whatever the other fields hold, and an infinite
    /// date ignores its calendar fields.
    pub const fn from_parts(
        valid: bool,
        infinity: InfinityModifier,
        year: i32,
        month: Month,
        day: u32,
    ) -> Self {
        match (valid, infinity) {
            (false, _) => Self::Null,
            (true, InfinityModifier::NegativeInfinity) => Self::NegativeInfinity,
            (true, InfinityModifier::Infinity) => Self::PositiveInfinity,
            (true, InfinityModifier::None) => Self::Finite { year, month, day },
        }
    }

    /// `false` if and only if the date is null
    pub const fn is_valid(&self) -> bool {
        !self.is_null()
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite { .. })
    }

    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::NegativeInfinity | Self::PositiveInfinity)
    }

    /// Returns [`InfinityModifier::None`] for null and finite dates
    pub const fn infinity_modifier(&self) -> InfinityModifier {
        match self {
            Self::NegativeInfinity => InfinityModifier::NegativeInfinity,
            Self::PositiveInfinity => InfinityModifier::Infinity,
            Self::Null | Self::Finite { .. } => InfinityModifier::None,
        }
    }

    /// Calendar fields: the date for finite values, the placeholder otherwise
    pub const fn ymd(&self) -> (i32, Month, u32) {
        match *self {
            Self::Finite { year, month, day } => (year, month, day),
            Self::Null | Self::NegativeInfinity | Self::PositiveInfinity => {
                (PLACEHOLDER_YEAR, PLACEHOLDER_MONTH, PLACEHOLDER_DAY)
            }
        }
    }

    pub const fn year(&self) -> i32 {
        self.ymd().0
    }

    pub const fn month(&self) -> Month {
        self.ymd().1
    }

    pub const fn day(&self) -> u32 {
        self.ymd().2
    }

    /// The calendar day, if finite and representable by chrono.
    ///
    /// Out-of-range days are normalized first, so February 30 becomes March 1 or 2.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        match *self {
            Self::Finite { year, month, day } => normalized_date(year, month, day),
            Self::Null | Self::NegativeInfinity | Self::PositiveInfinity => None,
        }
    }

    /// Midnight of this date in `zone`.
    ///
    /// Null and infinite dates, and years chrono cannot represent, all map to
    /// midnight of January 1 of year 1. Check the state first if the
    /// difference matters, or use [`Date::try_project`].
    pub fn project<Tz: TimeZone>(&self, zone: &Tz) -> DateTime<Tz> {
        let date = self.to_naive_date().unwrap_or(PLACEHOLDER_DATE);
        midnight_in(date, zone)
    }

    /// Like [`Date::project`] but refuses dates with no concrete instant.
    ///
    /// # Errors
    /// Returns a [`ProjectError`] for null or infinite dates and for years chrono
    /// cannot represent.
    pub fn try_project<Tz: TimeZone>(&self, zone: &Tz) -> Result<DateTime<Tz>, ProjectError> {
        match *self {
            Self::Null => Err(ProjectError::Null),
            Self::NegativeInfinity | Self::PositiveInfinity => {
                Err(ProjectError::Infinite(self.infinity_modifier()))
            }
            Self::Finite { year, month, day } => normalized_date(year, month, day)
                .map(|date| midnight_in(date, zone))
                .ok_or(ProjectError::OutOfRange { year, month, day }),
        }
    }
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

const PLACEHOLDER_DATE: NaiveDate =
    match NaiveDate::from_ymd_opt(PLACEHOLDER_YEAR, 1, PLACEHOLDER_DAY) {
        Some(date) => date,
        None => panic!("placeholder date must be representable"),
    };

// Day `d` means the first of the month plus `d - 1` days, so overflowing days
// roll into the next month and day 0 is the last day of the previous one.
fn normalized_date(year: i32, month: Month, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)?;
    first.checked_add_signed(TimeDelta::days(i64::from(day) - 1))
}

fn midnight_in<Tz: TimeZone>(date: NaiveDate, zone: &Tz) -> DateTime<Tz> {
    let local = date.and_time(NaiveTime::MIN);
    match zone.from_local_datetime(&local) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => instant,
        LocalResult::None => {
            // Midnight was skipped by a forward transition: read the wall clock
            // with the offset in effect just before it.
            let before = zone
                .offset_from_utc_datetime(&(local - TimeDelta::days(1)))
                .fix();
            let utc = local - TimeDelta::seconds(i64::from(before.local_minus_utc()));
            zone.from_utc_datetime(&utc)
        }
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::finite(date.year(), MONTHS[date.month0() as usize], date.day())
    }
}
