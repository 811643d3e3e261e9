//! Conversions between [`Date`] and the values a database driver exchanges.

use chrono::{DateTime, FixedOffset, Utc};

use crate::consts::{INFINITY_TEXT, NEGATIVE_INFINITY_TEXT, PLACEHOLDER_YEAR, type_names};
use crate::{Date, InfinityModifier, prelude::*};

/// A value as produced or consumed by a database driver.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DriverValue {
    /// The driver's "no value"
    #[display(fmt = "null")]
    Null,
    #[display(fmt = "{_0}")]
    Int(i64),
    #[display(fmt = "{_0}")]
    Float(f64),
    #[display(fmt = "{_0}")]
    Bool(bool),
    #[display(fmt = "{_0:?}")]
    Bytes(Vec<u8>),
    #[display(fmt = "{_0}")]
    Text(String),
    /// A point in time together with the offset it was read in
    #[display(fmt = "{_0}")]
    Timestamp(DateTime<FixedOffset>),
}

impl DriverValue {
    /// Stable token naming the runtime type of this value
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => type_names::NULL,
            Self::Int(_) => type_names::INT,
            Self::Float(_) => type_names::FLOAT,
            Self::Bool(_) => type_names::BOOL,
            Self::Bytes(_) => type_names::BYTES,
            Self::Text(_) => type_names::TEXT,
            Self::Timestamp(_) => type_names::TIMESTAMP,
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for DriverValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DriverValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl<Tz: chrono::TimeZone> From<DateTime<Tz>> for DriverValue {
    fn from(timestamp: DateTime<Tz>) -> Self {
        Self::Timestamp(timestamp.fixed_offset())
    }
}

/// Error returned when a driver value cannot be read as a [`Date`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The value was neither null, a timestamp, nor text.
    #[error("value {value} has unexpected type {type_name}")]
    UnexpectedType {
        value: String,
        type_name: &'static str,
    },

    /// The value was text other than an infinity sentinel.
    #[error("unexpected string value {0}")]
    UnexpectedStringValue(String),
}

/// Types that can be filled in place from a driver value.
pub trait Scan {
    /// Overwrites `self` with the value read from `src`.
    ///
    /// # Errors
    /// Returns a [`DecodeError`] if `src` has a shape the implementor does not accept.
    fn scan(&mut self, src: &DriverValue) -> Result<(), DecodeError>;
}

/// Types that can be handed to a driver.
pub trait ToDriverValue {
    fn to_driver_value(&self) -> DriverValue;
}

impl Scan for Date {
    /// Resets the receiver to null, then reads `src`.
    ///
    /// A timestamp keeps only its calendar date as seen in its own offset;
    /// time of day and offset are dropped. On error the receiver stays null.
    fn scan(&mut self, src: &DriverValue) -> Result<(), DecodeError> {
        *self = Self::null();
        match src {
            DriverValue::Null => Ok(()),
            DriverValue::Timestamp(timestamp) => {
                *self = Self::from(timestamp.date_naive());
                Ok(())
            }
            DriverValue::Text(text) => match InfinityModifier::from_text(text) {
                Some(InfinityModifier::Infinity) => {
                    *self = Self::positive_infinity();
                    Ok(())
                }
                Some(InfinityModifier::NegativeInfinity) => {
                    *self = Self::negative_infinity();
                    Ok(())
                }
                Some(InfinityModifier::None) | None => {
                    log::trace!("rejecting date text {text:?}");
                    Err(DecodeError::UnexpectedStringValue(text.clone()))
                }
            },
            other => {
                log::trace!("rejecting {} value as date", other.type_name());
                Err(DecodeError::UnexpectedType {
                    value: other.to_string(),
                    type_name: other.type_name(),
                })
            }
        }
    }
}

impl ToDriverValue for Date {
    /// Finite dates become a timestamp at midnight UTC.
    ///
    /// A finite date chrono cannot represent is written as the year 1
    /// placeholder, with a warning logged.
    fn to_driver_value(&self) -> DriverValue {
        match self {
            Self::Null => DriverValue::Null,
            Self::NegativeInfinity => DriverValue::from(NEGATIVE_INFINITY_TEXT),
            Self::PositiveInfinity => DriverValue::from(INFINITY_TEXT),
            Self::Finite { year, month, day } => {
                if self.to_naive_date().is_none() {
                    log::warn!(
                        "date {year}-{}-{day} is out of range, writing {PLACEHOLDER_YEAR}-01-01",
                        month.number_from_month()
                    );
                }
                DriverValue::Timestamp(self.project(&Utc).fixed_offset())
            }
        }
    }
}

impl TryFrom<&DriverValue> for Date {
    type Error = DecodeError;

    fn try_from(value: &DriverValue) -> Result<Self, Self::Error> {
        let mut date = Self::null();
        date.scan(value)?;
        Ok(date)
    }
}

impl TryFrom<DriverValue> for Date {
    type Error = DecodeError;

    fn try_from(value: DriverValue) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl From<Date> for DriverValue {
    fn from(date: Date) -> Self {
        date.to_driver_value()
    }
}
