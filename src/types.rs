use crate::consts::{INFINITY_TEXT, NEGATIVE_INFINITY_TEXT};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Infinity status of a date.
///
/// Stored as `-1`, `0` or `1` so that it orders the way the values it marks do.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum InfinityModifier {
    /// Negative infinity
    #[display(fmt = "{NEGATIVE_INFINITY_TEXT}")]
    NegativeInfinity = -1,
    /// Neither infinity; the date is finite or null
    #[default]
    #[display(fmt = "none")]
    None = 0,
    /// Positive infinity
    #[display(fmt = "{INFINITY_TEXT}")]
    Infinity = 1,
}

/// Returned when an integer does not name an [`InfinityModifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid infinity modifier {0} (must be -1, 0 or 1)")]
pub struct InvalidInfinityModifier(pub i8);

impl InfinityModifier {
    /// Sentinel text the driver uses for this modifier, if it has one
    pub const fn as_text(self) -> Option<&'static str> {
        match self {
            Self::NegativeInfinity => Some(NEGATIVE_INFINITY_TEXT),
            Self::None => None,
            Self::Infinity => Some(INFINITY_TEXT),
        }
    }

    /// Matches driver sentinel text byte for byte. No trimming, no case folding.
    pub fn from_text(text: &str) -> Option<Self> {
        match text {
            INFINITY_TEXT => Some(Self::Infinity),
            NEGATIVE_INFINITY_TEXT => Some(Self::NegativeInfinity),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl TryFrom<i8> for InfinityModifier {
    type Error = InvalidInfinityModifier;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::NegativeInfinity),
            0 => Ok(Self::None),
            1 => Ok(Self::Infinity),
            other => Err(InvalidInfinityModifier(other)),
        }
    }
}

impl From<InfinityModifier> for i8 {
    fn from(modifier: InfinityModifier) -> Self {
        modifier as Self
    }
}
