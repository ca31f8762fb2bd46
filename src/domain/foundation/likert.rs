//! Likert value object for the five-point agreement scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Five-point agreement rating with an explicit unanswered sentinel.
///
/// 0 means the question has not been answered yet; 1 through 5 run from
/// strongly disagree to strongly agree. Serializes as its integer value,
/// matching the wire payload.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum LikertValue {
    #[default]
    Unselected = 0,
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl LikertValue {
    /// Creates a LikertValue from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            0 => Ok(LikertValue::Unselected),
            1 => Ok(LikertValue::StronglyDisagree),
            2 => Ok(LikertValue::Disagree),
            3 => Ok(LikertValue::Neutral),
            4 => Ok(LikertValue::Agree),
            5 => Ok(LikertValue::StronglyAgree),
            _ => Err(ValidationError::out_of_range("rating", 0, 5, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns true if the question has been answered.
    pub fn is_answered(&self) -> bool {
        !matches!(self, LikertValue::Unselected)
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LikertValue::Unselected => "Unselected",
            LikertValue::StronglyDisagree => "Strongly Disagree",
            LikertValue::Disagree => "Disagree",
            LikertValue::Neutral => "Neutral",
            LikertValue::Agree => "Agree",
            LikertValue::StronglyAgree => "Strongly Agree",
        }
    }
}

impl From<LikertValue> for u8 {
    fn from(value: LikertValue) -> Self {
        value.value()
    }
}

impl TryFrom<u8> for LikertValue {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl fmt::Display for LikertValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}
