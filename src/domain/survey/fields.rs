//! Field identifiers for the survey data model.
//!
//! The six dimension keys and their question slots are fixed; the string
//! parsers exist for the UI event boundary, where edits arrive as raw
//! `(sectionKey, field)` name pairs and unknown names must be rejected.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::SurveyError;
use crate::domain::foundation::LikertValue;

/// The six fixed thematic sections of the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionKey {
    Strategy,
    UseCases,
    Organization,
    Competencies,
    Technology,
    Governance,
}

impl DimensionKey {
    /// All dimension keys in survey order.
    pub const ALL: [DimensionKey; 6] = [
        DimensionKey::Strategy,
        DimensionKey::UseCases,
        DimensionKey::Organization,
        DimensionKey::Competencies,
        DimensionKey::Technology,
        DimensionKey::Governance,
    ];

    /// Returns this key's position in survey order.
    pub fn ordinal(&self) -> usize {
        match self {
            DimensionKey::Strategy => 0,
            DimensionKey::UseCases => 1,
            DimensionKey::Organization => 2,
            DimensionKey::Competencies => 3,
            DimensionKey::Technology => 4,
            DimensionKey::Governance => 5,
        }
    }

    /// Returns the wire name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKey::Strategy => "strategy",
            DimensionKey::UseCases => "useCases",
            DimensionKey::Organization => "organization",
            DimensionKey::Competencies => "competencies",
            DimensionKey::Technology => "technology",
            DimensionKey::Governance => "governance",
        }
    }

    /// Parses a wire name, rejecting anything outside the six fixed keys.
    pub fn parse(s: &str) -> Result<Self, SurveyError> {
        DimensionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SurveyError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the three rating slots inside a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
}

impl QuestionId {
    /// All question slots in order.
    pub const ALL: [QuestionId; 3] = [QuestionId::Q1, QuestionId::Q2, QuestionId::Q3];

    /// Returns the wire name of this slot.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionId::Q1 => "q1",
            QuestionId::Q2 => "q2",
            QuestionId::Q3 => "q3",
        }
    }

    /// Parses a wire name.
    pub fn parse(s: &str) -> Result<Self, SurveyError> {
        QuestionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| SurveyError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An editable field inside a dimension block: a rating slot or the
/// free-text comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionField {
    Rating(QuestionId),
    Comments,
}

impl DimensionField {
    /// Returns the wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionField::Rating(question) => question.as_str(),
            DimensionField::Comments => "comments",
        }
    }

    /// Parses a wire name, rejecting anything outside {q1, q2, q3, comments}.
    pub fn parse(s: &str) -> Result<Self, SurveyError> {
        if s == "comments" {
            return Ok(DimensionField::Comments);
        }
        QuestionId::parse(s).map(DimensionField::Rating)
    }
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An editable field in the organization context block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextField {
    CompanySize,
    Role,
    Industry,
    IndustryOther,
}

impl ContextField {
    /// All context fields.
    pub const ALL: [ContextField; 4] = [
        ContextField::CompanySize,
        ContextField::Role,
        ContextField::Industry,
        ContextField::IndustryOther,
    ];

    /// Returns the wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextField::CompanySize => "companySize",
            ContextField::Role => "role",
            ContextField::Industry => "industry",
            ContextField::IndustryOther => "industryOther",
        }
    }

    /// Parses a wire name.
    pub fn parse(s: &str) -> Result<Self, SurveyError> {
        ContextField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| SurveyError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for ContextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The value carried by a dimension field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Rating(LikertValue),
    Text(String),
}

impl FieldValue {
    /// Returns a short name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Rating(_) => "rating",
            FieldValue::Text(_) => "text",
        }
    }
}
