//! Field edit events from the UI boundary.
//!
//! The presentation layer reports edits as raw name/value pairs. `FieldEdit`
//! parses them into typed edits, failing fast on unknown section or field
//! names and out-of-range ratings before anything touches the answer set.

use crate::domain::foundation::ValidationError;
use crate::domain::survey::{
    ContextField, DimensionField, DimensionKey, FieldValue, SurveyError,
};

/// One user-driven edit to a single answer field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Edit to one of the four context fields.
    Context { field: ContextField, value: String },
    /// Edit to a rating or comments field inside a dimension.
    Dimension {
        section: DimensionKey,
        field: DimensionField,
        value: FieldValue,
    },
    /// Edit to the contact email.
    ContactEmail { value: String },
}

impl FieldEdit {
    /// Parses a raw `(field, value)` context edit.
    ///
    /// # Errors
    ///
    /// - `UnknownField` if the field name is not part of the context block
    pub fn parse_context(field: &str, value: &str) -> Result<Self, SurveyError> {
        Ok(FieldEdit::Context {
            field: ContextField::parse(field)?,
            value: value.to_string(),
        })
    }

    /// Parses a raw `(sectionKey, field, value)` dimension edit.
    ///
    /// Rating fields expect the value to be an integer 0-5; the comments
    /// field takes the value verbatim.
    ///
    /// # Errors
    ///
    /// - `UnknownSection` / `UnknownField` for names outside the fixed sets
    /// - `Validation` if a rating value is not an integer in range
    pub fn parse_dimension(section: &str, field: &str, value: &str) -> Result<Self, SurveyError> {
        let section = DimensionKey::parse(section)?;
        let field = DimensionField::parse(field)?;
        let value = match field {
            DimensionField::Rating(question) => {
                let raw: u8 = value.trim().parse().map_err(|_| {
                    ValidationError::invalid_format(
                        question.as_str(),
                        format!("expected an integer rating 0-5, got '{}'", value),
                    )
                })?;
                FieldValue::Rating(raw.try_into()?)
            }
            DimensionField::Comments => FieldValue::Text(value.to_string()),
        };
        Ok(FieldEdit::Dimension { section, field, value })
    }

    /// Wraps a contact email edit; the value is carried verbatim.
    pub fn contact_email(value: &str) -> Self {
        FieldEdit::ContactEmail {
            value: value.to_string(),
        }
    }
}
