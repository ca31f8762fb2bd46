//! Required-field validation over the answer set.
//!
//! Validity is a derived boolean state, not an error: an incomplete answer
//! set simply blocks the submit transition. The structured
//! [`missing_requirements`] listing exists for callers that want field-level
//! diagnostics instead of the single generic "fill required fields" message.

use serde::Serialize;
use std::fmt;

use super::{ContextField, DimensionKey, QuestionId, SurveyAnswers};

/// A required field that currently fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum RequiredField {
    /// A context field is empty (or, for `industryOther`, blank while the
    /// `other` industry sentinel is selected).
    Context { field: &'static str },
    /// A rating is still at the unanswered sentinel.
    Rating {
        section: DimensionKey,
        question: QuestionId,
    },
    /// The email is blank or does not contain an `@`.
    Email,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Context { field } => write!(f, "context.{}", field),
            RequiredField::Rating { section, question } => {
                write!(f, "{}.{}", section, question)
            }
            RequiredField::Email => write!(f, "contact.email"),
        }
    }
}

/// Lists every required field that currently fails, in survey order.
///
/// Rules:
/// 1. `companySize`, `role` and `industry` must be non-empty.
/// 2. `industryOther` must be non-blank (after trimming) iff the `other`
///    industry sentinel is selected.
/// 3. All 18 ratings must be answered; comments are never required.
/// 4. The email must be non-blank after trimming and contain an `@`.
pub fn missing_requirements(answers: &SurveyAnswers) -> Vec<RequiredField> {
    let mut missing = Vec::new();

    let context = &answers.context;
    for field in [ContextField::CompanySize, ContextField::Role, ContextField::Industry] {
        if context.get(field).is_empty() {
            missing.push(RequiredField::Context { field: field.as_str() });
        }
    }
    if context.is_other_industry() && context.industry_other.trim().is_empty() {
        missing.push(RequiredField::Context {
            field: ContextField::IndustryOther.as_str(),
        });
    }

    for section in DimensionKey::ALL {
        let dim = answers.dimension(section);
        for question in QuestionId::ALL {
            if !dim.rating(question).is_answered() {
                missing.push(RequiredField::Rating { section, question });
            }
        }
    }

    if !is_plausible_email(&answers.contact.email) {
        missing.push(RequiredField::Email);
    }

    missing
}

/// Returns true iff every required field is answered and the email is
/// plausible. Pure; the single-boolean contract of the reference behavior.
pub fn compute_validity(answers: &SurveyAnswers) -> bool {
    missing_requirements(answers).is_empty()
}

/// Minimal email plausibility: trimmed non-empty and contains an `@`.
/// Deliberately no RFC-grade validation.
fn is_plausible_email(email: &str) -> bool {
    let trimmed = email.trim();
    !trimmed.is_empty() && trimmed.contains('@')
}
