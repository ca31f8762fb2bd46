//! Survey answer data model.
//!
//! `SurveyAnswers` is the single root value object of a session. A fresh
//! instance starts with every rating at the unanswered sentinel and every
//! string empty; it is mutated one field at a time and read by the progress
//! and validity computations.
//!
//! Serde names mirror the wire payload (camelCase, ratings as integers), so
//! a serialized `SurveyAnswers` is exactly the submission document.

use serde::{Deserialize, Serialize};

use super::{ContextField, DimensionKey, QuestionId};
use crate::domain::foundation::LikertValue;

/// Section A: organization context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextAnswers {
    pub company_size: String,
    pub role: String,
    pub industry: String,
    /// Free text, semantically required only when `industry` is the
    /// `other` sentinel.
    pub industry_other: String,
}

impl ContextAnswers {
    /// Industry sentinel that makes `industry_other` required.
    pub const OTHER_INDUSTRY: &'static str = "other";

    /// Returns true if the "other" industry sentinel is selected.
    pub fn is_other_industry(&self) -> bool {
        self.industry == Self::OTHER_INDUSTRY
    }

    /// Returns the field's current value.
    pub fn get(&self, field: ContextField) -> &str {
        match field {
            ContextField::CompanySize => &self.company_size,
            ContextField::Role => &self.role,
            ContextField::Industry => &self.industry,
            ContextField::IndustryOther => &self.industry_other,
        }
    }

    /// Replaces the field's value verbatim.
    ///
    /// Enumerated option lists are advisory UI choices; nothing is enforced
    /// at write time.
    pub fn set(&mut self, field: ContextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContextField::CompanySize => self.company_size = value,
            ContextField::Role => self.role = value,
            ContextField::Industry => self.industry = value,
            ContextField::IndustryOther => self.industry_other = value,
        }
    }
}

/// One of the six Likert sections (B through G).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionAnswers {
    pub q1: LikertValue,
    pub q2: LikertValue,
    pub q3: LikertValue,
    /// Always optional free text.
    pub comments: String,
}

impl DimensionAnswers {
    /// Returns the rating in the given slot.
    pub fn rating(&self, question: QuestionId) -> LikertValue {
        match question {
            QuestionId::Q1 => self.q1,
            QuestionId::Q2 => self.q2,
            QuestionId::Q3 => self.q3,
        }
    }

    /// Replaces the rating in the given slot.
    pub fn set_rating(&mut self, question: QuestionId, value: LikertValue) {
        match question {
            QuestionId::Q1 => self.q1 = value,
            QuestionId::Q2 => self.q2 = value,
            QuestionId::Q3 => self.q3 = value,
        }
    }

    /// Returns how many of the three ratings are answered.
    pub fn answered_count(&self) -> u32 {
        QuestionId::ALL
            .into_iter()
            .filter(|q| self.rating(*q).is_answered())
            .count() as u32
    }

    /// Returns true if all three ratings are answered.
    pub fn is_complete(&self) -> bool {
        self.answered_count() == QuestionId::ALL.len() as u32
    }
}

/// Contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAnswers {
    pub email: String,
}

/// The complete answer set for one survey session.
///
/// Exactly six dimension blocks with exactly three ratings each; the counts
/// are fixed, not configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnswers {
    pub context: ContextAnswers,
    pub strategy: DimensionAnswers,
    pub use_cases: DimensionAnswers,
    pub organization: DimensionAnswers,
    pub competencies: DimensionAnswers,
    pub technology: DimensionAnswers,
    pub governance: DimensionAnswers,
    pub contact: ContactAnswers,
}

impl SurveyAnswers {
    /// Creates a fresh answer set: all ratings unanswered, all strings empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dimension block for the given key.
    pub fn dimension(&self, key: DimensionKey) -> &DimensionAnswers {
        match key {
            DimensionKey::Strategy => &self.strategy,
            DimensionKey::UseCases => &self.use_cases,
            DimensionKey::Organization => &self.organization,
            DimensionKey::Competencies => &self.competencies,
            DimensionKey::Technology => &self.technology,
            DimensionKey::Governance => &self.governance,
        }
    }

    /// Returns the mutable dimension block for the given key.
    pub fn dimension_mut(&mut self, key: DimensionKey) -> &mut DimensionAnswers {
        match key {
            DimensionKey::Strategy => &mut self.strategy,
            DimensionKey::UseCases => &mut self.use_cases,
            DimensionKey::Organization => &mut self.organization,
            DimensionKey::Competencies => &mut self.competencies,
            DimensionKey::Technology => &mut self.technology,
            DimensionKey::Governance => &mut self.governance,
        }
    }

    /// Replaces one context field.
    pub fn set_context_field(&mut self, field: ContextField, value: impl Into<String>) {
        self.context.set(field, value);
    }

    /// Replaces one rating slot.
    pub fn set_rating(&mut self, key: DimensionKey, question: QuestionId, value: LikertValue) {
        self.dimension_mut(key).set_rating(question, value);
    }

    /// Replaces one comments field.
    pub fn set_comments(&mut self, key: DimensionKey, value: impl Into<String>) {
        self.dimension_mut(key).comments = value.into();
    }

    /// Replaces the contact email verbatim, with no normalization.
    ///
    /// Trimming and inspection happen at read time only, inside the
    /// validity computation.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.contact.email = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_answers_are_fully_unanswered() {
        let answers = SurveyAnswers::new();
        assert_eq!(answers.context.company_size, "");
        assert_eq!(answers.context.industry_other, "");
        assert_eq!(answers.contact.email, "");
        for key in DimensionKey::ALL {
            let dim = answers.dimension(key);
            assert_eq!(dim.answered_count(), 0);
            assert_eq!(dim.comments, "");
        }
    }

    #[test]
    fn set_rating_changes_only_the_named_slot() {
        let mut answers = SurveyAnswers::new();
        answers.set_rating(DimensionKey::Strategy, QuestionId::Q2, LikertValue::Agree);

        let mut expected = SurveyAnswers::new();
        expected.strategy.q2 = LikertValue::Agree;
        assert_eq!(answers, expected);
    }

    #[test]
    fn set_context_field_replaces_verbatim() {
        let mut answers = SurveyAnswers::new();
        answers.set_context_field(ContextField::CompanySize, "50–249 Mitarbeitende");
        assert_eq!(answers.context.company_size, "50–249 Mitarbeitende");
        assert_eq!(answers.context.role, "");
    }

    #[test]
    fn set_email_does_not_trim() {
        let mut answers = SurveyAnswers::new();
        answers.set_email(" a@b.com ");
        assert_eq!(answers.contact.email, " a@b.com ");
    }

    #[test]
    fn is_other_industry_matches_sentinel_only() {
        let mut answers = SurveyAnswers::new();
        assert!(!answers.context.is_other_industry());
        answers.set_context_field(ContextField::Industry, "other");
        assert!(answers.context.is_other_industry());
        answers.set_context_field(ContextField::Industry, "Other");
        assert!(!answers.context.is_other_industry());
    }

    #[test]
    fn dimension_is_complete_when_all_three_ratings_set() {
        let mut dim = DimensionAnswers::default();
        assert!(!dim.is_complete());
        dim.set_rating(QuestionId::Q1, LikertValue::Neutral);
        dim.set_rating(QuestionId::Q2, LikertValue::Neutral);
        assert!(!dim.is_complete());
        dim.set_rating(QuestionId::Q3, LikertValue::Neutral);
        assert!(dim.is_complete());
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let mut answers = SurveyAnswers::new();
        answers.set_context_field(ContextField::Industry, "retail");
        answers.set_rating(DimensionKey::UseCases, QuestionId::Q1, LikertValue::Agree);

        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["context"]["industry"], "retail");
        assert_eq!(json["context"]["companySize"], "");
        assert_eq!(json["context"]["industryOther"], "");
        assert_eq!(json["useCases"]["q1"], 4);
        assert_eq!(json["strategy"]["q1"], 0);
        assert_eq!(json["contact"]["email"], "");
    }

    #[test]
    fn round_trips_through_json() {
        let mut answers = SurveyAnswers::new();
        answers.set_context_field(ContextField::Industry, "other");
        answers.set_context_field(ContextField::IndustryOther, "Raumfahrt");
        answers.set_rating(DimensionKey::Governance, QuestionId::Q3, LikertValue::StronglyAgree);
        answers.set_comments(DimensionKey::Governance, "Offene Fragen zur Regulierung");
        answers.set_email("a@b.com");

        let json = serde_json::to_string(&answers).unwrap();
        let back: SurveyAnswers = serde_json::from_str(&json).unwrap();
        assert_eq!(answers, back);
    }
}
