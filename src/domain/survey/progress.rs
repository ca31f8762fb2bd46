//! Completion progress over the fixed question set.

use super::{DimensionKey, SurveyAnswers};
use crate::domain::foundation::Percentage;

/// Number of tracked questions: 3 context fields, 18 ratings, 1 email.
///
/// `industryOther` is never counted, even when the `other` industry makes it
/// required; it shares its question slot with `industry`.
pub const TOTAL_TRACKED_QUESTIONS: u32 = 22;

/// Counts how many of the 22 tracked questions hold an answer.
///
/// A context field counts when non-empty, a rating when it is not the
/// unanswered sentinel, and the email when non-empty. No format checks
/// happen here; truthiness only.
pub fn answered_count(answers: &SurveyAnswers) -> u32 {
    let mut answered = 0;

    if !answers.context.company_size.is_empty() {
        answered += 1;
    }
    if !answers.context.role.is_empty() {
        answered += 1;
    }
    if !answers.context.industry.is_empty() {
        answered += 1;
    }

    for key in DimensionKey::ALL {
        answered += answers.dimension(key).answered_count();
    }

    if !answers.contact.email.is_empty() {
        answered += 1;
    }

    answered
}

/// Computes completion progress as a rounded integer percentage.
///
/// Pure and idempotent; safe to recompute after every mutation.
pub fn compute_progress(answers: &SurveyAnswers) -> Percentage {
    Percentage::from_ratio(answered_count(answers), TOTAL_TRACKED_QUESTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::LikertValue;
    use crate::domain::survey::{ContextField, QuestionId};
    use proptest::prelude::*;

    fn complete_answers() -> SurveyAnswers {
        let mut answers = SurveyAnswers::new();
        answers.set_context_field(ContextField::CompanySize, "50–249 Mitarbeitende");
        answers.set_context_field(ContextField::Role, "Geschäftsleitung");
        answers.set_context_field(ContextField::Industry, "retail");
        for key in DimensionKey::ALL {
            for question in QuestionId::ALL {
                answers.set_rating(key, question, LikertValue::Neutral);
            }
        }
        answers.set_email("a@b.com");
        answers
    }

    #[test]
    fn fresh_answers_have_zero_progress() {
        assert_eq!(compute_progress(&SurveyAnswers::new()), Percentage::ZERO);
    }

    #[test]
    fn complete_answers_have_full_progress() {
        assert_eq!(compute_progress(&complete_answers()), Percentage::HUNDRED);
    }

    #[test]
    fn industry_other_is_not_counted() {
        let mut answers = complete_answers();
        answers.set_context_field(ContextField::Industry, "other");
        // Still 22/22 even though industryOther is blank and required
        assert_eq!(compute_progress(&answers), Percentage::HUNDRED);

        answers.set_context_field(ContextField::IndustryOther, "Raumfahrt");
        assert_eq!(compute_progress(&answers), Percentage::HUNDRED);
    }

    #[test]
    fn single_rating_rounds_to_five_percent() {
        let mut answers = SurveyAnswers::new();
        answers.set_rating(DimensionKey::Strategy, QuestionId::Q1, LikertValue::Agree);
        // 1/22 = 4.55% rounds to 5
        assert_eq!(compute_progress(&answers).value(), 5);
    }

    #[test]
    fn email_counts_without_format_check() {
        let mut answers = SurveyAnswers::new();
        answers.set_email("not-an-email");
        assert_eq!(answered_count(&answers), 1);
    }

    #[test]
    fn comments_do_not_affect_progress() {
        let mut answers = SurveyAnswers::new();
        for key in DimensionKey::ALL {
            answers.set_comments(key, "lots of text");
        }
        assert_eq!(compute_progress(&answers), Percentage::ZERO);
    }

    #[test]
    fn compute_progress_is_idempotent() {
        let answers = complete_answers();
        assert_eq!(compute_progress(&answers), compute_progress(&answers));
    }

    // Every tracked question, as an index 0..22, applied in arbitrary order.
    fn apply_answer(answers: &mut SurveyAnswers, slot: usize) {
        match slot {
            0 => answers.set_context_field(ContextField::CompanySize, "x"),
            1 => answers.set_context_field(ContextField::Role, "x"),
            2 => answers.set_context_field(ContextField::Industry, "retail"),
            21 => answers.set_email("a@b.com"),
            n => {
                let key = DimensionKey::ALL[(n - 3) / 3];
                let question = QuestionId::ALL[(n - 3) % 3];
                answers.set_rating(key, question, LikertValue::Agree);
            }
        }
    }

    proptest! {
        #[test]
        fn progress_is_monotonic_under_answer_only_edits(
            order in Just((0..22usize).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let mut answers = SurveyAnswers::new();
            let mut previous = compute_progress(&answers);
            for slot in order {
                apply_answer(&mut answers, slot);
                let current = compute_progress(&answers);
                prop_assert!(current >= previous);
                previous = current;
            }
            prop_assert_eq!(previous, Percentage::HUNDRED);
        }

        #[test]
        fn progress_never_exceeds_100(count in 0usize..=22) {
            let mut answers = SurveyAnswers::new();
            for slot in 0..count {
                apply_answer(&mut answers, slot);
            }
            prop_assert!(compute_progress(&answers) <= Percentage::HUNDRED);
        }
    }
}
