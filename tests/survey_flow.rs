//! End-to-end tests for the survey session flow.
//!
//! Drives a controller the way the presentation layer would: raw string
//! edit events in, derived state and a delivered JSON payload out.

use std::sync::Arc;

use maturity_survey::adapters::InMemorySubmissionSink;
use maturity_survey::application::{FieldEdit, SubmitOutcome, SurveyController};
use maturity_survey::domain::foundation::{Percentage, ViewState};
use maturity_survey::domain::survey::{DimensionKey, SurveyCatalog};

fn controller() -> (SurveyController, Arc<InMemorySubmissionSink>) {
    let sink = Arc::new(InMemorySubmissionSink::new());
    (SurveyController::with_sink(sink.clone()), sink)
}

/// Answers every question through the string boundary, using the catalog's
/// own option values, the way the rendered form would.
fn answer_everything(controller: &mut SurveyController) {
    let catalog = SurveyCatalog::builtin();
    controller
        .apply(FieldEdit::parse_context("companySize", &catalog.company_sizes()[1]).unwrap())
        .unwrap();
    controller
        .apply(FieldEdit::parse_context("role", &catalog.roles()[0]).unwrap())
        .unwrap();
    controller
        .apply(FieldEdit::parse_context("industry", "retail").unwrap())
        .unwrap();

    for section in catalog.sections() {
        for question in &section.questions {
            let edit =
                FieldEdit::parse_dimension(section.key.as_str(), question.id.as_str(), "3")
                    .unwrap();
            controller.apply(edit).unwrap();
        }
    }

    controller
        .apply(FieldEdit::contact_email("a@b.com"))
        .unwrap();
}

#[test]
fn full_session_lands_assesses_and_submits() {
    let (mut controller, sink) = controller();
    assert_eq!(controller.view_state(), ViewState::Landing);

    controller.start_assessment().unwrap();
    assert_eq!(controller.progress(), Percentage::ZERO);
    assert!(!controller.is_valid());

    answer_everything(&mut controller);
    assert_eq!(controller.progress(), Percentage::HUNDRED);
    assert!(controller.is_valid());

    assert_eq!(controller.submit().unwrap(), SubmitOutcome::Submitted);
    assert_eq!(controller.view_state(), ViewState::Submitted);
    assert_eq!(sink.delivery_count(), 1);
}

#[test]
fn delivered_payload_mirrors_the_data_model() {
    let (mut controller, sink) = controller();
    controller.start_assessment().unwrap();
    answer_everything(&mut controller);
    controller
        .apply(FieldEdit::parse_dimension("strategy", "comments", "Vieles offen").unwrap())
        .unwrap();
    controller.submit().unwrap();

    let record = &sink.delivered()[0];
    let json = serde_json::to_value(record).unwrap();

    assert_eq!(json["sessionId"], controller.session_id().to_string());
    assert_eq!(json["answers"]["context"]["companySize"], "50–249 Mitarbeitende");
    assert_eq!(json["answers"]["context"]["industry"], "retail");
    assert_eq!(json["answers"]["strategy"]["q1"], 3);
    assert_eq!(json["answers"]["strategy"]["comments"], "Vieles offen");
    assert_eq!(json["answers"]["useCases"]["q3"], 3);
    assert_eq!(json["answers"]["contact"]["email"], "a@b.com");
}

#[test]
fn progress_counts_partial_sections() {
    let (mut controller, _) = controller();
    controller.start_assessment().unwrap();

    controller
        .apply(FieldEdit::parse_dimension("technology", "q1", "2").unwrap())
        .unwrap();
    controller
        .apply(FieldEdit::parse_dimension("technology", "q2", "4").unwrap())
        .unwrap();
    // 2/22 = 9.09% -> 9
    assert_eq!(controller.progress().value(), 9);

    // Re-answering the same question does not move progress
    controller
        .apply(FieldEdit::parse_dimension("technology", "q1", "5").unwrap())
        .unwrap();
    assert_eq!(controller.progress().value(), 9);
}

#[test]
fn other_industry_blocks_submission_until_described() {
    let (mut controller, sink) = controller();
    controller.start_assessment().unwrap();
    answer_everything(&mut controller);

    controller
        .apply(FieldEdit::parse_context("industry", "other").unwrap())
        .unwrap();
    assert!(!controller.is_valid());
    assert_eq!(controller.submit().unwrap(), SubmitOutcome::Incomplete);
    assert_eq!(sink.delivery_count(), 0);

    controller
        .apply(FieldEdit::parse_context("industryOther", "Raumfahrtzulieferer").unwrap())
        .unwrap();
    assert!(controller.is_valid());
    assert_eq!(controller.submit().unwrap(), SubmitOutcome::Submitted);
}

#[test]
fn email_with_surrounding_whitespace_is_accepted_verbatim() {
    let (mut controller, sink) = controller();
    controller.start_assessment().unwrap();
    answer_everything(&mut controller);
    controller
        .apply(FieldEdit::contact_email(" a@b.com "))
        .unwrap();

    assert!(controller.is_valid());
    controller.submit().unwrap();

    // Delivered verbatim: validity trims at read time, storage never does
    assert_eq!(sink.delivered()[0].answers.contact.email, " a@b.com ");
}

#[test]
fn bad_edit_events_fail_fast_without_touching_state() {
    let (mut controller, _) = controller();
    controller.start_assessment().unwrap();

    assert!(FieldEdit::parse_dimension("strategie", "q1", "3").is_err());
    assert!(FieldEdit::parse_dimension("strategy", "q5", "3").is_err());
    assert!(FieldEdit::parse_dimension("strategy", "q1", "seven").is_err());
    assert!(FieldEdit::parse_context("companysize", "x").is_err());

    assert_eq!(controller.progress(), Percentage::ZERO);
    assert_eq!(
        controller.answers().dimension(DimensionKey::Strategy).answered_count(),
        0
    );
}

#[test]
fn reset_clears_everything_for_a_new_visitor() {
    let (mut controller, sink) = controller();
    let first_session = controller.session_id();

    controller.start_assessment().unwrap();
    answer_everything(&mut controller);
    controller.submit().unwrap();

    controller.reset();
    assert_eq!(controller.view_state(), ViewState::Landing);
    assert_eq!(controller.progress(), Percentage::ZERO);
    assert!(!controller.is_valid());
    assert_ne!(controller.session_id(), first_session);

    // The new session can run the whole flow again
    controller.start_assessment().unwrap();
    answer_everything(&mut controller);
    assert_eq!(controller.submit().unwrap(), SubmitOutcome::Submitted);
    assert_eq!(sink.delivery_count(), 2);
    assert_ne!(sink.delivered()[0].session_id, sink.delivered()[1].session_id);
}
