//! Survey module - answer data model, catalog, progress and validity.
//!
//! This module defines:
//! - The `SurveyAnswers` root value object and its fixed field identifiers
//! - The read-only `SurveyCatalog` configuration (sections and option lists)
//! - The pure `compute_progress` / `compute_validity` derivations
//! - Survey-specific errors

mod answers;
mod catalog;
mod errors;
mod fields;
mod progress;
mod validity;

pub use answers::{ContactAnswers, ContextAnswers, DimensionAnswers, SurveyAnswers};
pub use catalog::{
    CatalogError, IndustryOption, QuestionDefinition, SectionDefinition, SurveyCatalog,
};
pub use errors::SurveyError;
pub use fields::{ContextField, DimensionField, DimensionKey, FieldValue, QuestionId};
pub use progress::{answered_count, compute_progress, TOTAL_TRACKED_QUESTIONS};
pub use validity::{compute_validity, missing_requirements, RequiredField};
