//! Maturity Survey - AI maturity self-assessment engine.
//!
//! This crate implements the survey state controller behind the AI maturity
//! questionnaire: the answer data model, progress and validity derivation,
//! and the Landing -> Assessment -> Submitted session flow.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
