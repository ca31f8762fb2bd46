//! Domain layer - survey model and shared primitives.

pub mod foundation;
pub mod survey;
