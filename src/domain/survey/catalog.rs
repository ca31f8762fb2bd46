//! Survey catalog - externally supplied, read-only configuration data.
//!
//! The catalog describes which sections exist and what they ask: the six
//! dimension definitions with their question texts, plus the option lists
//! for the context selects. It is presentation data consumed by the UI;
//! progress and validity never read it, so the question set can change
//! without touching the core computations.
//!
//! Catalogs are parsed from YAML and structurally validated on load. A
//! built-in default (the original German question set) is embedded in the
//! crate.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{DimensionKey, QuestionId};

/// Errors raised while loading a survey catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse survey catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog must define exactly {expected} sections, found {actual}")]
    SectionCount { expected: usize, actual: usize },

    #[error("Catalog section at position {position} must be '{expected}', found '{found}'")]
    SectionOrder {
        position: usize,
        expected: DimensionKey,
        found: DimensionKey,
    },

    #[error("Catalog section '{section}' must define questions q1, q2, q3 in order")]
    QuestionSet { section: DimensionKey },

    #[error("Catalog option list '{list}' cannot be empty")]
    EmptyOptions { list: &'static str },

    #[error("Catalog industry list must include the 'other' sentinel")]
    MissingOtherIndustry,
}

/// One Likert question within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: QuestionId,
    pub text: String,
}

/// One selectable industry, a stable value plus a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryOption {
    pub value: String,
    pub label: String,
}

/// Definition of one survey section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDefinition {
    pub key: DimensionKey,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<QuestionDefinition>,
    #[serde(default)]
    pub freetext_prompt: Option<String>,
}

/// The full survey catalog.
///
/// # Invariants
///
/// - exactly one section per [`DimensionKey`], in survey order
/// - each section defines questions q1, q2, q3 in order
/// - option lists are non-empty and the industry list contains `other`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyCatalog {
    company_sizes: Vec<String>,
    roles: Vec<String>,
    industries: Vec<IndustryOption>,
    sections: Vec<SectionDefinition>,
}

static BUILTIN: Lazy<SurveyCatalog> = Lazy::new(|| {
    SurveyCatalog::from_yaml(include_str!("catalog.yaml"))
        .expect("embedded survey catalog is valid")
});

impl SurveyCatalog {
    /// Parses and validates a catalog from YAML.
    ///
    /// # Errors
    ///
    /// - `Parse` if the YAML is malformed
    /// - structural errors if the section or question sets deviate from the
    ///   fixed survey shape
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: SurveyCatalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Returns the embedded default catalog.
    pub fn builtin() -> &'static SurveyCatalog {
        &BUILTIN
    }

    /// Returns the company size options.
    pub fn company_sizes(&self) -> &[String] {
        &self.company_sizes
    }

    /// Returns the role options.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Returns the industry options.
    pub fn industries(&self) -> &[IndustryOption] {
        &self.industries
    }

    /// Returns the six section definitions in survey order.
    pub fn sections(&self) -> &[SectionDefinition] {
        &self.sections
    }

    /// Returns the section definition for the given dimension.
    pub fn section(&self, key: DimensionKey) -> &SectionDefinition {
        // validate() guarantees sections are in DimensionKey::ALL order
        &self.sections[key.ordinal()]
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.sections.len() != DimensionKey::ALL.len() {
            return Err(CatalogError::SectionCount {
                expected: DimensionKey::ALL.len(),
                actual: self.sections.len(),
            });
        }

        for (position, (section, expected)) in
            self.sections.iter().zip(DimensionKey::ALL).enumerate()
        {
            if section.key != expected {
                return Err(CatalogError::SectionOrder {
                    position,
                    expected,
                    found: section.key,
                });
            }
            let ids: Vec<QuestionId> = section.questions.iter().map(|q| q.id).collect();
            if ids != QuestionId::ALL {
                return Err(CatalogError::QuestionSet { section: section.key });
            }
        }

        if self.company_sizes.is_empty() {
            return Err(CatalogError::EmptyOptions { list: "company_sizes" });
        }
        if self.roles.is_empty() {
            return Err(CatalogError::EmptyOptions { list: "roles" });
        }
        if self.industries.is_empty() {
            return Err(CatalogError::EmptyOptions { list: "industries" });
        }
        if !self
            .industries
            .iter()
            .any(|option| option.value == super::ContextAnswers::OTHER_INDUSTRY)
        {
            return Err(CatalogError::MissingOtherIndustry);
        }

        Ok(())
    }
}
