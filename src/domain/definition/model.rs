//! The immutable advert definition tree.
//!
//! Sections, pages, and questions describing what the advert builder wizard
//! contains. Deserialized once at startup from the schema JSON and shared
//! read-only for the life of the process; nothing in the engine mutates it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{resolve_single, LookupError, NodeKind, ResponseType};

// ════════════════════════════════════════════════════════════════════════════════
// Tree Nodes
// ════════════════════════════════════════════════════════════════════════════════

/// Root of the advert definition: the ordered sections of the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertDefinition {
    pub sections: Vec<DefinitionSection>,
}

/// One section of the wizard, holding an ordered run of pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionSection {
    pub id: String,
    pub title: String,
    pub pages: Vec<DefinitionPage>,
}

/// One page within a section, holding an ordered run of questions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionPage {
    pub id: String,
    pub title: String,
    pub questions: Vec<DefinitionQuestion>,
}

/// A single question and its rendering metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionQuestion {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_suffix_text: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub validation: QuestionValidation,
    pub response_type: ResponseType,
}

/// Validation rules attached to a question.
///
/// The builder write path enforces these; this engine only transports them
/// so the UI can render constraints and messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionValidation {
    #[serde(default)]
    pub mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greater_than: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_than: Option<i64>,
    #[serde(default)]
    pub url: bool,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub messages: HashMap<String, String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Lookups
// ════════════════════════════════════════════════════════════════════════════════

impl AdvertDefinition {
    /// Finds the section with the given id.
    ///
    /// Exactly one match is returned; zero matches is `NotFound` and two or
    /// more is `Ambiguous`.
    pub fn section(&self, id: &str) -> Result<&DefinitionSection, LookupError> {
        resolve_single(&self.sections, id, NodeKind::Section, |s| &s.id)
    }

    /// Checks the id-uniqueness invariant at every level of the tree.
    ///
    /// Run once after loading the schema: a duplicate id anywhere surfaces
    /// as `Ambiguous` here instead of at request time.
    pub fn validate(&self) -> Result<(), LookupError> {
        for section in &self.sections {
            self.section(&section.id)?;
            for page in &section.pages {
                section.page(&page.id)?;
                for question in &page.questions {
                    page.question(&question.id)?;
                }
            }
        }
        Ok(())
    }
}

impl DefinitionSection {
    /// Finds the page with the given id within this section.
    pub fn page(&self, id: &str) -> Result<&DefinitionPage, LookupError> {
        resolve_single(&self.pages, id, NodeKind::Page, |p| &p.id)
    }
}

impl DefinitionPage {
    /// Finds the question with the given id within this page.
    pub fn question(&self, id: &str) -> Result<&DefinitionQuestion, LookupError> {
        resolve_single(&self.questions, id, NodeKind::Question, |q| &q.id)
    }
}
