//! The sparse per-advert response tree.
//!
//! Mirrors the definition shape but only contains nodes the admin has
//! actually touched. A node absent here reads as not-started with no answer.
//! The engine treats the whole tree as read-only; mutation happens in the
//! advert editing write path.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    resolve_optional, resolve_single, LookupError, NodeKind, PageStatus, SectionStatus,
};

// ════════════════════════════════════════════════════════════════════════════════
// Tree Nodes
// ════════════════════════════════════════════════════════════════════════════════

/// Root of an advert's answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertResponse {
    pub sections: Vec<SectionResponse>,
}

/// Answers and completion status for one section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponse {
    pub id: String,
    pub status: SectionStatus,
    pub pages: Vec<PageResponse>,
}

/// Answers and completion status for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub id: String,
    pub status: PageStatus,
    pub questions: Vec<QuestionResponse>,
}

/// The admin's answer to a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: String,
    /// Whether the admin has viewed this question's page.
    #[serde(default)]
    pub seen: bool,
    /// Single-valued answer (text, numbers, currency amounts).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Multi-valued answer (lists, rich-text bodies, date components).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_response: Option<Vec<String>>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Lookups
// ════════════════════════════════════════════════════════════════════════════════

impl AdvertResponse {
    /// Finds the section response with the given id.
    pub fn section(&self, id: &str) -> Result<&SectionResponse, LookupError> {
        resolve_single(&self.sections, id, NodeKind::Section, |s| &s.id)
    }

    /// Finds the section response with the given id, where absence is a
    /// normal outcome. Ambiguity still errors.
    pub fn find_section(&self, id: &str) -> Result<Option<&SectionResponse>, LookupError> {
        resolve_optional(&self.sections, id, NodeKind::Section, |s| &s.id)
    }
}

impl SectionResponse {
    /// Finds the page response with the given id within this section.
    pub fn page(&self, id: &str) -> Result<&PageResponse, LookupError> {
        resolve_single(&self.pages, id, NodeKind::Page, |p| &p.id)
    }

    /// Finds the page response with the given id, tolerating absence.
    pub fn find_page(&self, id: &str) -> Result<Option<&PageResponse>, LookupError> {
        resolve_optional(&self.pages, id, NodeKind::Page, |p| &p.id)
    }
}

impl PageResponse {
    /// Finds the question response with the given id within this page.
    pub fn question(&self, id: &str) -> Result<&QuestionResponse, LookupError> {
        resolve_single(&self.questions, id, NodeKind::Question, |q| &q.id)
    }

    /// Finds the question response with the given id, tolerating absence.
    pub fn find_question(&self, id: &str) -> Result<Option<&QuestionResponse>, LookupError> {
        resolve_optional(&self.questions, id, NodeKind::Question, |q| &q.id)
    }
}
