//! Summary view models.
//!
//! A full reflection of the definition tree where every question carries
//! its current, display-ready answer.

use serde::Serialize;

use crate::domain::foundation::{AdvertId, AdvertStatus, ResponseType};

/// The admin-facing summary of a whole advert.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertSummary {
    pub id: AdvertId,
    pub advert_name: String,
    pub status: AdvertStatus,
    pub sections: Vec<SummarySection>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarySection {
    pub id: String,
    pub title: String,
    pub pages: Vec<SummaryPage>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPage {
    pub id: String,
    pub title: String,
    pub questions: Vec<SummaryQuestion>,
}

/// One question with its rendered answer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuestion {
    pub id: String,
    /// Display label, taken from the definition's summary title.
    pub title: String,
    /// Trailing label text shown after the answer, if the schema defines one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix_text: Option<String>,
    pub response_type: ResponseType,
    /// Single-valued answer, formatted per the response type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Multi-valued answer, passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_response: Option<Vec<String>>,
}
