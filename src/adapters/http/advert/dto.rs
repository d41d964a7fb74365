//! HTTP DTOs for advert view endpoints.
//!
//! All three endpoints are read-only and the domain view models are already
//! designed for serialization, so we re-export them directly.

pub use crate::domain::overview::{OverviewPage, OverviewSection, SectionOverview};
pub use crate::domain::preview::{AdvertPreview, PreviewTab};
pub use crate::domain::summary::{AdvertSummary, SummaryPage, SummaryQuestion, SummarySection};

use serde::Serialize;

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
