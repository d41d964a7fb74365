//! Advert view query handlers.
//!
//! Read-only handlers that fetch the advert aggregate (and scheme label)
//! through the ports and run the domain view builders.

mod get_preview;
mod get_section_overview;
mod get_summary;

pub use get_preview::{GetPreviewHandler, GetPreviewQuery, GetPreviewResult};
pub use get_section_overview::{
    GetSectionOverviewHandler, GetSectionOverviewQuery, GetSectionOverviewResult,
};
pub use get_summary::{GetSummaryHandler, GetSummaryQuery, GetSummaryResult};

use crate::domain::foundation::{AdvertId, LookupError, SchemeId};
use crate::ports::{AdvertReaderError, SchemeReaderError};

/// Errors surfaced by the advert view handlers.
#[derive(Debug, thiserror::Error)]
pub enum AdvertViewError {
    #[error("Advert not found: {0}")]
    AdvertNotFound(AdvertId),

    #[error("Scheme not found: {0}")]
    SchemeNotFound(SchemeId),

    #[error("Access to advert denied")]
    AccessDenied,

    /// Duplicate ids in the definition or response tree. A data defect,
    /// never a normal runtime condition.
    #[error("Advert data integrity error: {0}")]
    Integrity(LookupError),

    #[error("Store error: {0}")]
    Storage(String),
}

impl From<LookupError> for AdvertViewError {
    fn from(err: LookupError) -> Self {
        if err.is_ambiguous() {
            tracing::error!(error = %err, "ambiguous id in advert data");
        }
        AdvertViewError::Integrity(err)
    }
}

impl From<AdvertReaderError> for AdvertViewError {
    fn from(err: AdvertReaderError) -> Self {
        match err {
            AdvertReaderError::NotFound(id) => AdvertViewError::AdvertNotFound(id),
            AdvertReaderError::AccessDenied => AdvertViewError::AccessDenied,
            AdvertReaderError::Storage(msg) => AdvertViewError::Storage(msg),
        }
    }
}

impl From<SchemeReaderError> for AdvertViewError {
    fn from(err: SchemeReaderError) -> Self {
        match err {
            SchemeReaderError::NotFound(id) => AdvertViewError::SchemeNotFound(id),
            SchemeReaderError::Storage(msg) => AdvertViewError::Storage(msg),
        }
    }
}
