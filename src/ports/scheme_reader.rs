//! Read-only port for grant scheme labels.

use async_trait::async_trait;

use crate::domain::foundation::SchemeId;

/// The slice of a scheme the engine needs: its display name.
#[derive(Debug, Clone)]
pub struct SchemeRecord {
    pub id: SchemeId,
    pub name: String,
}

/// Read-only port over the scheme store.
#[async_trait]
pub trait SchemeReader: Send + Sync {
    /// Fetches one scheme by id.
    async fn get_scheme(&self, scheme_id: SchemeId) -> Result<SchemeRecord, SchemeReaderError>;
}

/// Errors the scheme store can surface.
#[derive(Debug, thiserror::Error)]
pub enum SchemeReaderError {
    #[error("Scheme not found: {0}")]
    NotFound(SchemeId),

    #[error("Scheme store error: {0}")]
    Storage(String),
}
