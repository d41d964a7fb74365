//! Read-only port for advert aggregates.

use async_trait::async_trait;

use crate::domain::foundation::{AdvertId, AdvertStatus};
use crate::domain::response::AdvertResponse;

/// The advert aggregate as the store hands it to the engine.
#[derive(Debug, Clone)]
pub struct AdvertRecord {
    pub id: AdvertId,
    pub name: String,
    pub status: AdvertStatus,
    /// Absent until the admin answers the first question.
    pub response: Option<AdvertResponse>,
}

/// Read-only port over the advert store.
#[async_trait]
pub trait AdvertReader: Send + Sync {
    /// Fetches one advert aggregate by id.
    async fn get_advert(&self, advert_id: AdvertId) -> Result<AdvertRecord, AdvertReaderError>;
}

/// Errors the advert store can surface.
#[derive(Debug, thiserror::Error)]
pub enum AdvertReaderError {
    #[error("Advert not found: {0}")]
    NotFound(AdvertId),

    /// Propagated to the caller untouched; the engine never interprets it.
    #[error("Access to advert denied")]
    AccessDenied,

    #[error("Advert store error: {0}")]
    Storage(String),
}
