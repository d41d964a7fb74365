//! GetPreviewHandler - Query handler for the public advert preview.

use std::sync::Arc;

use crate::domain::foundation::AdvertId;
use crate::domain::preview::{build_preview, AdvertPreview};
use crate::ports::AdvertReader;

use super::AdvertViewError;

/// Query to get the public preview for one advert.
#[derive(Debug, Clone)]
pub struct GetPreviewQuery {
    pub advert_id: AdvertId,
}

/// Result of a successful preview query.
pub type GetPreviewResult = AdvertPreview;

/// Handler for the preview query.
pub struct GetPreviewHandler {
    advert_reader: Arc<dyn AdvertReader>,
}

impl GetPreviewHandler {
    pub fn new(advert_reader: Arc<dyn AdvertReader>) -> Self {
        Self { advert_reader }
    }

    pub async fn handle(
        &self,
        query: GetPreviewQuery,
    ) -> Result<GetPreviewResult, AdvertViewError> {
        let advert = self.advert_reader.get_advert(query.advert_id).await?;
        let preview = build_preview(&advert.name, advert.response.as_ref())?;
        Ok(preview)
    }
}
