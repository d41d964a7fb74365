//! GetSummaryHandler - Query handler for the advert summary view.

use std::sync::Arc;

use crate::domain::definition::AdvertDefinition;
use crate::domain::foundation::{AdvertId, SchemeId};
use crate::domain::summary::{build_summary, AdvertSummary};
use crate::ports::{AdvertReader, SchemeReader};

use super::AdvertViewError;

/// Query to get the summary for one advert.
#[derive(Debug, Clone)]
pub struct GetSummaryQuery {
    pub scheme_id: SchemeId,
    pub advert_id: AdvertId,
}

/// Result of a successful summary query.
pub type GetSummaryResult = AdvertSummary;

/// Handler for the summary query.
///
/// The scheme is resolved first so a bad scheme id fails the same way it
/// does for the overview, even though the summary body is advert-only.
pub struct GetSummaryHandler {
    advert_reader: Arc<dyn AdvertReader>,
    scheme_reader: Arc<dyn SchemeReader>,
    definition: Arc<AdvertDefinition>,
}

impl GetSummaryHandler {
    pub fn new(
        advert_reader: Arc<dyn AdvertReader>,
        scheme_reader: Arc<dyn SchemeReader>,
        definition: Arc<AdvertDefinition>,
    ) -> Self {
        Self {
            advert_reader,
            scheme_reader,
            definition,
        }
    }

    pub async fn handle(
        &self,
        query: GetSummaryQuery,
    ) -> Result<GetSummaryResult, AdvertViewError> {
        self.scheme_reader.get_scheme(query.scheme_id).await?;
        let advert = self.advert_reader.get_advert(query.advert_id).await?;

        let summary = build_summary(
            &self.definition,
            advert.id,
            &advert.name,
            advert.status,
            advert.response.as_ref(),
        )?;

        Ok(summary)
    }
}
