//! GetSectionOverviewHandler - Query handler for the builder's task list.
//!
//! Reconciles the definition tree with the advert's responses and labels
//! the result with the owning scheme's name.

use std::sync::Arc;

use crate::domain::definition::AdvertDefinition;
use crate::domain::foundation::{AdvertId, SchemeId};
use crate::domain::overview::{publish_disabled, reconcile_sections, SectionOverview};
use crate::ports::{AdvertReader, SchemeReader};

use super::AdvertViewError;

/// Query to get the section overview for one advert.
#[derive(Debug, Clone)]
pub struct GetSectionOverviewQuery {
    pub scheme_id: SchemeId,
    pub advert_id: AdvertId,
}

/// Result of a successful section overview query.
pub type GetSectionOverviewResult = SectionOverview;

/// Handler for the section overview query.
pub struct GetSectionOverviewHandler {
    advert_reader: Arc<dyn AdvertReader>,
    scheme_reader: Arc<dyn SchemeReader>,
    definition: Arc<AdvertDefinition>,
}

impl GetSectionOverviewHandler {
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
        query: GetSectionOverviewQuery,
    ) -> Result<GetSectionOverviewResult, AdvertViewError> {
        let scheme = self.scheme_reader.get_scheme(query.scheme_id).await?;
        let advert = self.advert_reader.get_advert(query.advert_id).await?;

        let sections = reconcile_sections(&self.definition, advert.response.as_ref())?;

        Ok(SectionOverview {
            scheme_name: scheme.name,
            advert_name: advert.name,
            publish_disabled: publish_disabled(&sections),
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::definition::{DefinitionPage, DefinitionSection};
    use crate::domain::foundation::{AdvertStatus, SectionStatus};
    use crate::domain::response::{AdvertResponse, SectionResponse};
    use crate::ports::{AdvertReaderError, AdvertRecord, SchemeReaderError, SchemeRecord};
    use async_trait::async_trait;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementations
    // ─────────────────────────────────────────────────────────────────────

    struct MockAdvertReader {
        record: Option<AdvertRecord>,
        deny: bool,
    }

    #[async_trait]
    impl AdvertReader for MockAdvertReader {
        async fn get_advert(
            &self,
            advert_id: AdvertId,
        ) -> Result<AdvertRecord, AdvertReaderError> {
            if self.deny {
                return Err(AdvertReaderError::AccessDenied);
            }
            self.record
                .clone()
                .ok_or(AdvertReaderError::NotFound(advert_id))
        }
    }

    struct MockSchemeReader {
        record: Option<SchemeRecord>,
    }

    #[async_trait]
    impl SchemeReader for MockSchemeReader {
        async fn get_scheme(
            &self,
            scheme_id: SchemeId,
        ) -> Result<SchemeRecord, SchemeReaderError> {
            self.record
                .clone()
                .ok_or(SchemeReaderError::NotFound(scheme_id))
        }
    }

    fn definition() -> Arc<AdvertDefinition> {
        Arc::new(AdvertDefinition {
            sections: vec![DefinitionSection {
                id: "grantDetails".to_string(),
                title: "Grant details".to_string(),
                pages: vec![DefinitionPage {
                    id: "1".to_string(),
                    title: "Name".to_string(),
                    questions: vec![],
                }],
            }],
        })
    }

    fn scheme() -> SchemeRecord {
        SchemeRecord {
            id: SchemeId::new(),
            name: "Woodland Scheme".to_string(),
        }
    }

    fn advert(response: Option<AdvertResponse>) -> AdvertRecord {
        AdvertRecord {
            id: AdvertId::new(),
            name: "Woodland Advert".to_string(),
            status: AdvertStatus::Draft,
            response,
        }
    }

    fn handler(
        advert: Option<AdvertRecord>,
        scheme: Option<SchemeRecord>,
        deny: bool,
    ) -> GetSectionOverviewHandler {
        GetSectionOverviewHandler::new(
            Arc::new(MockAdvertReader {
                record: advert,
                deny,
            }),
            Arc::new(MockSchemeReader { record: scheme }),
            definition(),
        )
    }

    fn query() -> GetSectionOverviewQuery {
        GetSectionOverviewQuery {
            scheme_id: SchemeId::new(),
            advert_id: AdvertId::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn labels_overview_with_scheme_and_advert_names() {
        let handler = handler(Some(advert(None)), Some(scheme()), false);

        let overview = handler.handle(query()).await.unwrap();

        assert_eq!(overview.scheme_name, "Woodland Scheme");
        assert_eq!(overview.advert_name, "Woodland Advert");
        assert_eq!(overview.sections.len(), 1);
        assert_eq!(overview.sections[0].status, SectionStatus::NotStarted);
        assert!(overview.publish_disabled);
    }

    #[tokio::test]
    async fn completed_sections_enable_publishing() {
        let response = AdvertResponse {
            sections: vec![SectionResponse {
                id: "grantDetails".to_string(),
                status: SectionStatus::Completed,
                pages: vec![],
            }],
        };
        let handler = handler(Some(advert(Some(response))), Some(scheme()), false);

        let overview = handler.handle(query()).await.unwrap();

        assert!(!overview.publish_disabled);
    }

    #[tokio::test]
    async fn missing_advert_propagates_not_found() {
        let handler = handler(None, Some(scheme()), false);

        let result = handler.handle(query()).await;
        assert!(matches!(
            result.unwrap_err(),
            AdvertViewError::AdvertNotFound(_)
        ));
    }

    #[tokio::test]
    async fn missing_scheme_propagates_not_found() {
        let handler = handler(Some(advert(None)), None, false);

        let result = handler.handle(query()).await;
        assert!(matches!(
            result.unwrap_err(),
            AdvertViewError::SchemeNotFound(_)
        ));
    }

    #[tokio::test]
    async fn access_denial_propagates_untouched() {
        let handler = handler(Some(advert(None)), Some(scheme()), true);

        let result = handler.handle(query()).await;
        assert!(matches!(result.unwrap_err(), AdvertViewError::AccessDenied));
    }

    #[tokio::test]
    async fn duplicate_response_ids_surface_as_integrity_errors() {
        let response = AdvertResponse {
            sections: vec![
                SectionResponse {
                    id: "grantDetails".to_string(),
                    status: SectionStatus::Completed,
                    pages: vec![],
                },
                SectionResponse {
                    id: "grantDetails".to_string(),
                    status: SectionStatus::Completed,
                    pages: vec![],
                },
            ],
        };
        let handler = handler(Some(advert(Some(response))), Some(scheme()), false);

        let result = handler.handle(query()).await;
        assert!(matches!(
            result.unwrap_err(),
            AdvertViewError::Integrity(_)
        ));
    }
}
