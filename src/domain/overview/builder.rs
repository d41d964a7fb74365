//! Status reconciliation between the definition and response trees.
//!
//! The definition is authoritative for which sections and pages exist and
//! in what order; the response only contributes statuses. A schema node
//! with no matching response node is not-started.

use crate::domain::definition::AdvertDefinition;
use crate::domain::foundation::{LookupError, PageStatus, SectionStatus};
use crate::domain::response::AdvertResponse;

use super::view::{OverviewPage, OverviewSection};

/// Derives the effective status of every schema section and page.
///
/// Ambiguous ids in the response tree are integrity defects and error out;
/// absent nodes default to not-started.
pub fn reconcile_sections(
    definition: &AdvertDefinition,
    response: Option<&AdvertResponse>,
) -> Result<Vec<OverviewSection>, LookupError> {
    definition
        .sections
        .iter()
        .map(|section| {
            let section_response = match response {
                Some(response) => response.find_section(&section.id)?,
                None => None,
            };

            let status = section_response
                .map(|r| r.status)
                .unwrap_or(SectionStatus::NotStarted);

            let pages = section
                .pages
                .iter()
                .map(|page| {
                    let page_status = match section_response {
                        Some(section_response) => section_response
                            .find_page(&page.id)?
                            .map(|r| r.status)
                            .unwrap_or(PageStatus::NotStarted),
                        None => PageStatus::NotStarted,
                    };
                    Ok(OverviewPage {
                        id: page.id.clone(),
                        title: page.title.clone(),
                        status: page_status,
                    })
                })
                .collect::<Result<Vec<_>, LookupError>>()?;

            Ok(OverviewSection {
                id: section.id.clone(),
                title: section.title.clone(),
                status,
                pages,
            })
        })
        .collect()
}

/// The publish gate: disabled until at least one section exists and every
/// section is completed.
pub fn publish_disabled(sections: &[OverviewSection]) -> bool {
    sections.is_empty() || !sections.iter().all(|s| s.status.is_completed())
}
