//! Section overview view models.
//!
//! Drives the builder's task-list navigation and the publish gate.

use serde::Serialize;

use crate::domain::foundation::{PageStatus, SectionStatus};

/// The builder's section overview: every section and page of the schema
/// with its effective status, plus the aggregate publish gate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOverview {
    /// Name of the scheme this advert belongs to.
    pub scheme_name: String,
    /// The advert's display name.
    pub advert_name: String,
    /// True unless every section is completed.
    pub publish_disabled: bool,
    pub sections: Vec<OverviewSection>,
}

/// One schema section with its effective status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewSection {
    pub id: String,
    pub title: String,
    pub status: SectionStatus,
    pub pages: Vec<OverviewPage>,
}

/// One schema page with its effective status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewPage {
    pub id: String,
    pub title: String,
    pub status: PageStatus,
}
