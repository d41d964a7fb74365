//! Public preview view models.

use serde::Serialize;

/// What applicants will see once the advert goes live: the headline
/// fields plus the six content tabs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertPreview {
    pub advert_name: String,
    /// Plain-text strapline shown under the advert name.
    pub short_description: String,
    /// Formatted opening timestamp, empty until answered.
    pub opening_date: String,
    /// Formatted closing timestamp, empty until answered.
    pub closing_date: String,
    pub tabs: Vec<PreviewTab>,
}

/// One content tab of the public advert page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewTab {
    pub name: String,
    /// Rich-text body, empty until answered.
    pub content: String,
}
