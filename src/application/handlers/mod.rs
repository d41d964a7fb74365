//! Application query handlers.

pub mod advert;

pub use advert::{
    AdvertViewError, GetPreviewHandler, GetPreviewQuery, GetPreviewResult,
    GetSectionOverviewHandler, GetSectionOverviewQuery, GetSectionOverviewResult,
    GetSummaryHandler, GetSummaryQuery, GetSummaryResult,
};
