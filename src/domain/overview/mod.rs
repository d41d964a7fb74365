//! Section overview projection: status reconciliation and publish gating.

mod builder;
mod view;

pub use builder::{publish_disabled, reconcile_sections};
pub use view::{OverviewPage, OverviewSection, SectionOverview};
