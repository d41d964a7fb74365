//! Summary projection: the definition tree with rendered answers.

mod builder;
mod view;

pub use builder::build_summary;
pub use view::{AdvertSummary, SummaryPage, SummaryQuestion, SummarySection};
