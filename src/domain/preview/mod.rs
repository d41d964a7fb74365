//! Public preview projection built from well-known questions.

mod builder;
mod view;

pub use builder::build_preview;
pub use view::{AdvertPreview, PreviewTab};
