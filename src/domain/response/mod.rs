//! The sparse per-advert response tree.

mod model;

pub use model::{AdvertResponse, PageResponse, QuestionResponse, SectionResponse};
