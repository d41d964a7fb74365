//! The immutable advert definition schema and its loader.

mod loader;
mod model;

pub use loader::DefinitionLoadError;
pub use model::{
    AdvertDefinition, DefinitionPage, DefinitionQuestion, DefinitionSection, QuestionValidation,
};
