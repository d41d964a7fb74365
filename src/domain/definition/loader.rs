//! Loads the advert definition schema from disk at startup.

use std::path::Path;
use thiserror::Error;

use super::AdvertDefinition;
use crate::domain::foundation::LookupError;

/// Errors that can occur while loading the definition schema.
#[derive(Debug, Error)]
pub enum DefinitionLoadError {
    #[error("Failed to read definition schema '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse definition schema '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Definition schema '{path}' violates id uniqueness: {source}")]
    Integrity {
        path: String,
        #[source]
        source: LookupError,
    },
}

impl AdvertDefinition {
    /// Reads, parses, and validates the schema file at `path`.
    ///
    /// The returned definition is ready to be wrapped in an `Arc` and shared
    /// across request handlers.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionLoadError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| DefinitionLoadError::Io {
            path: display.clone(),
            source,
        })?;
        let definition: AdvertDefinition =
            serde_json::from_str(&raw).map_err(|source| DefinitionLoadError::Parse {
                path: display.clone(),
                source,
            })?;
        definition
            .validate()
            .map_err(|source| DefinitionLoadError::Integrity {
                path: display,
                source,
            })?;

        tracing::info!(
            sections = definition.sections.len(),
            "advert definition schema loaded"
        );
        Ok(definition)
    }
}
