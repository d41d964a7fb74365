//! Advert definition schema configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where the advert definition schema (and optional dev seed data) live.
#[derive(Debug, Clone, Deserialize)]
pub struct DefinitionConfig {
    /// Path to the advert definition schema JSON
    #[serde(default = "default_schema_path")]
    pub schema_path: String,

    /// Optional path to seed data for the in-memory store
    pub seed_path: Option<String>,
}

impl DefinitionConfig {
    /// Validate definition configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.schema_path.trim().is_empty() {
            return Err(ValidationError::EmptySchemaPath);
        }
        Ok(())
    }
}

impl Default for DefinitionConfig {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
            seed_path: None,
        }
    }
}

fn default_schema_path() -> String {
    "data/advert-definition.json".to_string()
}
