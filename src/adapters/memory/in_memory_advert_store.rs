//! In-memory advert and scheme store.
//!
//! Backs the dev binary (seeded from a JSON file) and the integration
//! tests. Not a persistence layer: the production deployment points the
//! ports at the real stores.

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::RwLock;
use thiserror::Error;

use crate::domain::foundation::{AdvertId, AdvertStatus, SchemeId};
use crate::domain::response::AdvertResponse;
use crate::ports::{
    AdvertReader, AdvertReaderError, AdvertRecord, SchemeReader, SchemeReaderError, SchemeRecord,
};

/// In-memory implementation of both reader ports.
///
/// # Panics
///
/// Methods panic if an internal lock is poisoned. Acceptable for the dev
/// binary and tests; the real stores do not share this adapter.
#[derive(Default)]
pub struct InMemoryAdvertStore {
    adverts: RwLock<HashMap<AdvertId, AdvertRecord>>,
    schemes: RwLock<HashMap<SchemeId, SchemeRecord>>,
    denied: RwLock<HashSet<AdvertId>>,
}

impl InMemoryAdvertStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store populated from a seed JSON file.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let seed: SeedData = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        let store = Self::new();
        for scheme in seed.schemes {
            store.insert_scheme(SchemeRecord {
                id: scheme.id,
                name: scheme.name,
            });
        }
        for advert in seed.adverts {
            store.insert_advert(AdvertRecord {
                id: advert.id,
                name: advert.name,
                status: advert.status,
                response: advert.response,
            });
        }

        tracing::info!(
            adverts = store.adverts.read().expect("adverts lock poisoned").len(),
            schemes = store.schemes.read().expect("schemes lock poisoned").len(),
            "in-memory advert store seeded"
        );
        Ok(store)
    }

    /// Adds or replaces an advert.
    pub fn insert_advert(&self, record: AdvertRecord) {
        self.adverts
            .write()
            .expect("adverts lock poisoned")
            .insert(record.id, record);
    }

    /// Adds or replaces a scheme.
    pub fn insert_scheme(&self, record: SchemeRecord) {
        self.schemes
            .write()
            .expect("schemes lock poisoned")
            .insert(record.id, record);
    }

    /// Marks an advert as access-denied for the caller (test helper).
    pub fn deny_access(&self, advert_id: AdvertId) {
        self.denied
            .write()
            .expect("denied lock poisoned")
            .insert(advert_id);
    }
}

#[async_trait]
impl AdvertReader for InMemoryAdvertStore {
    async fn get_advert(&self, advert_id: AdvertId) -> Result<AdvertRecord, AdvertReaderError> {
        if self
            .denied
            .read()
            .expect("denied lock poisoned")
            .contains(&advert_id)
        {
            return Err(AdvertReaderError::AccessDenied);
        }
        self.adverts
            .read()
            .expect("adverts lock poisoned")
            .get(&advert_id)
            .cloned()
            .ok_or(AdvertReaderError::NotFound(advert_id))
    }
}

#[async_trait]
impl SchemeReader for InMemoryAdvertStore {
    async fn get_scheme(&self, scheme_id: SchemeId) -> Result<SchemeRecord, SchemeReaderError> {
        self.schemes
            .read()
            .expect("schemes lock poisoned")
            .get(&scheme_id)
            .cloned()
            .ok_or(SchemeReaderError::NotFound(scheme_id))
    }
}

/// Errors that can occur while reading the seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedData {
    #[serde(default)]
    schemes: Vec<SeedScheme>,
    #[serde(default)]
    adverts: Vec<SeedAdvert>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedScheme {
    id: SchemeId,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedAdvert {
    id: AdvertId,
    name: String,
    #[serde(default)]
    status: AdvertStatus,
    #[serde(default)]
    response: Option<AdvertResponse>,
}
