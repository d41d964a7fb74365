//! In-memory adapters for development and tests.

mod in_memory_advert_store;

pub use in_memory_advert_store::{InMemoryAdvertStore, SeedError};
