//! HTTP adapter for the advert view endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{AdvertApiError, AdvertAppState};
pub use routes::advert_routes;
