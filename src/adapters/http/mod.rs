//! HTTP adapters (Axum).

pub mod advert;
