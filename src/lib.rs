//! Advert Builder - Grants Platform Administrative Backend
//!
//! This crate implements the grant advert builder engine: merging the
//! immutable advert definition with per-advert responses and rendering
//! the section overview, summary, and public preview projections.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
