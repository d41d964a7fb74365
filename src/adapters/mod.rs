//! Adapters - concrete implementations at the edges of the hexagon.

pub mod http;
pub mod memory;
