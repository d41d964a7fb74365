//! Pure rendering helpers shared by the view builders.

mod currency;
mod date;

pub use currency::{format_compact_pounds, format_optional_pounds};
pub use date::assemble_date_time;
