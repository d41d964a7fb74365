//! Response type of an advert builder question.

use serde::{Deserialize, Serialize};

/// What kind of answer a question expects.
///
/// Drives input widgets in the builder UI and type-aware rendering in the
/// summary view (currency compaction, composite dates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseType {
    ShortText,
    LongText,
    RichText,
    List,
    Integer,
    Currency,
    Date,
    DateTime,
}

impl ResponseType {
    /// Returns true if the answer renders through the currency formatter.
    pub fn is_currency(&self) -> bool {
        matches!(self, ResponseType::Currency)
    }
}
