//! Lifecycle status of a grant advert.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an advert sits in its publication lifecycle.
///
/// The builder engine only transports this label; transitions happen in
/// the advert write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdvertStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
    Unscheduled,
    Unpublished,
}

impl fmt::Display for AdvertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdvertStatus::Draft => "Draft",
            AdvertStatus::Scheduled => "Scheduled",
            AdvertStatus::Published => "Published",
            AdvertStatus::Unscheduled => "Unscheduled",
            AdvertStatus::Unpublished => "Unpublished",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_draft() {
        assert_eq!(AdvertStatus::default(), AdvertStatus::Draft);
    }

    #[test]
    fn serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&AdvertStatus::Draft).unwrap(),
            "\"DRAFT\""
        );
        assert_eq!(
            serde_json::to_string(&AdvertStatus::Unpublished).unwrap(),
            "\"UNPUBLISHED\""
        );
    }
}
