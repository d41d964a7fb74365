//! Completion status for a single advert builder page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of one page within a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PageStatus::NotStarted => "Not Started",
            PageStatus::InProgress => "In Progress",
            PageStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_started() {
        assert_eq!(PageStatus::default(), PageStatus::NotStarted);
    }

    #[test]
    fn serializes_to_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&PageStatus::NotStarted).unwrap(),
            "\"NOT_STARTED\""
        );
        assert_eq!(
            serde_json::to_string(&PageStatus::Completed).unwrap(),
            "\"COMPLETED\""
        );
    }
}
