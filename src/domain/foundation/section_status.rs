//! Completion status for an advert builder section.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of a whole section of the advert builder.
///
/// `Changed` marks a section whose answers were edited after the advert
/// was published; it still blocks re-publication like any non-completed
/// status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Changed,
}

impl SectionStatus {
    /// Returns true if the section no longer blocks publication.
    pub fn is_completed(&self) -> bool {
        matches!(self, SectionStatus::Completed)
    }
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SectionStatus::NotStarted => "Not Started",
            SectionStatus::InProgress => "In Progress",
            SectionStatus::Completed => "Completed",
            SectionStatus::Changed => "Changed",
        };
        write!(f, "{}", s)
    }
}
