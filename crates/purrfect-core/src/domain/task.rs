//! Task Entity
//!
//! A to-do entry is identified only by its text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-authored to-do item (never empty, always trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    /// Build a task from raw input, rejecting blank text
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Handle for a completion that is waiting out its settle delay.
///
/// The id is captured when the completion is scheduled, so settling never
/// depends on where the task used to sit in the pending list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionTicket {
    pub id: u64,
    pub task: Task,
}
