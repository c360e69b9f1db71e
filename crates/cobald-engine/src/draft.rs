//! Uncommitted working copy of one sentence

use cobald_core::{EditLog, Sentence};

/// Edited copy of a sentence plus its undo/redo history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub working: Sentence,
    pub log: EditLog,
}

impl Draft {
    pub fn new(working: Sentence) -> Self {
        Self {
            working,
            log: EditLog::new(),
        }
    }

    pub fn id(&self) -> &str {
        self.working.id()
    }
}
