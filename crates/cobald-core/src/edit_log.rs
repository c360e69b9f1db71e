//! Undo/redo history for one sentence
//!
//! Entries are plain data applied and reverted directly against a
//! `Sentence`; nothing here knows about any presentation layer.

use serde::{Deserialize, Serialize};

use crate::errors::{CorpusError, Result};
use crate::model::{Field, Sentence, Token};

/// One column change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEdit {
    pub sentence_id: String,
    pub token_index: usize,
    pub field: Field,
    pub old_value: String,
    pub new_value: String,
}

/// A reversible change to a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditEntry {
    Field(FieldEdit),
    /// Insert or delete; token sequences before and after the edit
    Structure {
        sentence_id: String,
        before: Vec<Token>,
        after: Vec<Token>,
    },
    Comment {
        sentence_id: String,
        old: String,
        new: String,
    },
    Translation {
        sentence_id: String,
        old: Option<String>,
        new: Option<String>,
    },
}

impl EditEntry {
    pub fn sentence_id(&self) -> &str {
        match self {
            EditEntry::Field(edit) => &edit.sentence_id,
            EditEntry::Structure { sentence_id, .. }
            | EditEntry::Comment { sentence_id, .. }
            | EditEntry::Translation { sentence_id, .. } => sentence_id,
        }
    }

    fn put(&self, sentence: &mut Sentence, forward: bool) -> Result<()> {
        if sentence.id() != self.sentence_id() {
            return Err(CorpusError::SentenceNotFound {
                sentence: self.sentence_id().to_string(),
            });
        }
        match self {
            EditEntry::Field(edit) => {
                let len = sentence.tokens.len();
                let token = sentence.tokens.get_mut(edit.token_index).ok_or_else(|| {
                    CorpusError::TokenIndexOutOfRange {
                        sent_id: edit.sentence_id.clone(),
                        index: edit.token_index,
                        len,
                    }
                })?;
                let value = if forward { &edit.new_value } else { &edit.old_value };
                token.restore_field_text(edit.field, value);
            }
            EditEntry::Structure { before, after, .. } => {
                sentence.tokens = if forward { after.clone() } else { before.clone() };
            }
            EditEntry::Comment { old, new, .. } => {
                sentence.comment = if forward { new.clone() } else { old.clone() };
            }
            EditEntry::Translation { old, new, .. } => {
                sentence.translation = if forward { new.clone() } else { old.clone() };
            }
        }
        Ok(())
    }

    /// Re-apply this change
    ///
    /// # Errors
    /// `SentenceNotFound` for an entry recorded on a different sentence;
    /// `TokenIndexOutOfRange` if the token no longer exists.
    pub fn apply_to(&self, sentence: &mut Sentence) -> Result<()> {
        self.put(sentence, true)
    }

    /// Undo this change
    ///
    /// # Errors
    /// Same conditions as [`EditEntry::apply_to`].
    pub fn revert_on(&self, sentence: &mut Sentence) -> Result<()> {
        self.put(sentence, false)
    }
}

/// Undo and redo stacks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditLog {
    undo: Vec<EditEntry>,
    redo: Vec<EditEntry>,
}

impl EditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an applied change; the redo history is discarded
    pub fn record(&mut self, entry: EditEntry) {
        self.undo.push(entry);
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Applied entries, oldest first
    pub fn entries(&self) -> &[EditEntry] {
        &self.undo
    }

    /// Revert the most recent change
    ///
    /// Returns `Ok(None)` when there is nothing to undo.
    ///
    /// # Errors
    /// The entry could not be reverted; it stays on the undo stack.
    pub fn undo(&mut self, sentence: &mut Sentence) -> Result<Option<EditEntry>> {
        let Some(entry) = self.undo.pop() else {
            return Ok(None);
        };
        if let Err(e) = entry.revert_on(sentence) {
            self.undo.push(entry);
            return Err(e);
        }
        self.redo.push(entry.clone());
        Ok(Some(entry))
    }

    /// Re-apply the most recently undone change
    ///
    /// # Errors
    /// The entry could not be applied; it stays on the redo stack.
    pub fn redo(&mut self, sentence: &mut Sentence) -> Result<Option<EditEntry>> {
        let Some(entry) = self.redo.pop() else {
            return Ok(None);
        };
        if let Err(e) = entry.apply_to(sentence) {
            self.redo.push(entry);
            return Err(e);
        }
        self.undo.push(entry.clone());
        Ok(Some(entry))
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
