//! Editing session
//!
//! Edits never touch the document directly: each sentence being edited gets
//! a `Draft`, and only `commit` validates the draft and replaces the
//! committed sentence. Navigation and file output commit first, so a
//! sentence that fails validation keeps the cursor where it is.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use cobald_core::errors::{CorpusError, Result};
use cobald_core::ops::{DeleteOutcome, InsertOutcome};
use cobald_core::queries::find_first_unchecked;
use cobald_core::{apply, Command, Effect};
use cobald_core::{log_op_end, log_op_error, log_op_start};
use cobald_core::{
    Anchor, ConfirmHook, Cursor, Document, Field, Identifier, InsertKind, Sentence,
    ValidationScope, Validator, Vocabulary,
};
use cobald_core_types::SessionId;

use crate::draft::Draft;

/// What `commit` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// No draft existed for the sentence
    Unchanged,
    /// The draft replaced the committed sentence
    Committed { edits: usize },
}

fn not_found(sentence: impl Into<String>) -> CorpusError {
    CorpusError::SentenceNotFound {
        sentence: sentence.into(),
    }
}

/// One hosted document with its cursor and drafts
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    document: Document,
    cursor: Cursor,
    vocab: Arc<Vocabulary>,
    scope: ValidationScope,
    drafts: HashMap<String, Draft>,
}

impl Session {
    /// Start a session positioned on the first sentence
    pub fn new(document: Document, vocab: Arc<Vocabulary>) -> Self {
        Self {
            id: SessionId::new(),
            document,
            cursor: Cursor::default(),
            vocab,
            scope: ValidationScope::default(),
            drafts: HashMap::new(),
        }
    }

    /// Position the cursor; out-of-range requests fall back to 1
    pub fn with_cursor(mut self, requested: Option<usize>) -> Self {
        self.cursor = Cursor::resolve(requested, self.document.len());
        self
    }

    pub fn with_scope(mut self, scope: ValidationScope) -> Self {
        self.scope = scope;
        self
    }

    /// Load a corpus file (text or snapshot) into a new session
    ///
    /// # Errors
    /// Any error of `cobald_store::load_with_cursor`.
    pub fn open(path: &Path, vocab: Arc<Vocabulary>, requested: Option<usize>) -> Result<Self> {
        let loaded = cobald_store::load_with_cursor(path, requested)?;
        let mut session = Self::new(loaded.document, vocab);
        session.cursor = loaded.cursor;
        Ok(session)
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Committed document; drafts are not included
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn scope(&self) -> ValidationScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: ValidationScope) {
        self.scope = scope;
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Committed sentence at 1-based sequence number `n`
    ///
    /// # Errors
    /// `SentenceNotFound` if `n` is outside the document.
    pub fn sentence(&self, n: usize) -> Result<&Sentence> {
        self.document.get(n).ok_or_else(|| not_found(n.to_string()))
    }

    /// Sentence under the cursor, including uncommitted edits
    ///
    /// # Errors
    /// `SentenceNotFound` for an empty document.
    pub fn active_sentence(&self) -> Result<&Sentence> {
        let id = self.sentence(self.cursor.get())?.id();
        self.working_sentence(id)
    }

    /// Draft of a sentence if it has one, otherwise the committed sentence
    ///
    /// # Errors
    /// `SentenceNotFound` if no sentence has this id.
    pub fn working_sentence(&self, sent_id: &str) -> Result<&Sentence> {
        match self.drafts.get(sent_id) {
            Some(draft) => Ok(&draft.working),
            None => self.document.by_id(sent_id).ok_or_else(|| not_found(sent_id)),
        }
    }

    /// Ids of sentences whose draft differs from the committed version, in
    /// document order
    pub fn pending_drafts(&self) -> Vec<&str> {
        self.document
            .sentences()
            .iter()
            .filter_map(|s| self.drafts.get(s.id()).filter(|draft| draft.working != *s))
            .map(Draft::id)
            .collect()
    }

    pub fn find_first_unchecked(&self) -> Option<&str> {
        find_first_unchecked(&self.document)
    }

    // ===== Edits =====

    fn edit(&mut self, sent_id: &str, cmd: Command) -> Result<Effect> {
        let op = cmd.name();
        let base = self.working_sentence(sent_id)?.clone();
        let applied = apply(base, cmd)?;
        tracing::debug!(
            op,
            session_id = %self.id,
            sent_id,
            "draft updated"
        );

        match self.drafts.get_mut(sent_id) {
            Some(draft) => {
                draft.working = applied.sentence;
                draft.log.record(applied.entry);
            }
            None => {
                let mut draft = Draft::new(applied.sentence);
                draft.log.record(applied.entry);
                self.drafts.insert(sent_id.to_string(), draft);
            }
        }
        Ok(applied.effect)
    }

    /// Set one column of the token at position `token_index`
    ///
    /// # Errors
    /// `Validation` if the value cannot be stored in the column,
    /// `TokenIndexOutOfRange`, or `SentenceNotFound`.
    pub fn set_field(
        &mut self,
        sent_id: &str,
        token_index: usize,
        field: Field,
        value: &str,
    ) -> Result<()> {
        self.edit(
            sent_id,
            Command::SetField {
                token_index,
                field,
                value: value.to_string(),
            },
        )
        .map(|_| ())
    }

    /// Insert a blank token
    ///
    /// # Errors
    /// `Index` for a rejected anchor, or `SentenceNotFound`.
    pub fn insert_token(
        &mut self,
        sent_id: &str,
        anchor: Anchor,
        kind: InsertKind,
    ) -> Result<InsertOutcome> {
        match self.edit(sent_id, Command::InsertToken { anchor, kind })? {
            Effect::Inserted(outcome) => Ok(outcome),
            _ => Err(unexpected_effect("insert_token")),
        }
    }

    /// Delete a token; cleared references are listed in the outcome
    ///
    /// # Errors
    /// `Index` for a missing target or the last word, or `SentenceNotFound`.
    pub fn delete_token(&mut self, sent_id: &str, id: Identifier) -> Result<DeleteOutcome> {
        match self.edit(sent_id, Command::DeleteToken { id })? {
            Effect::Deleted(outcome) => Ok(outcome),
            _ => Err(unexpected_effect("delete_token")),
        }
    }

    /// Replace the reviewer comment
    ///
    /// # Errors
    /// `SentenceNotFound`.
    pub fn set_comment(&mut self, sent_id: &str, comment: &str) -> Result<()> {
        self.edit(
            sent_id,
            Command::SetComment {
                comment: comment.to_string(),
            },
        )
        .map(|_| ())
    }

    /// Replace the translation; line breaks become spaces and blank text
    /// clears it
    ///
    /// # Errors
    /// `SentenceNotFound`.
    pub fn set_translation(&mut self, sent_id: &str, translation: Option<&str>) -> Result<()> {
        let translation = translation
            .map(|t| t.replace(['\r', '\n'], " ").trim().to_string())
            .filter(|t| !t.is_empty());
        self.edit(sent_id, Command::SetTranslation { translation })
            .map(|_| ())
    }

    /// Mark a sentence reviewed; takes effect without a commit
    ///
    /// # Errors
    /// `SentenceNotFound`.
    pub fn set_checked(&mut self, sent_id: &str, checked: bool) -> Result<()> {
        let sentence = self
            .document
            .by_id_mut(sent_id)
            .ok_or_else(|| not_found(sent_id))?;
        sentence.checked = checked;
        if let Some(draft) = self.drafts.get_mut(sent_id) {
            draft.working.checked = checked;
        }
        tracing::debug!(
            op = "set_checked",
            session_id = %self.id,
            sent_id,
            checked,
            "checked flag updated"
        );
        Ok(())
    }

    /// Revert the latest draft edit; `false` if there was nothing to undo
    ///
    /// # Errors
    /// `SentenceNotFound`, or an entry that no longer applies.
    pub fn undo(&mut self, sent_id: &str) -> Result<bool> {
        self.ensure_exists(sent_id)?;
        match self.drafts.get_mut(sent_id) {
            Some(draft) => Ok(draft.log.undo(&mut draft.working)?.is_some()),
            None => Ok(false),
        }
    }

    /// Re-apply the latest undone edit; `false` if there was nothing to redo
    ///
    /// # Errors
    /// `SentenceNotFound`, or an entry that no longer applies.
    pub fn redo(&mut self, sent_id: &str) -> Result<bool> {
        self.ensure_exists(sent_id)?;
        match self.drafts.get_mut(sent_id) {
            Some(draft) => Ok(draft.log.redo(&mut draft.working)?.is_some()),
            None => Ok(false),
        }
    }

    /// Discard the draft of a sentence; `true` if one existed
    pub fn reset(&mut self, sent_id: &str) -> bool {
        let discarded = self.drafts.remove(sent_id).is_some();
        if discarded {
            tracing::debug!(op = "reset", session_id = %self.id, sent_id, "draft discarded");
        }
        discarded
    }

    fn ensure_exists(&self, sent_id: &str) -> Result<()> {
        self.document
            .by_id(sent_id)
            .map(|_| ())
            .ok_or_else(|| not_found(sent_id))
    }

    // ===== Commit =====

    /// Validate the draft of a sentence and make it the committed version
    ///
    /// All or nothing: on failure the document and the draft are unchanged.
    ///
    /// # Errors
    /// `Validation` naming the first failing field, or `SentenceNotFound`.
    pub fn commit(&mut self, sent_id: &str, hook: &dyn ConfirmHook) -> Result<CommitOutcome> {
        log_op_start!("commit", session_id = %self.id, sent_id = sent_id);
        let start = Instant::now();

        let result = self.commit_impl(sent_id, hook);

        match &result {
            Ok(outcome) => {
                log_op_end!(
                    "commit",
                    duration_ms = start.elapsed().as_millis() as u64,
                    session_id = %self.id,
                    sent_id = sent_id,
                    outcome = ?outcome
                );
            }
            Err(e) => {
                log_op_error!(
                    "commit",
                    e.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    session_id = %self.id,
                    sent_id = sent_id
                );
            }
        }
        result
    }

    fn commit_impl(&mut self, sent_id: &str, hook: &dyn ConfirmHook) -> Result<CommitOutcome> {
        self.ensure_exists(sent_id)?;
        let Some(draft) = self.drafts.get(sent_id) else {
            return Ok(CommitOutcome::Unchanged);
        };

        Validator::new(&self.vocab, self.scope).validate_sentence(&draft.working, hook)?;

        let Some(draft) = self.drafts.remove(sent_id) else {
            return Ok(CommitOutcome::Unchanged);
        };
        let edits = draft.log.entries().len();
        if draft.working.translation.is_some() {
            self.document.has_translations = true;
        }
        self.document.replace(draft.working)?;
        Ok(CommitOutcome::Committed { edits })
    }

    /// Commit every draft in document order, stopping at the first failure
    ///
    /// # Errors
    /// The first failing commit; earlier sentences stay committed.
    pub fn commit_all(&mut self, hook: &dyn ConfirmHook) -> Result<usize> {
        let ids: Vec<String> = self
            .document
            .sentences()
            .iter()
            .filter(|s| self.drafts.contains_key(s.id()))
            .map(|s| s.id().to_string())
            .collect();
        let mut committed = 0;
        for id in ids {
            if let CommitOutcome::Committed { .. } = self.commit(&id, hook)? {
                committed += 1;
            }
        }
        Ok(committed)
    }

    // ===== Navigation =====

    /// Commit the active sentence, then move to sentence `n`
    ///
    /// # Errors
    /// `SentenceNotFound` if `n` is outside the document; any commit error,
    /// in which case the cursor does not move.
    pub fn goto(&mut self, n: usize, hook: &dyn ConfirmHook) -> Result<Cursor> {
        if n < 1 || n > self.document.len() {
            return Err(not_found(n.to_string()));
        }
        let active = self.sentence(self.cursor.get())?.id().to_string();
        self.commit(&active, hook)?;
        self.cursor = Cursor::resolve(Some(n), self.document.len());
        Ok(self.cursor)
    }

    /// Move to the next sentence; stays on the last one
    ///
    /// # Errors
    /// Any commit error of the active sentence.
    pub fn next(&mut self, hook: &dyn ConfirmHook) -> Result<Cursor> {
        let target = (self.cursor.get() + 1).min(self.document.len());
        self.goto(target, hook)
    }

    /// Move to the previous sentence; stays on the first one
    ///
    /// # Errors
    /// Any commit error of the active sentence.
    pub fn prev(&mut self, hook: &dyn ConfirmHook) -> Result<Cursor> {
        let target = self.cursor.get().saturating_sub(1).max(1);
        self.goto(target, hook)
    }

    // ===== Output =====

    /// Commit all drafts and save a snapshot with the cursor
    ///
    /// # Errors
    /// Any commit error (nothing is written), or a store error.
    pub fn save(&mut self, path: &Path, hook: &dyn ConfirmHook) -> Result<()> {
        self.commit_all(hook)?;
        cobald_store::save(&self.document, self.cursor, path)
    }

    /// Commit all drafts and write canonical CoNLL-U text
    ///
    /// # Errors
    /// Any commit error (nothing is written), or a store error.
    pub fn export_canonical(&mut self, path: &Path, hook: &dyn ConfirmHook) -> Result<()> {
        self.commit_all(hook)?;
        cobald_store::export_canonical(&self.document, path)
    }

    /// Hand back the committed document, dropping uncommitted drafts
    pub fn into_document(self) -> Document {
        self.document
    }
}

fn unexpected_effect(op: &str) -> CorpusError {
    CorpusError::Internal {
        message: format!("{} returned no structural outcome", op),
    }
}
