use serde::{Deserialize, Serialize};

use super::sentence::Sentence;
use crate::errors::{CorpusError, Result};

/// Translation language used when a corpus names none
pub const DEFAULT_TRANSLATION_LANGUAGE: &str = "en";

/// Ordered corpus of sentences addressed by 1-based sequence number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    sentences: Vec<Sentence>,

    /// Language code of the translation comments (`text_<lang>`)
    pub translation_language: String,

    /// Set once any sentence carries a translation
    pub has_translations: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            sentences: Vec::new(),
            translation_language: DEFAULT_TRANSLATION_LANGUAGE.to_string(),
            has_translations: false,
        }
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Sentence at 1-based sequence number `n`
    pub fn get(&self, n: usize) -> Option<&Sentence> {
        n.checked_sub(1).and_then(|i| self.sentences.get(i))
    }

    pub fn get_mut(&mut self, n: usize) -> Option<&mut Sentence> {
        n.checked_sub(1).and_then(move |i| self.sentences.get_mut(i))
    }

    /// 1-based sequence number of the sentence with this id
    pub fn sequence_of(&self, sent_id: &str) -> Option<usize> {
        self.sentences
            .iter()
            .position(|s| s.id() == sent_id)
            .map(|i| i + 1)
    }

    pub fn by_id(&self, sent_id: &str) -> Option<&Sentence> {
        self.sentences.iter().find(|s| s.id() == sent_id)
    }

    pub fn by_id_mut(&mut self, sent_id: &str) -> Option<&mut Sentence> {
        self.sentences.iter_mut().find(|s| s.id() == sent_id)
    }

    /// Append a sentence, returning its sequence number
    ///
    /// # Errors
    /// `DuplicateSentenceId` if a sentence with the same id exists.
    pub fn push(&mut self, sentence: Sentence) -> Result<usize> {
        if self.by_id(sentence.id()).is_some() {
            return Err(CorpusError::DuplicateSentenceId {
                sent_id: sentence.id().to_string(),
            });
        }
        self.sentences.push(sentence);
        Ok(self.sentences.len())
    }

    /// Replace the sentence with the same id wholesale
    ///
    /// # Errors
    /// `SentenceNotFound` if no sentence carries that id.
    pub fn replace(&mut self, sentence: Sentence) -> Result<()> {
        let slot = self
            .by_id_mut(sentence.id())
            .ok_or_else(|| CorpusError::SentenceNotFound {
                sentence: sentence.id().to_string(),
            })?;
        *slot = sentence;
        Ok(())
    }
}

/// Active sequence number, kept apart from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(usize);

impl Default for Cursor {
    fn default() -> Self {
        Cursor(1)
    }
}

impl Cursor {
    /// Requested position if it lies in `[1, len]`, otherwise 1
    pub fn resolve(requested: Option<usize>, len: usize) -> Cursor {
        match requested {
            Some(n) if n >= 1 && n <= len => Cursor(n),
            _ => Cursor(1),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_numbers_are_one_based() {
        let mut doc = Document::new();
        assert_eq!(doc.push(Sentence::new("a")).unwrap(), 1);
        assert_eq!(doc.push(Sentence::new("b")).unwrap(), 2);
        assert_eq!(doc.get(1).map(|s| s.id()), Some("a"));
        assert!(doc.get(0).is_none());
        assert!(doc.get(3).is_none());
        assert_eq!(doc.sequence_of("b"), Some(2));
    }

    #[test]
    fn test_duplicate_sentence_id_rejected() {
        let mut doc = Document::new();
        doc.push(Sentence::new("a")).unwrap();
        let err = doc.push(Sentence::new("a")).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateSentenceId { .. }));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_cursor_resolve_falls_back_to_first() {
        assert_eq!(Cursor::resolve(Some(2), 3).get(), 2);
        assert_eq!(Cursor::resolve(Some(4), 3).get(), 1);
        assert_eq!(Cursor::resolve(Some(0), 3).get(), 1);
        assert_eq!(Cursor::resolve(None, 3).get(), 1);
    }

    #[test]
    fn test_new_document_defaults_to_english() {
        let doc = Document::new();
        assert_eq!(doc.translation_language, "en");
        assert!(!doc.has_translations);
    }
}
