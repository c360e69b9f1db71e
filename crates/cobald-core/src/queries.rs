//! Read-only corpus queries

use crate::model::Document;

/// Id of the first sentence, in document order, not yet marked checked
pub fn find_first_unchecked(doc: &Document) -> Option<&str> {
    doc.sentences()
        .iter()
        .find(|s| !s.checked)
        .map(|s| s.id())
}

/// Sequence number of the first unchecked sentence
pub fn first_unchecked_position(doc: &Document) -> Option<usize> {
    doc.sentences()
        .iter()
        .position(|s| !s.checked)
        .map(|i| i + 1)
}

/// Number of sentences marked checked
pub fn checked_count(doc: &Document) -> usize {
    doc.sentences().iter().filter(|s| s.checked).count()
}
