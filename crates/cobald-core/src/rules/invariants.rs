use std::collections::HashSet;
use std::fmt;

use crate::model::{Deps, Document, Governor, Head, Identifier, Sentence, UNSET};
use crate::vocab::{Vocabulary, VocabularySet};

/// Find identifiers carried by more than one token
pub fn find_duplicate_ids(sentence: &Sentence) -> Vec<Identifier> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for token in &sentence.tokens {
        if !seen.insert(token.id) && !duplicates.contains(&token.id) {
            duplicates.push(token.id);
        }
    }
    duplicates
}

/// Find tokens that do not sort after their predecessor
pub fn find_out_of_order(sentence: &Sentence) -> Vec<Identifier> {
    sentence
        .tokens
        .windows(2)
        .filter(|pair| pair[1].id < pair[0].id)
        .map(|pair| pair[1].id)
        .collect()
}

/// Find ranges whose bounds are not both words of the sentence, and empty
/// nodes attached past the last word
pub fn find_malformed_spans(sentence: &Sentence) -> Vec<Identifier> {
    let words: HashSet<u32> = sentence
        .tokens
        .iter()
        .filter_map(|t| t.id.as_integer())
        .collect();
    let max = sentence.max_integer_id();

    sentence
        .tokens
        .iter()
        .filter(|t| match t.id {
            Identifier::Range { low, high } => !words.contains(&low) || !words.contains(&high),
            Identifier::Decimal { base, .. } => base > max,
            Identifier::Integer(_) => false,
        })
        .map(|t| t.id)
        .collect()
}

/// Find heads that do not point at a word of the sentence
///
/// Returns list of (token_id, head text) tuples; malformed head text is
/// included.
pub fn find_dangling_heads(sentence: &Sentence) -> Vec<(Identifier, String)> {
    let ids: HashSet<Identifier> = sentence.tokens.iter().map(|t| t.id).collect();
    sentence
        .tokens
        .iter()
        .filter(|t| match &t.head {
            Head::Token(n) => !ids.contains(&Identifier::Integer(*n)),
            Head::Malformed(_) => true,
            Head::Unset | Head::Root => false,
        })
        .map(|t| (t.id, t.head.to_string()))
        .collect()
}

/// Find enhanced dependencies whose governor is missing from the sentence
///
/// Returns list of (token_id, entry text) tuples; a malformed DEPS column is
/// reported whole.
pub fn find_dangling_deps(sentence: &Sentence) -> Vec<(Identifier, String)> {
    let ids: HashSet<Identifier> = sentence.tokens.iter().map(|t| t.id).collect();
    let mut dangling = Vec::new();
    for token in &sentence.tokens {
        match &token.deps {
            Deps::List(entries) => {
                for entry in entries {
                    if let Governor::Node(id) = entry.governor {
                        if !ids.contains(&id) {
                            dangling.push((token.id, entry.to_string()));
                        }
                    }
                }
            }
            Deps::Malformed(text) => dangling.push((token.id, text.clone())),
            Deps::Unset => {}
        }
    }
    dangling
}

/// Find coarse tags outside the UPOS vocabulary (range lines and `_` skipped)
pub fn find_unknown_upos(sentence: &Sentence, vocab: &Vocabulary) -> Vec<(Identifier, String)> {
    sentence
        .tokens
        .iter()
        .filter(|t| !t.id.is_range() && t.upos != UNSET)
        .filter(|t| !vocab.contains(VocabularySet::Upos, &t.upos))
        .map(|t| (t.id, t.upos.clone()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingKind {
    DuplicateId,
    OutOfOrder,
    MalformedSpan,
    DanglingHead,
    DanglingDep,
    UnknownUpos,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FindingKind::DuplicateId => "duplicate id",
            FindingKind::OutOfOrder => "out of order",
            FindingKind::MalformedSpan => "malformed span",
            FindingKind::DanglingHead => "dangling head",
            FindingKind::DanglingDep => "dangling dependency",
            FindingKind::UnknownUpos => "unknown upos",
        };
        f.write_str(text)
    }
}

/// One structural problem, reported without blocking any edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub sent_id: String,
    pub token: Identifier,
    pub kind: FindingKind,
    pub detail: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} token {}: {}", self.sent_id, self.token, self.kind)?;
        if !self.detail.is_empty() {
            write!(f, " ({})", self.detail)?;
        }
        Ok(())
    }
}

/// Run every structural check over one sentence
///
/// UPOS tags are checked only when a vocabulary is given.
pub fn audit_sentence(sentence: &Sentence, vocab: Option<&Vocabulary>) -> Vec<Finding> {
    let finding = |token: Identifier, kind: FindingKind, detail: String| Finding {
        sent_id: sentence.id().to_string(),
        token,
        kind,
        detail,
    };

    let mut findings = Vec::new();
    for id in find_duplicate_ids(sentence) {
        findings.push(finding(id, FindingKind::DuplicateId, String::new()));
    }
    for id in find_out_of_order(sentence) {
        findings.push(finding(id, FindingKind::OutOfOrder, String::new()));
    }
    for id in find_malformed_spans(sentence) {
        findings.push(finding(id, FindingKind::MalformedSpan, String::new()));
    }
    for (id, head) in find_dangling_heads(sentence) {
        findings.push(finding(id, FindingKind::DanglingHead, head));
    }
    for (id, entry) in find_dangling_deps(sentence) {
        findings.push(finding(id, FindingKind::DanglingDep, entry));
    }
    if let Some(vocab) = vocab {
        for (id, upos) in find_unknown_upos(sentence, vocab) {
            findings.push(finding(id, FindingKind::UnknownUpos, upos));
        }
    }
    findings
}

/// Audit every sentence in document order
pub fn audit_document(doc: &Document, vocab: Option<&Vocabulary>) -> Vec<Finding> {
    doc.sentences()
        .iter()
        .flat_map(|s| audit_sentence(s, vocab))
        .collect()
}
