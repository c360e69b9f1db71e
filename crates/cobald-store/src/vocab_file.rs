//! Vocabulary files
//!
//! A vocabulary file is a YAML mapping of string lists:
//!
//! ```yaml
//! semslots: [Agent, Object]
//! semclasses: [HUMAN, ANIMAL]
//! deprels: [root, nsubj, obj]
//! upos: [NOUN, VERB]
//! feature_keys: [Case, Number]
//! ```
//!
//! Missing keys load as empty sets.

use std::fs;
use std::path::Path;
use std::time::Instant;

use cobald_core::vocab::{Vocabulary, VocabularySet};
use cobald_core::{log_op_end, log_op_error, log_op_start};

use crate::errors::{io_error, vocabulary_error, Result};

const ALL_SETS: [VocabularySet; 5] = [
    VocabularySet::SemSlot,
    VocabularySet::SemClass,
    VocabularySet::Deprel,
    VocabularySet::Upos,
    VocabularySet::FeatureKey,
];

/// Load a vocabulary from a YAML file
///
/// # Errors
/// `Io` if the file is unreadable, `InvalidVocabulary` if it is not a mapping
/// of string lists.
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    log_op_start!("load_vocabulary", path = %path.display());
    let start = Instant::now();

    let result = fs::read_to_string(path)
        .map_err(|e| io_error("read_vocabulary", e))
        .and_then(|content| parse_vocabulary_at(&content, &path.display().to_string()));

    match &result {
        Ok(vocab) => {
            log_op_end!(
                "load_vocabulary",
                duration_ms = start.elapsed().as_millis() as u64,
                semslots = vocab.len(VocabularySet::SemSlot),
                semclasses = vocab.len(VocabularySet::SemClass),
                deprels = vocab.len(VocabularySet::Deprel)
            );
        }
        Err(e) => {
            log_op_error!(
                "load_vocabulary",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %path.display()
            );
        }
    }
    result
}

/// Parse vocabulary YAML held in memory
///
/// # Errors
/// `InvalidVocabulary` if the text is not a mapping of string lists.
pub fn parse_vocabulary_str(content: &str) -> Result<Vocabulary> {
    parse_vocabulary_at(content, "<memory>")
}

fn parse_vocabulary_at(content: &str, origin: &str) -> Result<Vocabulary> {
    if content.trim().is_empty() {
        return Ok(Vocabulary::default());
    }
    let vocab: Vocabulary = serde_yaml::from_str(content)
        .map_err(|e| vocabulary_error(origin, format!("YAML parse error: {}", e)))?;

    for set in ALL_SETS {
        if vocab.contains(set, "") {
            return Err(vocabulary_error(origin, format!("empty label in {}", set)));
        }
    }
    Ok(vocab)
}
