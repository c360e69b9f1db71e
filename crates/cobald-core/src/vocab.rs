//! Closed vocabularies consulted by the validator
//!
//! A `Vocabulary` is built once and never mutated afterwards, so it can be
//! shared between sessions behind an `Arc` without locking.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The five closed label sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabularySet {
    SemSlot,
    SemClass,
    Deprel,
    Upos,
    FeatureKey,
}

impl fmt::Display for VocabularySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VocabularySet::SemSlot => "semslots",
            VocabularySet::SemClass => "semclasses",
            VocabularySet::Deprel => "deprels",
            VocabularySet::Upos => "upos",
            VocabularySet::FeatureKey => "feature_keys",
        };
        f.write_str(name)
    }
}

/// Immutable closed vocabularies
///
/// Field names match the keys of a vocabulary file so the type can be
/// deserialized directly; absent keys yield empty sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    semslots: BTreeSet<String>,
    semclasses: BTreeSet<String>,
    deprels: BTreeSet<String>,
    upos: BTreeSet<String>,
    feature_keys: BTreeSet<String>,
}

impl Vocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// Build from plain string lists, in set order
    /// (slots, classes, relations, tags, feature keys)
    pub fn from_lists(
        semslots: &[&str],
        semclasses: &[&str],
        deprels: &[&str],
        upos: &[&str],
        feature_keys: &[&str],
    ) -> Self {
        let collect = |values: &[&str]| values.iter().map(|v| v.to_string()).collect();
        Self {
            semslots: collect(semslots),
            semclasses: collect(semclasses),
            deprels: collect(deprels),
            upos: collect(upos),
            feature_keys: collect(feature_keys),
        }
    }

    fn set(&self, set: VocabularySet) -> &BTreeSet<String> {
        match set {
            VocabularySet::SemSlot => &self.semslots,
            VocabularySet::SemClass => &self.semclasses,
            VocabularySet::Deprel => &self.deprels,
            VocabularySet::Upos => &self.upos,
            VocabularySet::FeatureKey => &self.feature_keys,
        }
    }

    pub fn contains(&self, set: VocabularySet, value: &str) -> bool {
        self.set(set).contains(value)
    }

    pub fn len(&self, set: VocabularySet) -> usize {
        self.set(set).len()
    }

    pub fn is_empty(&self, set: VocabularySet) -> bool {
        self.set(set).is_empty()
    }
}

/// Incremental construction of a `Vocabulary`
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    vocabulary: Vocabulary,
}

impl VocabularyBuilder {
    pub fn add(mut self, set: VocabularySet, value: impl Into<String>) -> Self {
        let target = match set {
            VocabularySet::SemSlot => &mut self.vocabulary.semslots,
            VocabularySet::SemClass => &mut self.vocabulary.semclasses,
            VocabularySet::Deprel => &mut self.vocabulary.deprels,
            VocabularySet::Upos => &mut self.vocabulary.upos,
            VocabularySet::FeatureKey => &mut self.vocabulary.feature_keys,
        };
        target.insert(value.into());
        self
    }

    pub fn extend<I, S>(mut self, set: VocabularySet, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self = self.add(set, value);
        }
        self
    }

    pub fn build(self) -> Vocabulary {
        self.vocabulary
    }
}
