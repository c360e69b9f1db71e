use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationReason};
use crate::model::{Field, Head, Sentence, Token, UNSET};
use crate::policy::ConfirmHook;
use crate::vocab::{Vocabulary, VocabularySet};

/// Which optional columns take part in commit checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationScope {
    /// Check FEATS keys against the feature-key vocabulary
    pub features: bool,
}

/// Outcome of checking one value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldVerdict {
    Accept,
    /// Value is outside a soft vocabulary; the caller decides
    NeedsConfirmation { field: Field, value: String },
    Reject(ValidationError),
}

/// Commit-time checks against the closed vocabularies
#[derive(Debug, Clone, Copy)]
pub struct Validator<'v> {
    vocab: &'v Vocabulary,
    scope: ValidationScope,
}

impl<'v> Validator<'v> {
    pub fn new(vocab: &'v Vocabulary, scope: ValidationScope) -> Self {
        Self { vocab, scope }
    }

    fn closed(&self, set: VocabularySet, field: Field, value: &str) -> FieldVerdict {
        if self.vocab.contains(set, value) {
            FieldVerdict::Accept
        } else {
            FieldVerdict::Reject(ValidationError::new(
                field,
                value,
                ValidationReason::NotInVocabulary,
            ))
        }
    }

    fn relation(&self, value: &str) -> FieldVerdict {
        if value == UNSET || self.vocab.contains(VocabularySet::Deprel, value) {
            FieldVerdict::Accept
        } else {
            FieldVerdict::NeedsConfirmation {
                field: Field::Deprel,
                value: value.to_string(),
            }
        }
    }

    fn head(&self, head: &Head, max_integer: u32) -> FieldVerdict {
        let reject = |reason| FieldVerdict::Reject(ValidationError::new(Field::Head, head.to_string(), reason));
        match head {
            Head::Unset | Head::Root => FieldVerdict::Accept,
            Head::Token(n) if *n <= max_integer => FieldVerdict::Accept,
            Head::Token(_) => reject(ValidationReason::OutOfBounds),
            Head::Malformed(_) => reject(ValidationReason::NotNumeric),
        }
    }

    /// Verdicts for one token in check order: slot, class, relation, head,
    /// then one per unknown feature key when features are in scope
    pub fn verdicts(&self, token: &Token, max_integer: u32) -> Vec<FieldVerdict> {
        let mut verdicts = vec![
            self.closed(VocabularySet::SemSlot, Field::SemSlot, &token.semslot),
            self.closed(VocabularySet::SemClass, Field::SemClass, &token.semclass),
            self.relation(&token.deprel),
            self.head(&token.head, max_integer),
        ];
        if self.scope.features {
            verdicts.extend(
                token
                    .feats
                    .keys()
                    .filter(|key| !self.vocab.contains(VocabularySet::FeatureKey, key))
                    .map(|key| FieldVerdict::NeedsConfirmation {
                        field: Field::Feats,
                        value: key.to_string(),
                    }),
            );
        }
        verdicts
    }

    /// Check one token, resolving soft checks through `hook`
    ///
    /// # Errors
    /// The first rejected or unconfirmed value.
    pub fn validate_token(
        &self,
        token: &Token,
        max_integer: u32,
        hook: &dyn ConfirmHook,
    ) -> Result<(), ValidationError> {
        for verdict in self.verdicts(token, max_integer) {
            match verdict {
                FieldVerdict::Accept => {}
                FieldVerdict::NeedsConfirmation { field, value } => {
                    if !hook.confirm(field, &value) {
                        return Err(ValidationError::new(field, value, ValidationReason::Unconfirmed));
                    }
                }
                FieldVerdict::Reject(err) => return Err(err),
            }
        }
        Ok(())
    }

    /// Check every annotated token of a sentence; multiword range lines are
    /// skipped
    ///
    /// # Errors
    /// The first failing field; later tokens are not examined.
    pub fn validate_sentence(
        &self,
        sentence: &Sentence,
        hook: &dyn ConfirmHook,
    ) -> Result<(), ValidationError> {
        let max_integer = sentence.max_integer_id();
        for token in sentence.tokens.iter().filter(|t| !t.id.is_range()) {
            if let Err(err) = self.validate_token(token, max_integer, hook) {
                tracing::debug!(
                    op = "validate",
                    sent_id = sentence.id(),
                    token_id = %token.id,
                    field = %err.field,
                    "field rejected"
                );
                return Err(err);
            }
        }
        Ok(())
    }
}
