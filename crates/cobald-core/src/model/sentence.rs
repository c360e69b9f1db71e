use serde::{Deserialize, Serialize};

use super::identifier::Identifier;
use super::token::Token;

/// One annotated sentence
///
/// The sentence id is fixed at construction; every other attribute is
/// editable. `tokens` is kept in identifier order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    sent_id: String,

    /// Source text (`# text = ...`)
    pub text: Option<String>,

    /// Translation into the document's translation language
    pub translation: Option<String>,

    /// Reviewer has confirmed the annotation
    pub checked: bool,

    /// Free-text reviewer comment; empty when absent
    pub comment: String,

    pub tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(sent_id: impl Into<String>) -> Self {
        Self {
            sent_id: sent_id.into(),
            text: None,
            translation: None,
            checked: false,
            comment: String::new(),
            tokens: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.sent_id
    }

    /// Greatest integer identifier, 0 when the sentence has no words
    pub fn max_integer_id(&self) -> u32 {
        self.tokens
            .iter()
            .filter_map(|t| t.id.as_integer())
            .max()
            .unwrap_or(0)
    }

    /// Number of integer (word) tokens
    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.id.is_integer()).count()
    }

    /// Position in `tokens` of the token with this identifier
    pub fn position_of(&self, id: &Identifier) -> Option<usize> {
        self.tokens.iter().position(|t| t.id == *id)
    }

    pub fn token(&self, id: &Identifier) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == *id)
    }

    /// Restore identifier order after a structural edit
    pub fn sort_tokens(&mut self) {
        self.tokens.sort_by(|a, b| a.id.cmp(&b.id));
    }
}
