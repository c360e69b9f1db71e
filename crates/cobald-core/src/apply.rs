//! Functional-boundary apply function
//!
//! `apply()` takes a sentence by value, runs one command against it, and
//! returns the edited sentence together with the log entry that reverses the
//! edit. On error the sentence passed in is dropped, so callers that need
//! the old state keep their own copy.
//!
//! ## Example
//!
//! ```
//! use cobald_core::apply::apply;
//! use cobald_core::model::{Field, Identifier, Sentence, Token};
//! use cobald_core::Command;
//!
//! let mut sentence = Sentence::new("s1");
//! sentence.tokens.push(Token::blank(Identifier::Integer(1)));
//!
//! let cmd = Command::SetField {
//!     token_index: 0,
//!     field: Field::Lemma,
//!     value: "hello".to_string(),
//! };
//! let applied = apply(sentence, cmd).unwrap();
//! assert_eq!(applied.sentence.tokens[0].lemma, "hello");
//! ```

use crate::commands::Command;
use crate::edit_log::{EditEntry, FieldEdit};
use crate::errors::Result;
use crate::model::Sentence;
use crate::ops::{delete_token, insert_token, set_field, DeleteOutcome, InsertOutcome};

/// Structural side report of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Inserted(InsertOutcome),
    Deleted(DeleteOutcome),
}

/// Result of a successful `apply()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub sentence: Sentence,
    pub entry: EditEntry,
    pub effect: Effect,
}

/// Apply a command to a sentence
///
/// # Errors
/// `Validation` for a field value that cannot be stored,
/// `TokenIndexOutOfRange` for a bad token position, `Index` for a rejected
/// structural target.
pub fn apply(mut sentence: Sentence, cmd: Command) -> Result<Applied> {
    let sentence_id = sentence.id().to_string();

    match cmd {
        Command::SetField {
            token_index,
            field,
            value,
        } => {
            let old_value = set_field(&mut sentence, token_index, field, &value)?;
            // Stored values are normalised (e.g. head "01" is kept as "1").
            let new_value = sentence.tokens[token_index].field_text(field);
            Ok(Applied {
                sentence,
                entry: EditEntry::Field(FieldEdit {
                    sentence_id,
                    token_index,
                    field,
                    old_value,
                    new_value,
                }),
                effect: Effect::None,
            })
        }

        Command::InsertToken { anchor, kind } => {
            let before = sentence.tokens.clone();
            let outcome = insert_token(&mut sentence, anchor, kind)?;
            let after = sentence.tokens.clone();
            Ok(Applied {
                sentence,
                entry: EditEntry::Structure {
                    sentence_id,
                    before,
                    after,
                },
                effect: Effect::Inserted(outcome),
            })
        }

        Command::DeleteToken { id } => {
            let before = sentence.tokens.clone();
            let outcome = delete_token(&mut sentence, id)?;
            let after = sentence.tokens.clone();
            Ok(Applied {
                sentence,
                entry: EditEntry::Structure {
                    sentence_id,
                    before,
                    after,
                },
                effect: Effect::Deleted(outcome),
            })
        }

        Command::SetComment { comment } => {
            let old = std::mem::replace(&mut sentence.comment, comment.clone());
            Ok(Applied {
                sentence,
                entry: EditEntry::Comment {
                    sentence_id,
                    old,
                    new: comment,
                },
                effect: Effect::None,
            })
        }

        Command::SetTranslation { translation } => {
            let old = std::mem::replace(&mut sentence.translation, translation.clone());
            Ok(Applied {
                sentence,
                entry: EditEntry::Translation {
                    sentence_id,
                    old,
                    new: translation,
                },
                effect: Effect::None,
            })
        }
    }
}
