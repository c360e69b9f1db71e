//! Sentence-level edit commands
//!
//! Commands are the entry point of `apply()`: every edit a session can make
//! to a working sentence is one of these.

use crate::model::{Field, Identifier};
use crate::ops::{Anchor, InsertKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace one column of the token at `token_index` (position in `tokens`)
    SetField {
        token_index: usize,
        field: Field,
        value: String,
    },

    /// Insert a blank token
    InsertToken { anchor: Anchor, kind: InsertKind },

    /// Delete the token carrying `id`
    DeleteToken { id: Identifier },

    /// Replace the reviewer comment
    SetComment { comment: String },

    /// Replace or clear the translation
    SetTranslation { translation: Option<String> },
}

impl Command {
    /// Short operation name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::SetField { .. } => "set_field",
            Command::InsertToken { .. } => "insert_token",
            Command::DeleteToken { .. } => "delete_token",
            Command::SetComment { .. } => "set_comment",
            Command::SetTranslation { .. } => "set_translation",
        }
    }
}
