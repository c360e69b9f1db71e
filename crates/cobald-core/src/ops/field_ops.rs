use crate::errors::{CorpusError, Result};
use crate::model::{Field, Sentence};

/// Set one column of the token at `token_index` (position in `tokens`)
///
/// Returns the previous text of the column.
///
/// # Errors
/// `TokenIndexOutOfRange` for a bad index; `Validation` when the value cannot
/// be stored in the column. The sentence is unchanged on error.
pub fn set_field(
    sentence: &mut Sentence,
    token_index: usize,
    field: Field,
    value: &str,
) -> Result<String> {
    let len = sentence.tokens.len();
    let sent_id = sentence.id().to_string();
    let token = sentence
        .tokens
        .get_mut(token_index)
        .ok_or(CorpusError::TokenIndexOutOfRange {
            sent_id,
            index: token_index,
            len,
        })?;
    let old = token.set_field_text(field, value)?;
    tracing::debug!(
        op = "set_field",
        sent_id = sentence.id(),
        token_index,
        field = %field,
        "field updated"
    );
    Ok(old)
}
