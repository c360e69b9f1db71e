use std::fmt::Write;
use std::time::Instant;

use super::parser::escape_note;
use crate::model::{Document, Sentence};
use crate::{log_op_end, log_op_start};

/// Global header line naming the 12 columns
pub const COLUMNS_HEADER: &str =
    "# global.columns = ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC SEMSLOT SEMCLASS";

/// Render a whole document as text
///
/// Translations are written only when the document's `has_translations`
/// flag is set.
pub fn serialize(doc: &Document) -> String {
    log_op_start!("serialize", sentence_count = doc.len());
    let start = Instant::now();

    let mut out = String::new();
    out.push_str(COLUMNS_HEADER);
    out.push('\n');
    for sentence in doc.sentences() {
        write_sentence(&mut out, sentence, doc);
    }

    log_op_end!(
        "serialize",
        duration_ms = start.elapsed().as_millis() as u64,
        bytes = out.len()
    );
    out
}

fn write_sentence(out: &mut String, sentence: &Sentence, doc: &Document) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "# sent_id = {}", sentence.id());
    if let Some(text) = &sentence.text {
        let _ = writeln!(out, "# text = {}", text);
    }
    if doc.has_translations {
        if let Some(translation) = &sentence.translation {
            let _ = writeln!(out, "# text_{} = {}", doc.translation_language, translation);
        }
    }
    if sentence.checked {
        out.push_str("# checked = true\n");
    }
    if !sentence.comment.is_empty() {
        let _ = writeln!(out, "# note = {}", escape_note(&sentence.comment));
    }
    for token in &sentence.tokens {
        out.push_str(&token.columns().join("\t"));
        out.push('\n');
    }
    out.push('\n');
}
