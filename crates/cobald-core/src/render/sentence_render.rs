use crate::model::{Sentence, Token};

/// Display switches for [`render_sentence`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include the FEATS column
    pub with_features: bool,
}

/// Render a sentence as a fixed-width text table
///
/// Generates:
/// - A header with the sentence id and checked mark
/// - Source text, translation, and comment when present
/// - One row per token: ID, FORM, LEMMA, UPOS, [FEATS], HEAD, DEPREL, DEPS,
///   SEMSLOT, SEMCLASS
pub fn render_sentence(sentence: &Sentence, options: RenderOptions) -> String {
    let mut output = String::new();

    let mark = if sentence.checked { " [checked]" } else { "" };
    output.push_str(&format!("# {}{}\n", sentence.id(), mark));
    if let Some(ref text) = sentence.text {
        output.push_str(&format!("Text: {}\n", text));
    }
    if let Some(ref translation) = sentence.translation {
        output.push_str(&format!("Translation: {}\n", translation));
    }
    if !sentence.comment.is_empty() {
        output.push_str(&format!("Comment: {}\n", sentence.comment.replace('\n', " / ")));
    }
    output.push('\n');

    output.push_str(&header_row(options));
    output.push('\n');
    for token in &sentence.tokens {
        output.push_str(token_row(token, options).trim_end());
        output.push('\n');
    }
    output
}

fn header_row(options: RenderOptions) -> String {
    let feats = if options.with_features {
        format!("{:<40}", "FEATS")
    } else {
        String::new()
    };
    format!(
        "{:>5} {:<20}{:<20}{:<7}{}{:<5}{:<15}{:<15}{:<20}{}",
        "ID", "FORM", "LEMMA", "UPOS", feats, "HEAD", "DEPREL", "DEPS", "SEMSLOT", "SEMCLASS"
    )
    .trim_end()
    .to_string()
}

fn token_row(token: &Token, options: RenderOptions) -> String {
    let feats = if options.with_features {
        format!("{:<40}", token.feats.as_str())
    } else {
        String::new()
    };
    format!(
        "{:>5} {:<20}{:<20}{:<7}{}{:<5}{:<15}{:<15}{:<20}{}",
        token.id.to_string(),
        token.form,
        token.lemma,
        token.upos,
        feats,
        token.head.to_string(),
        token.deprel,
        token.deps.to_string(),
        token.semslot,
        token.semclass
    )
}
