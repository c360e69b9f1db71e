use std::time::Instant;

use crate::errors::{CorpusError, Result};
use crate::model::{Deps, Document, Features, Head, Identifier, Sentence, Token};
use crate::{log_op_end, log_op_error, log_op_start};

/// Number of tab-separated columns on a data line
pub const COLUMN_COUNT: usize = 12;

/// Parse a corpus from text
///
/// Sentence blocks open at `# sent_id = ...`. Data lines are lines whose
/// first character is an ASCII digit; blank lines and unrecognised comments
/// are skipped.
///
/// # Errors
/// The first malformed data line, orphan token, empty sentence, or duplicate
/// sentence id aborts the whole parse. `EmptyCorpus` when no sentence is found.
pub fn parse(text: &str) -> Result<Document> {
    log_op_start!("parse", bytes = text.len());
    let start = Instant::now();

    match parse_impl(text) {
        Ok(doc) => {
            log_op_end!(
                "parse",
                duration_ms = start.elapsed().as_millis() as u64,
                sentence_count = doc.len()
            );
            Ok(doc)
        }
        Err(e) => {
            log_op_error!(
                "parse",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

#[derive(Default)]
struct DocumentBuilder {
    doc: Document,
    open: Option<Sentence>,
    language_seen: bool,
}

impl DocumentBuilder {
    fn close(&mut self) -> Result<()> {
        if let Some(sentence) = self.open.take() {
            if sentence.tokens.is_empty() {
                return Err(CorpusError::EmptySentence {
                    sent_id: sentence.id().to_string(),
                });
            }
            self.doc.push(sentence)?;
        }
        Ok(())
    }

    fn comment(&mut self, body: &str) -> Result<()> {
        let Some((key, value)) = body.split_once('=') else {
            return Ok(());
        };
        let key = key.trim();
        let value = value.strip_prefix(' ').unwrap_or(value);

        if key == "sent_id" {
            self.close()?;
            self.open = Some(Sentence::new(value));
            return Ok(());
        }

        let Some(sentence) = self.open.as_mut() else {
            return Ok(());
        };

        match key {
            "text" => {
                if sentence.text.is_none() {
                    sentence.text = Some(value.to_string());
                }
            }
            "checked" => {
                sentence.checked = matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "yes");
            }
            "note" => sentence.comment = unescape_note(value),
            _ => {
                if let Some(lang) = key.strip_prefix("text_").filter(|l| !l.is_empty()) {
                    sentence.translation = Some(value.to_string());
                    if !self.language_seen {
                        self.doc.translation_language = lang.to_string();
                        self.language_seen = true;
                    }
                    self.doc.has_translations = true;
                }
            }
        }
        Ok(())
    }

    fn data_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != COLUMN_COUNT {
            return Err(CorpusError::MalformedToken {
                line: line_no,
                fields: fields.len(),
            });
        }
        let sentence = self
            .open
            .as_mut()
            .ok_or(CorpusError::OrphanToken { line: line_no })?;
        let id: Identifier = fields[0]
            .parse()
            .map_err(|_| CorpusError::InvalidIdentifier {
                line: line_no,
                value: fields[0].to_string(),
            })?;

        sentence.tokens.push(Token {
            id,
            form: fields[1].to_string(),
            lemma: fields[2].to_string(),
            upos: fields[3].to_string(),
            xpos: fields[4].to_string(),
            feats: Features::new(fields[5]),
            head: Head::parse(fields[6]),
            deprel: fields[7].to_string(),
            deps: Deps::parse(fields[8]),
            misc: fields[9].to_string(),
            semslot: fields[10].to_string(),
            semclass: fields[11].to_string(),
        });
        Ok(())
    }
}

fn parse_impl(text: &str) -> Result<Document> {
    let mut builder = DocumentBuilder::default();

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.trim().is_empty() {
            continue;
        }
        if let Some(body) = line.strip_prefix('#') {
            builder.comment(body)?;
        } else if line.starts_with(|c: char| c.is_ascii_digit()) {
            builder.data_line(line_no, line)?;
        }
    }
    builder.close()?;

    if builder.doc.is_empty() {
        return Err(CorpusError::EmptyCorpus);
    }
    Ok(builder.doc)
}

/// Encode a comment so it fits on one comment line
pub(crate) fn escape_note(note: &str) -> String {
    let mut out = String::with_capacity(note.len());
    for c in note.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_note(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
