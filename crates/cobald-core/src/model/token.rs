use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::identifier::Identifier;
use crate::errors::{ValidationError, ValidationReason};

/// Placeholder written in any column that carries no value
pub const UNSET: &str = "_";

/// Editable token columns (every column except ID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Form,
    Lemma,
    Upos,
    Xpos,
    Feats,
    Head,
    Deprel,
    Deps,
    Misc,
    SemSlot,
    SemClass,
}

impl Field {
    /// All editable fields in column order
    pub const ALL: [Field; 11] = [
        Field::Form,
        Field::Lemma,
        Field::Upos,
        Field::Xpos,
        Field::Feats,
        Field::Head,
        Field::Deprel,
        Field::Deps,
        Field::Misc,
        Field::SemSlot,
        Field::SemClass,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Form => "form",
            Field::Lemma => "lemma",
            Field::Upos => "upos",
            Field::Xpos => "xpos",
            Field::Feats => "feats",
            Field::Head => "head",
            Field::Deprel => "deprel",
            Field::Deps => "deps",
            Field::Misc => "misc",
            Field::SemSlot => "semslot",
            Field::SemClass => "semclass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = crate::errors::CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == lowered)
            .ok_or_else(|| crate::errors::CorpusError::UnknownField {
                name: s.to_string(),
            })
    }
}

/// Syntactic governor of a token (HEAD column)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Head {
    Unset,
    Root,
    Token(u32),
    /// Text read from a file that is not a head value; kept for the validator
    Malformed(String),
}

impl Head {
    /// Lenient read used by the parser
    ///
    /// Accepts exactly what `parse_strict` accepts, so `01` reads as word 1.
    pub fn parse(text: &str) -> Head {
        Head::parse_strict(text).unwrap_or_else(|_| Head::Malformed(text.to_string()))
    }

    /// Strict read used when a caller sets the field
    pub fn parse_strict(text: &str) -> std::result::Result<Head, ValidationReason> {
        if text == UNSET {
            return Ok(Head::Unset);
        }
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationReason::NotNumeric);
        }
        match text.parse::<u32>() {
            Ok(0) => Ok(Head::Root),
            Ok(n) => Ok(Head::Token(n)),
            Err(_) => Err(ValidationReason::OutOfBounds),
        }
    }

    /// Referenced word position, if this head points at a token
    pub fn target(&self) -> Option<u32> {
        match self {
            Head::Token(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Head {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Head::Unset => f.write_str(UNSET),
            Head::Root => f.write_str("0"),
            Head::Token(n) => write!(f, "{}", n),
            Head::Malformed(text) => f.write_str(text),
        }
    }
}

/// Governor of an enhanced dependency edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Governor {
    Root,
    Node(Identifier),
}

impl fmt::Display for Governor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Governor::Root => f.write_str("0"),
            Governor::Node(id) => write!(f, "{}", id),
        }
    }
}

/// One `governor:relation` entry of the DEPS column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedDep {
    pub governor: Governor,
    pub relation: String,
}

impl fmt::Display for EnhancedDep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.governor, self.relation)
    }
}

/// Enhanced dependency set (DEPS column)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deps {
    Unset,
    List(Vec<EnhancedDep>),
    Malformed(String),
}

impl Deps {
    /// Lenient read used by the parser
    pub fn parse(text: &str) -> Deps {
        Deps::parse_strict(text).unwrap_or_else(|_| Deps::Malformed(text.to_string()))
    }

    /// Strict read used when a caller sets the field
    pub fn parse_strict(text: &str) -> std::result::Result<Deps, ValidationReason> {
        if text == UNSET {
            return Ok(Deps::Unset);
        }
        let mut entries = Vec::new();
        for part in text.split('|') {
            let (governor, relation) = part.split_once(':').ok_or(ValidationReason::Malformed)?;
            if relation.is_empty() {
                return Err(ValidationReason::Malformed);
            }
            let governor = if governor == "0" {
                Governor::Root
            } else {
                Governor::Node(governor.parse().map_err(|_| ValidationReason::Malformed)?)
            };
            entries.push(EnhancedDep {
                governor,
                relation: relation.to_string(),
            });
        }
        Ok(Deps::List(entries))
    }

    /// Entries of a well-formed list; empty for `Unset` and `Malformed`
    pub fn entries(&self) -> &[EnhancedDep] {
        match self {
            Deps::List(entries) => entries,
            _ => &[],
        }
    }
}

impl fmt::Display for Deps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deps::Unset => f.write_str(UNSET),
            Deps::List(entries) if entries.is_empty() => f.write_str(UNSET),
            Deps::List(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{}", entry)?;
                }
                Ok(())
            }
            Deps::Malformed(text) => f.write_str(text),
        }
    }
}

/// Morphological features (FEATS column), kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Features(String);

impl Features {
    pub fn new(text: impl Into<String>) -> Self {
        Features(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `key=value` segments in written order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .split('|')
            .filter_map(|segment| segment.split_once('='))
    }

    /// Keys of every `key=value` segment
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs().map(|(key, _)| key)
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One line of a sentence block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: Identifier,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: Features,
    pub head: Head,
    pub deprel: String,
    pub deps: Deps,
    pub misc: String,
    pub semslot: String,
    pub semclass: String,
}

impl Token {
    /// A token with every column unset
    pub fn blank(id: Identifier) -> Self {
        Self {
            id,
            form: UNSET.to_string(),
            lemma: UNSET.to_string(),
            upos: UNSET.to_string(),
            xpos: UNSET.to_string(),
            feats: Features::new(UNSET),
            head: Head::Unset,
            deprel: UNSET.to_string(),
            deps: Deps::Unset,
            misc: UNSET.to_string(),
            semslot: UNSET.to_string(),
            semclass: UNSET.to_string(),
        }
    }

    /// Textual value of one column
    pub fn field_text(&self, field: Field) -> String {
        match field {
            Field::Form => self.form.clone(),
            Field::Lemma => self.lemma.clone(),
            Field::Upos => self.upos.clone(),
            Field::Xpos => self.xpos.clone(),
            Field::Feats => self.feats.to_string(),
            Field::Head => self.head.to_string(),
            Field::Deprel => self.deprel.clone(),
            Field::Deps => self.deps.to_string(),
            Field::Misc => self.misc.clone(),
            Field::SemSlot => self.semslot.clone(),
            Field::SemClass => self.semclass.clone(),
        }
    }

    /// Replace one column from text, returning the previous text
    ///
    /// HEAD and DEPS are parsed strictly; no column accepts tab or line break.
    ///
    /// # Errors
    /// Returns `ValidationError` and leaves the token unchanged when the
    /// value cannot be stored.
    pub fn set_field_text(
        &mut self,
        field: Field,
        value: &str,
    ) -> std::result::Result<String, ValidationError> {
        let reject = |reason| ValidationError::new(field, value, reason);
        if value.contains(['\t', '\n', '\r']) {
            return Err(reject(ValidationReason::ForbiddenCharacter));
        }

        let old = self.field_text(field);
        match field {
            Field::Form => self.form = value.to_string(),
            Field::Lemma => self.lemma = value.to_string(),
            Field::Upos => self.upos = value.to_string(),
            Field::Xpos => self.xpos = value.to_string(),
            Field::Feats => self.feats = Features::new(value),
            Field::Head => self.head = Head::parse_strict(value).map_err(reject)?,
            Field::Deprel => self.deprel = value.to_string(),
            Field::Deps => self.deps = Deps::parse_strict(value).map_err(reject)?,
            Field::Misc => self.misc = value.to_string(),
            Field::SemSlot => self.semslot = value.to_string(),
            Field::SemClass => self.semclass = value.to_string(),
        }
        Ok(old)
    }

    /// Put back a column read earlier from this token
    ///
    /// Parses as leniently as the file reader, so a malformed value that came
    /// from a file can be restored verbatim.
    pub(crate) fn restore_field_text(&mut self, field: Field, value: &str) {
        match field {
            Field::Form => self.form = value.to_string(),
            Field::Lemma => self.lemma = value.to_string(),
            Field::Upos => self.upos = value.to_string(),
            Field::Xpos => self.xpos = value.to_string(),
            Field::Feats => self.feats = Features::new(value),
            Field::Head => self.head = Head::parse(value),
            Field::Deprel => self.deprel = value.to_string(),
            Field::Deps => self.deps = Deps::parse(value),
            Field::Misc => self.misc = value.to_string(),
            Field::SemSlot => self.semslot = value.to_string(),
            Field::SemClass => self.semclass = value.to_string(),
        }
    }

    /// The 12 columns in file order
    pub fn columns(&self) -> [String; 12] {
        [
            self.id.to_string(),
            self.form.clone(),
            self.lemma.clone(),
            self.upos.clone(),
            self.xpos.clone(),
            self.feats.to_string(),
            self.head.to_string(),
            self.deprel.clone(),
            self.deps.to_string(),
            self.misc.clone(),
            self.semslot.clone(),
            self.semclass.clone(),
        ]
    }
}
