//! Structural edits: inserting and deleting tokens
//!
//! Both operations check their target completely before touching the
//! sentence, so a rejected edit leaves it exactly as it was. Every head and
//! enhanced dependency is rewritten through typed identifiers, never by
//! matching text.

use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::errors::{IndexError, IndexReason};
use crate::model::{Deps, Field, Governor, Head, Identifier, Sentence, Token};
use crate::{log_op_end, log_op_error, log_op_start};

/// Where a new token goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    At(Identifier),
    /// After the last word
    End,
}

impl FromStr for Anchor {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "end" | "$" => Ok(Anchor::End),
            text => text
                .parse()
                .map(Anchor::At)
                .map_err(|_| IndexError::new(s, IndexReason::Malformed)),
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anchor::At(id) => write!(f, "{}", id),
            Anchor::End => f.write_str("end"),
        }
    }
}

/// Kind of token to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertKind {
    /// New word; renumbers everything at or after the insert position
    Integer,
    /// New empty node on an existing word; renumbers nothing
    Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub new_id: Identifier,
    /// `(old, new)` for every identifier that changed
    pub renumbered: Vec<(Identifier, Identifier)>,
    pub rewritten_references: usize,
}

/// A reference that pointed at a deleted token and was cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingReference {
    /// Referring token, by its identifier after the delete
    pub token: Identifier,
    pub field: Field,
    pub target: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub removed: Identifier,
    pub renumbered: Vec<(Identifier, Identifier)>,
    pub rewritten_references: usize,
    pub dangling: Vec<DanglingReference>,
    /// Multiword ranges that no longer spanned two words and were dropped
    pub collapsed_ranges: Vec<Identifier>,
}

/// Insert a blank token
///
/// # Errors
/// `IndexError` when the anchor cannot place a token of `kind` in this
/// sentence; the sentence is unchanged.
pub fn insert_token(
    sentence: &mut Sentence,
    anchor: Anchor,
    kind: InsertKind,
) -> Result<InsertOutcome, IndexError> {
    log_op_start!("insert_token", sent_id = sentence.id(), anchor = %anchor);
    let start = Instant::now();

    let result = match kind {
        InsertKind::Integer => insert_integer(sentence, anchor),
        InsertKind::Decimal => insert_decimal(sentence, anchor),
    };

    match &result {
        Ok(outcome) => {
            log_op_end!(
                "insert_token",
                duration_ms = start.elapsed().as_millis() as u64,
                sent_id = sentence.id(),
                token_id = %outcome.new_id,
                renumbered = outcome.renumbered.len()
            );
        }
        Err(e) => {
            log_op_error!(
                "insert_token",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                sent_id = sentence.id()
            );
        }
    }
    result
}

fn insert_integer(sentence: &mut Sentence, anchor: Anchor) -> Result<InsertOutcome, IndexError> {
    let max = sentence.max_integer_id();
    let reject = |reason| IndexError::new(anchor.to_string(), reason);
    let overflow = || reject(IndexReason::OutOfRange);

    let position = match anchor {
        Anchor::End => max.checked_add(1).ok_or_else(overflow)?,
        Anchor::At(Identifier::Integer(n)) => n,
        Anchor::At(id @ Identifier::Decimal { base, .. }) => {
            if sentence.token(&id).is_none() {
                return Err(reject(IndexReason::NotFound));
            }
            base.checked_add(1).ok_or_else(overflow)?
        }
        Anchor::At(Identifier::Range { .. }) => return Err(reject(IndexReason::NotInsertable)),
    };
    if position < 1 || position - 1 > max {
        return Err(reject(IndexReason::OutOfRange));
    }

    // Shift a copy so that an overflow leaves the sentence untouched
    let mut tokens = sentence.tokens.clone();
    let mut renumbered = Vec::new();
    let mut rewritten = 0;
    for token in &mut tokens {
        let shifted = token.id.shifted_for_insert(position).ok_or_else(overflow)?;
        if shifted != token.id {
            renumbered.push((token.id, shifted));
            token.id = shifted;
        }
        if let Head::Token(n) = token.head {
            if n >= position {
                token.head = Head::Token(n.checked_add(1).ok_or_else(overflow)?);
                rewritten += 1;
            }
        }
        if let Deps::List(entries) = &mut token.deps {
            for entry in entries.iter_mut() {
                if let Governor::Node(id) = entry.governor {
                    let shifted = id.shifted_for_insert(position).ok_or_else(overflow)?;
                    if shifted != id {
                        entry.governor = Governor::Node(shifted);
                        rewritten += 1;
                    }
                }
            }
        }
    }

    let new_id = Identifier::Integer(position);
    tokens.push(Token::blank(new_id));
    sentence.tokens = tokens;
    sentence.sort_tokens();

    Ok(InsertOutcome {
        new_id,
        renumbered,
        rewritten_references: rewritten,
    })
}

fn insert_decimal(sentence: &mut Sentence, anchor: Anchor) -> Result<InsertOutcome, IndexError> {
    let max = sentence.max_integer_id();
    let reject = |reason| IndexError::new(anchor.to_string(), reason);

    let base = match anchor {
        Anchor::At(Identifier::Integer(n)) => n,
        Anchor::At(id @ Identifier::Decimal { base, .. }) => {
            if sentence.token(&id).is_none() {
                return Err(reject(IndexReason::NotFound));
            }
            base
        }
        Anchor::At(Identifier::Range { .. }) | Anchor::End => {
            return Err(reject(IndexReason::NotInsertable))
        }
    };
    if base < 1 || base > max {
        return Err(reject(IndexReason::OutOfRange));
    }
    if sentence.token(&Identifier::Integer(base)).is_none() {
        return Err(reject(IndexReason::NotFound));
    }

    let minor = max_minor_on(sentence, base)
        .checked_add(1)
        .ok_or_else(|| reject(IndexReason::OutOfRange))?;
    let new_id = Identifier::Decimal { base, minor };
    sentence.tokens.push(Token::blank(new_id));
    sentence.sort_tokens();

    Ok(InsertOutcome {
        new_id,
        renumbered: Vec::new(),
        rewritten_references: 0,
    })
}

fn max_minor_on(sentence: &Sentence, on: u32) -> u32 {
    sentence
        .tokens
        .iter()
        .filter_map(|t| match t.id {
            Identifier::Decimal { base, minor } if base == on => Some(minor),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

/// Delete the token carrying `target`
///
/// Deleting a word closes the gap: later words, the empty nodes attached to
/// them, and range bounds move down by one. Empty nodes of the deleted word
/// move to the previous word. References to the deleted token are cleared
/// and reported in `DeleteOutcome::dangling`.
///
/// # Errors
/// `IndexError` if no token carries `target` or it is the only word.
pub fn delete_token(
    sentence: &mut Sentence,
    target: Identifier,
) -> Result<DeleteOutcome, IndexError> {
    log_op_start!("delete_token", sent_id = sentence.id(), token_id = %target);
    let start = Instant::now();

    let result = delete_impl(sentence, target);

    match &result {
        Ok(outcome) => {
            log_op_end!(
                "delete_token",
                duration_ms = start.elapsed().as_millis() as u64,
                sent_id = sentence.id(),
                renumbered = outcome.renumbered.len(),
                dangling = outcome.dangling.len()
            );
        }
        Err(e) => {
            log_op_error!(
                "delete_token",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                sent_id = sentence.id()
            );
        }
    }
    result
}

fn delete_impl(sentence: &mut Sentence, target: Identifier) -> Result<DeleteOutcome, IndexError> {
    let position = sentence
        .position_of(&target)
        .ok_or_else(|| IndexError::new(target.to_string(), IndexReason::NotFound))?;

    let Identifier::Integer(k) = target else {
        sentence.tokens.remove(position);
        let dangling = clear_references_to(sentence, target);
        return Ok(DeleteOutcome {
            removed: target,
            renumbered: Vec::new(),
            rewritten_references: 0,
            dangling,
            collapsed_ranges: Vec::new(),
        });
    };

    if sentence.word_count() <= 1 {
        return Err(IndexError::new(target.to_string(), IndexReason::LastWord));
    }

    let minor_offset = max_minor_on(sentence, k - 1);
    if minor_offset.checked_add(max_minor_on(sentence, k)).is_none() {
        return Err(IndexError::new(target.to_string(), IndexReason::OutOfRange));
    }
    let remap = |id: Identifier| -> Identifier {
        let down = |n: u32| if n > k { n - 1 } else { n };
        match id {
            Identifier::Integer(n) => Identifier::Integer(down(n)),
            Identifier::Decimal { base, minor } if base == k => Identifier::Decimal {
                base: k - 1,
                minor: minor_offset + minor,
            },
            Identifier::Decimal { base, minor } => Identifier::Decimal {
                base: down(base),
                minor,
            },
            Identifier::Range { low, high } => Identifier::Range {
                low: down(low),
                high: if high == k { k - 1 } else { down(high) },
            },
        }
    };

    sentence.tokens.remove(position);

    let mut renumbered = Vec::new();
    let mut collapsed = Vec::new();
    let mut rewritten = 0;
    let mut dangling = Vec::new();

    for token in &mut sentence.tokens {
        let new_id = remap(token.id);
        if new_id != token.id {
            renumbered.push((token.id, new_id));
        }
        if let Identifier::Range { low, high } = new_id {
            if low >= high {
                collapsed.push(token.id);
            }
        }
        token.id = new_id;

        match token.head {
            Head::Token(n) if n == k => {
                token.head = Head::Unset;
                dangling.push(DanglingReference {
                    token: new_id,
                    field: Field::Head,
                    target,
                });
            }
            Head::Token(n) if n > k => {
                token.head = Head::Token(n - 1);
                rewritten += 1;
            }
            _ => {}
        }

        if let Deps::List(entries) = &mut token.deps {
            let before = entries.len();
            entries.retain(|entry| entry.governor != Governor::Node(target));
            for _ in entries.len()..before {
                dangling.push(DanglingReference {
                    token: new_id,
                    field: Field::Deps,
                    target,
                });
            }
            for entry in entries.iter_mut() {
                if let Governor::Node(id) = entry.governor {
                    let moved = remap(id);
                    if moved != id {
                        entry.governor = Governor::Node(moved);
                        rewritten += 1;
                    }
                }
            }
            if entries.is_empty() {
                token.deps = Deps::Unset;
            }
        }
    }

    if !collapsed.is_empty() {
        renumbered.retain(|(old, _)| !collapsed.contains(old));
        sentence
            .tokens
            .retain(|t| !matches!(t.id, Identifier::Range { low, high } if low >= high));
    }
    sentence.sort_tokens();

    Ok(DeleteOutcome {
        removed: target,
        renumbered,
        rewritten_references: rewritten,
        dangling,
        collapsed_ranges: collapsed,
    })
}

/// Drop enhanced dependencies on a removed empty node or range
fn clear_references_to(sentence: &mut Sentence, target: Identifier) -> Vec<DanglingReference> {
    let mut dangling = Vec::new();
    for token in &mut sentence.tokens {
        if let Deps::List(entries) = &mut token.deps {
            let before = entries.len();
            entries.retain(|entry| entry.governor != Governor::Node(target));
            for _ in entries.len()..before {
                dangling.push(DanglingReference {
                    token: token.id,
                    field: Field::Deps,
                    target,
                });
            }
            if entries.is_empty() {
                token.deps = Deps::Unset;
            }
        }
    }
    dangling
}
