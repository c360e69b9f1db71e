//! Set command
//!
//! Usage: cobald set <FILE> --sentence <ID> --token <N> --field <NAME> --value <TEXT> --vocab <YAML>
//!
//! The edit goes through an editing session, so the sentence must pass
//! validation before anything is written.

use clap::Args;
use cobald_core::{AcceptUnknown, ConfirmHook, Field, RejectUnknown, ValidationScope};
use cobald_engine::Session;
use std::path::PathBuf;
use std::sync::Arc;

use super::edit_target;

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Snapshot (edited in place) or CoNLL-U file
    pub input: PathBuf,

    /// Sentence id
    #[arg(short, long)]
    pub sentence: String,

    /// 1-based token position within the sentence, counting every line
    #[arg(short, long)]
    pub token: usize,

    /// Column name (form, lemma, upos, xpos, feats, head, deprel, deps, misc, semslot, semclass)
    #[arg(short, long)]
    pub field: String,

    /// New value
    #[arg(long)]
    pub value: String,

    /// Vocabulary YAML file
    #[arg(long)]
    pub vocab: PathBuf,

    /// Also check FEATS keys against the feature-key vocabulary
    #[arg(long)]
    pub features: bool,

    /// Accept relation labels and feature keys missing from the vocabulary
    #[arg(long)]
    pub accept_unknown: bool,

    /// Snapshot to write (required for CoNLL-U input)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Execute set command
pub fn execute(args: SetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let field: Field = args.field.parse()?;
    let token_index = args
        .token
        .checked_sub(1)
        .ok_or("token positions start at 1")?;
    let hook: &dyn ConfirmHook = if args.accept_unknown {
        &AcceptUnknown
    } else {
        &RejectUnknown
    };

    let loaded = cobald_store::load_with_cursor(&args.input, None)?;
    let target = edit_target(&args.input, args.out, &loaded)?;
    let vocab = Arc::new(cobald_store::load_vocabulary(&args.vocab)?);
    let mut session = Session::new(loaded.document, vocab)
        .with_cursor(Some(loaded.cursor.get()))
        .with_scope(ValidationScope {
            features: args.features,
        });

    session.set_field(&args.sentence, token_index, field, &args.value)?;
    session.save(&target, hook)?;

    println!(
        "✓ Set {} of token {} in {}",
        field, args.token, args.sentence
    );
    Ok(())
}
