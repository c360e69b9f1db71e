//! Insert command
//!
//! Usage: cobald insert <FILE> --sentence <ID> --anchor <ID|end> [--decimal] [--out <SNAPSHOT>]

use clap::Args;
use cobald_core::{Anchor, Command, Effect, InsertKind};
use std::path::PathBuf;

use super::{apply_to_sentence, edit_target};

#[derive(Debug, Args)]
pub struct InsertArgs {
    /// Snapshot (edited in place) or CoNLL-U file
    pub input: PathBuf,

    /// Sentence id
    #[arg(short, long)]
    pub sentence: String,

    /// Token identifier to insert at, or `end`
    #[arg(short, long)]
    pub anchor: String,

    /// Insert an empty node on the anchor word instead of a new word
    #[arg(long)]
    pub decimal: bool,

    /// Snapshot to write (required for CoNLL-U input)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Execute insert command
pub fn execute(args: InsertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let anchor: Anchor = args.anchor.parse()?;
    let kind = if args.decimal {
        InsertKind::Decimal
    } else {
        InsertKind::Integer
    };

    let mut loaded = cobald_store::load_with_cursor(&args.input, None)?;
    let target = edit_target(&args.input, args.out, &loaded)?;
    let applied = apply_to_sentence(
        &mut loaded.document,
        &args.sentence,
        Command::InsertToken { anchor, kind },
    )?;
    cobald_store::save(&loaded.document, loaded.cursor, &target)?;

    if let Effect::Inserted(outcome) = applied.effect {
        println!(
            "✓ Inserted {} in {} ({} renumbered, {} references rewritten)",
            outcome.new_id,
            args.sentence,
            outcome.renumbered.len(),
            outcome.rewritten_references
        );
    }
    Ok(())
}
