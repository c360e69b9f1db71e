//! Delete command
//!
//! Usage: cobald delete <FILE> --sentence <ID> --id <TOKEN> [--out <SNAPSHOT>]

use clap::Args;
use cobald_core::{Command, Effect, Identifier};
use std::path::PathBuf;

use super::{apply_to_sentence, edit_target};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Snapshot (edited in place) or CoNLL-U file
    pub input: PathBuf,

    /// Sentence id
    #[arg(short, long)]
    pub sentence: String,

    /// Identifier of the token to delete
    #[arg(long)]
    pub id: String,

    /// Snapshot to write (required for CoNLL-U input)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Execute delete command
pub fn execute(args: DeleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let id: Identifier = args.id.parse()?;

    let mut loaded = cobald_store::load_with_cursor(&args.input, None)?;
    let target = edit_target(&args.input, args.out, &loaded)?;
    let applied = apply_to_sentence(
        &mut loaded.document,
        &args.sentence,
        Command::DeleteToken { id },
    )?;
    cobald_store::save(&loaded.document, loaded.cursor, &target)?;

    if let Effect::Deleted(outcome) = applied.effect {
        println!(
            "✓ Deleted {} from {} ({} renumbered)",
            outcome.removed,
            args.sentence,
            outcome.renumbered.len()
        );
        for range in &outcome.collapsed_ranges {
            println!("  removed multiword range {}", range);
        }
        for dangling in &outcome.dangling {
            println!(
                "  cleared {} of token {} (pointed at {})",
                dangling.field, dangling.token, dangling.target
            );
        }
    }
    Ok(())
}
