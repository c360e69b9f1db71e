//! Show command
//!
//! Usage: cobald show <FILE> [--sentence <N>] [--features]

use clap::Args;
use cobald_core::render::{render_sentence, RenderOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Snapshot or CoNLL-U file to read
    pub input: PathBuf,

    /// 1-based sentence number (default: the saved cursor)
    #[arg(short, long)]
    pub sentence: Option<usize>,

    /// Include the FEATS column
    #[arg(long)]
    pub features: bool,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = cobald_store::load_with_cursor(&args.input, args.sentence)?;
    let n = args.sentence.unwrap_or(loaded.cursor.get());
    let sentence = loaded.document.get(n).ok_or_else(|| {
        format!(
            "sentence {} out of range (corpus has {})",
            n,
            loaded.document.len()
        )
    })?;

    print!(
        "{}",
        render_sentence(
            sentence,
            RenderOptions {
                with_features: args.features,
            },
        )
    );
    Ok(())
}
