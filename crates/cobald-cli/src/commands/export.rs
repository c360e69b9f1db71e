//! Export command
//!
//! Usage: cobald export <FILE> --out <CONLLU>

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Snapshot or CoNLL-U file to read
    pub input: PathBuf,

    /// CoNLL-U file to write
    #[arg(short, long)]
    pub out: PathBuf,
}

/// Execute export command
pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = cobald_store::load(&args.input)?;
    cobald_store::export_canonical(&document, &args.out)?;

    println!(
        "✓ Exported {} sentences to {}",
        document.len(),
        args.out.display()
    );
    Ok(())
}
