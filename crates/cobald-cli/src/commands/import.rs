//! Import command
//!
//! Usage: cobald import <CONLLU> --out <SNAPSHOT>

use clap::Args;
use cobald_core::Cursor;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CoNLL-U file to read
    pub input: PathBuf,

    /// Snapshot file to write
    #[arg(short, long)]
    pub out: PathBuf,
}

/// Execute import command
pub fn execute(args: ImportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = cobald_store::load(&args.input)?;
    cobald_store::save(&document, Cursor::default(), &args.out)?;

    println!(
        "✓ Imported {} sentences to {}",
        document.len(),
        args.out.display()
    );
    Ok(())
}
