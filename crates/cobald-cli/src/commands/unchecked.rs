//! Unchecked command
//!
//! Usage: cobald unchecked <FILE>

use clap::Args;
use cobald_core::queries::{checked_count, find_first_unchecked};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct UncheckedArgs {
    /// Snapshot or CoNLL-U file to read
    pub input: PathBuf,
}

/// Execute unchecked command
pub fn execute(args: UncheckedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = cobald_store::load(&args.input)?;

    match find_first_unchecked(&document) {
        Some(id) => println!(
            "{} ({} of {} checked)",
            id,
            checked_count(&document),
            document.len()
        ),
        None => println!("All {} sentences checked", document.len()),
    }
    Ok(())
}
