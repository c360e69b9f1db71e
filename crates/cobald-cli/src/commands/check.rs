//! Check command
//!
//! Usage: cobald check <FILE> --vocab <YAML> [--features] [--accept-unknown]
//!
//! Runs the commit-time validation on every sentence and the structural
//! audit, printing one line per problem.

use clap::Args;
use cobald_core::rules::audit_document;
use cobald_core::{AcceptUnknown, ConfirmHook, RejectUnknown, ValidationScope, Validator};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Snapshot or CoNLL-U file to check
    pub input: PathBuf,

    /// Vocabulary YAML file
    #[arg(long)]
    pub vocab: PathBuf,

    /// Also check FEATS keys against the feature-key vocabulary
    #[arg(long)]
    pub features: bool,

    /// Accept relation labels and feature keys missing from the vocabulary
    #[arg(long)]
    pub accept_unknown: bool,
}

/// Execute check command
pub fn execute(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let document = cobald_store::load(&args.input)?;
    let vocab = cobald_store::load_vocabulary(&args.vocab)?;
    let hook: &dyn ConfirmHook = if args.accept_unknown {
        &AcceptUnknown
    } else {
        &RejectUnknown
    };
    let validator = Validator::new(
        &vocab,
        ValidationScope {
            features: args.features,
        },
    );

    let mut problems = 0;
    for sentence in document.sentences() {
        if let Err(e) = validator.validate_sentence(sentence, hook) {
            println!("{}: {}", sentence.id(), e);
            problems += 1;
        }
    }
    for finding in audit_document(&document, Some(&vocab)) {
        println!("{}", finding);
        problems += 1;
    }

    if problems > 0 {
        return Err(format!("{} problem(s) found", problems).into());
    }
    println!("✓ {} sentences passed", document.len());
    Ok(())
}
