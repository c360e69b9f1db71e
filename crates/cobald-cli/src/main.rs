//! CoBaLD CLI
//!
//! Command-line interface for CoBaLD corpora

use clap::{Parser, Subcommand};
use cobald_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "cobald")]
#[command(about = "CoBaLD - annotated corpus editing", long_about = None)]
struct Cli {
    /// Emit structured JSON logs on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    /// Emit human-readable debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert a CoNLL-U file into a snapshot
    Import(commands::import::ImportArgs),
    /// Write a corpus as canonical CoNLL-U
    Export(commands::export::ExportArgs),
    /// Validate every sentence against a vocabulary and audit structure
    Check(commands::check::CheckArgs),
    /// Print one sentence as a table
    Show(commands::show::ShowArgs),
    /// Print the first sentence not yet marked checked
    Unchecked(commands::unchecked::UncheckedArgs),
    /// Insert a blank token into a sentence
    Insert(commands::insert::InsertArgs),
    /// Delete a token from a sentence
    Delete(commands::delete::DeleteArgs),
    /// Set one field and commit the sentence
    Set(commands::set::SetArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.json_logs {
        init(Profile::Production);
    } else if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Import(args) => commands::import::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Check(args) => commands::check::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Unchecked(args) => commands::unchecked::execute(args),
        Commands::Insert(args) => commands::insert::execute(args),
        Commands::Delete(args) => commands::delete::execute(args),
        Commands::Set(args) => commands::set::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
