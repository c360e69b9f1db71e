//! Subcommand implementations

pub mod check;
pub mod delete;
pub mod export;
pub mod import;
pub mod insert;
pub mod set;
pub mod show;
pub mod unchecked;

use std::path::{Path, PathBuf};

use cobald_core::{apply, Applied, Command, Document};
use cobald_store::{Loaded, SourceFormat};

/// Where an edited corpus is written back
///
/// Snapshots are updated in place by default. A text corpus is never
/// overwritten with a snapshot, so it needs an explicit `--out`.
pub fn edit_target(
    input: &Path,
    out: Option<PathBuf>,
    loaded: &Loaded,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match (out, loaded.format) {
        (Some(path), _) => Ok(path),
        (None, SourceFormat::Snapshot) => Ok(input.to_path_buf()),
        (None, SourceFormat::Conllu) => Err(format!(
            "{} is a CoNLL-U file; pass --out to write a snapshot",
            input.display()
        )
        .into()),
    }
}

/// Apply one command to the sentence `sent_id` of `doc`
pub fn apply_to_sentence(
    doc: &mut Document,
    sent_id: &str,
    cmd: Command,
) -> Result<Applied, Box<dyn std::error::Error>> {
    let sentence = doc
        .by_id(sent_id)
        .cloned()
        .ok_or_else(|| format!("no sentence with id {}", sent_id))?;
    let applied = apply(sentence, cmd)?;
    doc.replace(applied.sentence.clone())?;
    Ok(applied)
}
