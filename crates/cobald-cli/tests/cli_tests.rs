#![allow(clippy::unwrap_used, clippy::expect_used)]
//! CLI integration tests
//!
//! Each test drives the `cobald` binary against files in a temp dir.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const CORPUS: &str = "# sent_id = s1\n\
# text = Hello world\n\
# checked = true\n\
1\tHello\thello\tINTJ\t_\t_\t0\troot\t_\t_\tSLOT1\tCLASS1\n\
2\tworld\tworld\tNOUN\t_\t_\t1\tdep\t_\t_\tSLOT2\tCLASS2\n\
\n\
# sent_id = s2\n\
# text = One two\n\
1\tOne\tone\tNUM\t_\t_\t0\troot\t_\t_\tSLOT1\tCLASS1\n\
2\ttwo\ttwo\tNUM\t_\t_\t1\tdep\t_\t_\tSLOT1\tCLASS1\n\
\n";

const VOCAB: &str = "semslots: [SLOT1, SLOT2]\n\
semclasses: [CLASS1, CLASS2]\n\
deprels: [root, dep]\n\
upos: [INTJ, NOUN, NUM]\n\
feature_keys: [Case]\n";

fn setup(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    let corpus = temp_dir.path().join("corpus.conllu");
    let vocab = temp_dir.path().join("vocab.yaml");
    fs::write(&corpus, CORPUS).unwrap();
    fs::write(&vocab, VOCAB).unwrap();
    (corpus, vocab)
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cobald"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn s(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_import_then_show_reads_the_snapshot() {
    // GIVEN a CoNLL-U corpus
    let temp_dir = TempDir::new().unwrap();
    let (corpus, _) = setup(&temp_dir);
    let snapshot = temp_dir.path().join("work.cobald");

    // WHEN importing it and showing sentence 2
    let output = run(temp_dir.path(), &["import", s(&corpus), "--out", s(&snapshot)]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Imported 2 sentences"));

    let output = run(temp_dir.path(), &["show", s(&snapshot), "--sentence", "2"]);

    // THEN the table for s2 is printed
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let table = stdout(&output);
    assert!(table.starts_with("# s2\n"));
    assert!(table.contains("Text: One two"));
    assert!(table.contains("two"));
}

#[test]
fn test_show_out_of_range_sentence_fails() {
    let temp_dir = TempDir::new().unwrap();
    let (corpus, _) = setup(&temp_dir);

    let output = run(temp_dir.path(), &["show", s(&corpus), "--sentence", "7"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Error: sentence 7 out of range"));
}

#[test]
fn test_export_is_stable_across_reexport() {
    // GIVEN a corpus exported once
    let temp_dir = TempDir::new().unwrap();
    let (corpus, _) = setup(&temp_dir);
    let first = temp_dir.path().join("out/first.conllu");
    let second = temp_dir.path().join("out/second.conllu");

    let output = run(temp_dir.path(), &["export", s(&corpus), "--out", s(&first)]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // WHEN exporting the exported file again
    let output = run(temp_dir.path(), &["export", s(&first), "--out", s(&second)]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // THEN both files are byte-identical
    let first_text = fs::read_to_string(&first).unwrap();
    assert_eq!(first_text, fs::read_to_string(&second).unwrap());
    assert!(first_text.contains("# sent_id = s2\n"));
}

#[test]
fn test_check_passes_on_clean_corpus() {
    let temp_dir = TempDir::new().unwrap();
    let (corpus, vocab) = setup(&temp_dir);

    let output = run(temp_dir.path(), &["check", s(&corpus), "--vocab", s(&vocab)]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("2 sentences passed"));
}

#[test]
fn test_check_reports_slot_outside_vocabulary() {
    // GIVEN a corpus whose second sentence uses an unknown slot
    let temp_dir = TempDir::new().unwrap();
    let (corpus, vocab) = setup(&temp_dir);
    fs::write(&corpus, CORPUS.replace("two\tNUM\t_\t_\t1\tdep\t_\t_\tSLOT1", "two\tNUM\t_\t_\t1\tdep\t_\t_\tSLOT9")).unwrap();

    // WHEN checking
    let output = run(temp_dir.path(), &["check", s(&corpus), "--vocab", s(&vocab)]);

    // THEN the offending sentence and value are reported and the exit code is non-zero
    assert!(!output.status.success());
    let report = stdout(&output);
    assert!(report.contains("s2"));
    assert!(report.contains("SLOT9"));
    assert!(stderr(&output).contains("problem(s) found"));
}

#[test]
fn test_check_unknown_relation_needs_accept_flag() {
    let temp_dir = TempDir::new().unwrap();
    let (corpus, vocab) = setup(&temp_dir);
    fs::write(&corpus, CORPUS.replace("\t1\tdep\t_\t_\tSLOT2", "\t1\tnmod\t_\t_\tSLOT2")).unwrap();

    let output = run(temp_dir.path(), &["check", s(&corpus), "--vocab", s(&vocab)]);
    assert!(!output.status.success());

    let output = run(
        temp_dir.path(),
        &["check", s(&corpus), "--vocab", s(&vocab), "--accept-unknown"],
    );
    assert!(output.status.success(), "stdout: {}", stdout(&output));
}

#[test]
fn test_unchecked_names_first_unchecked_sentence() {
    let temp_dir = TempDir::new().unwrap();
    let (corpus, _) = setup(&temp_dir);

    let output = run(temp_dir.path(), &["unchecked", s(&corpus)]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "s2 (1 of 2 checked)\n");
}

#[test]
fn test_insert_into_text_corpus_requires_out() {
    // GIVEN a text corpus
    let temp_dir = TempDir::new().unwrap();
    let (corpus, _) = setup(&temp_dir);

    // WHEN inserting without --out
    let output = run(
        temp_dir.path(),
        &["insert", s(&corpus), "--sentence", "s2", "--anchor", "2"],
    );

    // THEN nothing is written
    assert!(!output.status.success());
    assert!(stderr(&output).contains("pass --out"));
    assert_eq!(fs::read_to_string(&corpus).unwrap(), CORPUS);
}

#[test]
fn test_insert_renumbers_and_edits_snapshot_in_place() {
    // GIVEN an imported snapshot
    let temp_dir = TempDir::new().unwrap();
    let (corpus, _) = setup(&temp_dir);
    let snapshot = temp_dir.path().join("work.cobald");
    assert!(run(temp_dir.path(), &["import", s(&corpus), "--out", s(&snapshot)])
        .status
        .success());

    // WHEN inserting a word before word 2 of s2
    let output = run(
        temp_dir.path(),
        &["insert", s(&snapshot), "--sentence", "s2", "--anchor", "2"],
    );

    // THEN the old word 2 moved to 3 and the snapshot holds three words
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Inserted 2 in s2 (1 renumbered"));

    let exported = temp_dir.path().join("after.conllu");
    assert!(run(temp_dir.path(), &["export", s(&snapshot), "--out", s(&exported)])
        .status
        .success());
    let text = fs::read_to_string(&exported).unwrap();
    assert!(text.contains("3\ttwo\ttwo\tNUM\t_\t_\t1\tdep\t"));
}

#[test]
fn test_delete_reports_cleared_references() {
    let temp_dir = TempDir::new().unwrap();
    let (corpus, _) = setup(&temp_dir);
    let snapshot = temp_dir.path().join("work.cobald");

    let output = run(
        temp_dir.path(),
        &["delete", s(&corpus), "--sentence", "s1", "--id", "1", "--out", s(&snapshot)],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report = stdout(&output);
    assert!(report.contains("Deleted 1 from s1"));
    assert!(report.contains("cleared head of token 1 (pointed at 1)"));
    assert!(snapshot.exists());
}

#[test]
fn test_set_commits_valid_value() {
    // GIVEN a corpus and vocabulary
    let temp_dir = TempDir::new().unwrap();
    let (corpus, vocab) = setup(&temp_dir);
    let snapshot = temp_dir.path().join("work.cobald");

    // WHEN setting a slot from the vocabulary
    let output = run(
        temp_dir.path(),
        &[
            "set", s(&corpus), "--sentence", "s2", "--token", "2", "--field", "semslot",
            "--value", "SLOT2", "--vocab", s(&vocab), "--out", s(&snapshot),
        ],
    );

    // THEN the snapshot carries the new value
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let output = run(temp_dir.path(), &["show", s(&snapshot), "--sentence", "2"]);
    let table = stdout(&output);
    let row = table
        .lines()
        .find(|line| line.trim_start().starts_with("2 "))
        .unwrap();
    assert!(row.contains("SLOT2"));
}

#[test]
fn test_set_rejected_value_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let (corpus, vocab) = setup(&temp_dir);
    let snapshot = temp_dir.path().join("work.cobald");

    let output = run(
        temp_dir.path(),
        &[
            "set", s(&corpus), "--sentence", "s2", "--token", "2", "--field", "semslot",
            "--value", "SLOT9", "--vocab", s(&vocab), "--out", s(&snapshot),
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("SLOT9"));
    assert!(!snapshot.exists());
}

#[test]
fn test_json_logs_go_to_stderr() {
    let temp_dir = TempDir::new().unwrap();
    let (corpus, _) = setup(&temp_dir);

    let output = run(temp_dir.path(), &["--json-logs", "unchecked", s(&corpus)]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "s2 (1 of 2 checked)\n");
    assert!(stderr(&output).contains("\"op\":\"load\""));
}
