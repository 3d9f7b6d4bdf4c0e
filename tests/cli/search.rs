use crate::cli::support::{vaultchat_in, write_note, write_sample_vault};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_search_by_tag() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    vaultchat_in(vault.path(), config.path())
        .args(["search", "#person"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 notes:"))
        .stdout(predicate::str::contains("- A (A.md)"))
        .stdout(predicate::str::contains("B.md").not());
}

#[test]
fn test_search_by_name_is_case_insensitive() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_note(vault.path(), "people/Ada Lovelace.md", "Analytical engine.");
    write_note(vault.path(), "Babbage.md", "Difference engine.");

    vaultchat_in(vault.path(), config.path())
        .args(["search", "ADA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Ada Lovelace"))
        .stdout(predicate::str::contains("Babbage").not());
}

#[test]
fn test_search_by_section_type() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_note(vault.path(), "snippet.md", "```rust\nfn main() {}\n```\n");
    write_note(vault.path(), "prose.md", "Just a paragraph.\n");

    vaultchat_in(vault.path(), config.path())
        .args(["search", "code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 notes:"))
        .stdout(predicate::str::contains("- snippet (snippet.md)"));
}

#[test]
fn test_content_mode_matches_body_text() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    vaultchat_in(vault.path(), config.path())
        .args(["search", "ada...", "--mode", "content"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- A (A.md)"));

    // Metadata mode never looks at the body
    vaultchat_in(vault.path(), config.path())
        .args(["search", "unrelated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found matching your search."));
}

#[test]
fn test_search_empty_vault() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();

    vaultchat_in(vault.path(), config.path())
        .args(["search", "#person"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes found matching your search."));
}

#[test]
fn test_search_lists_at_most_ten() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    for i in 0..12 {
        write_note(
            vault.path(),
            &format!("note-{:02}.md", i),
            "---\ntags: [bulk]\n---\nbody",
        );
    }

    let output = vaultchat_in(vault.path(), config.path())
        .args(["search", "#bulk"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Found 12 notes:\n"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("- ")).count(), 10);
    assert!(stdout.contains("- note-00 (note-00.md)"));
    assert!(!stdout.contains("note-10"));
    assert!(stdout.contains("(showing first 10)"));
}

#[test]
fn test_search_skips_hidden_directories() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_note(vault.path(), ".trash/Ada.md", "deleted");
    write_note(vault.path(), "Ada.md", "kept");

    vaultchat_in(vault.path(), config.path())
        .args(["search", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 notes:"))
        .stdout(predicate::str::contains(".trash").not());
}

#[test]
fn test_search_json_output() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    let output = vaultchat_in(vault.path(), config.path())
        .args(["--format", "json", "search", "#person"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["mode"], "metadata");
    assert_eq!(json["total"], 1);
    assert_eq!(json["notes"][0]["name"], "A");
    assert_eq!(json["notes"][0]["path"], "A.md");
}

#[test]
fn test_search_rejects_blank_query() {
    let vault = tempdir().unwrap();
    let config = tempdir().unwrap();
    write_sample_vault(vault.path());

    vaultchat_in(vault.path(), config.path())
        .args(["search", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please enter a search query"));
}

#[test]
fn test_search_missing_vault() {
    let root = tempdir().unwrap();
    let config = tempdir().unwrap();
    let missing = root.path().join("nope");

    vaultchat_in(&missing, config.path())
        .args(["search", "x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vault not found"));
}
