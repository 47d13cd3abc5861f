//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn trivia() -> Command {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    // Keep a developer's environment out of the tests
    cmd.env_remove("DATABASE_URL").env_remove("RUST_LOG");
    cmd
}

// === Help ===

#[test]
fn test_help_lists_commands() {
    trivia()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("seed"));
}

#[test]
fn test_serve_help() {
    trivia()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("127.0.0.1:5000"));
}

#[test]
fn test_seed_help() {
    trivia()
        .args(["seed", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--questions"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    trivia()
        .args(["serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// === Seed ===

#[test]
fn test_seed_creates_categories() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("trivia.db").display());

    // Twice: seeding is idempotent
    for _ in 0..2 {
        trivia()
            .args(["seed", "--database-url", &url])
            .assert()
            .success()
            .stdout(predicate::str::contains("Seeded 6 categories and 0 questions"));
    }
}

#[test]
fn test_seed_imports_questions() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("trivia.db").display());
    let file = dir.path().join("questions.json");
    std::fs::write(
        &file,
        r#"[
            {"question": "What is the heaviest organ?", "answer": "The liver", "category": 1, "difficulty": 4},
            {"question": "Who painted Guernica?", "answer": "Picasso", "category": "2", "difficulty": 3}
        ]"#,
    )
    .unwrap();

    trivia()
        .args(["seed", "--database-url", &url, "--questions"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 6 categories and 2 questions"));
}

#[test]
fn test_seed_rejects_empty_answer() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("trivia.db").display());
    let file = dir.path().join("questions.json");
    std::fs::write(&file, r#"[{"question": "Q?", "answer": ""}]"#).unwrap();

    trivia()
        .args(["seed", "--database-url", &url, "--questions"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}
