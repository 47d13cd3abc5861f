//! Seed command: standard categories plus an optional question import

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, seed};
use trivia_server::models::NewQuestion;

use super::DEFAULT_DATABASE_URL;

/// Categories every fresh database starts with, by id
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// SQLite database URL, created if missing
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// JSON file holding an array of {question, answer, category, difficulty}
    #[arg(long, short = 'q', value_name = "PATH")]
    pub questions: Option<PathBuf>,
}

/// Upsert the default categories, then import questions if a file is given.
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    // Parse and validate before opening the database
    let questions = match &args.questions {
        Some(path) => load_questions(path).await?,
        None => Vec::new(),
    };

    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open database {}", args.database_url))?;

    // One transaction: a storage failure leaves the database untouched
    let report = seed(&pool, &DEFAULT_CATEGORIES, &questions)
        .await
        .with_context(|| format!("Failed to seed {}", args.database_url))?;
    tracing::debug!(question_ids = ?report.question_ids, "Imported questions");

    println!(
        "Seeded {} categories and {} questions into {}",
        report.categories,
        report.question_ids.len(),
        args.database_url
    );

    pool.close().await;
    Ok(())
}

async fn load_questions(path: &Path) -> Result<Vec<NewQuestion>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let questions: Vec<NewQuestion> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    for (index, question) in questions.iter().enumerate() {
        // Missing fields would otherwise fail halfway through the import
        if question.question.is_none() || question.answer.is_none() {
            bail!(
                "Question #{} in {} is invalid: question and answer are required",
                index + 1,
                path.display()
            );
        }
        question
            .validate()
            .with_context(|| format!("Question #{} in {} is invalid", index + 1, path.display()))?;
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn load(json: &str) -> Result<Vec<NewQuestion>> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(&path, json).unwrap();
        load_questions(&path).await
    }

    #[tokio::test]
    async fn loads_valid_questions() {
        let questions = load(
            r#"[{"question": "Q?", "answer": "A", "category": "3", "difficulty": 2}]"#,
        )
        .await
        .unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, Some(3));
        assert_eq!(questions[0].difficulty, Some(2));
    }

    #[tokio::test]
    async fn rejects_missing_answer() {
        let err = load(r#"[{"question": "Q?"}]"#).await.unwrap_err();
        assert!(err.to_string().contains("#1"));
    }

    #[tokio::test]
    async fn rejects_malformed_file() {
        assert!(load("{").await.is_err());
    }

    #[test]
    fn default_category_ids_are_sequential() {
        for (index, (id, _)) in DEFAULT_CATEGORIES.iter().enumerate() {
            assert_eq!(*id, index as i64 + 1);
        }
    }
}
