//! Sample-data seed routine
//!
//! Builds a fixed set of users (each with a few generated notes) and
//! quiz questions and persists them. Intended to be re-runnable: a
//! record that already exists is skipped with a log line, and the run
//! continues. Only integrity violations are skipped; any other failure
//! aborts the run.

use crate::errors::Result;
use crate::migrations;
use crate::repo::{QuizQuestionRepo, UserRepo};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;
use studyhall_core::{Post, QuizQuestion, User};

/// Image filename attached to every generated note
const SEED_IMAGE: &str = "logo.png";

/// Outcome counts of a seed run
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SeedReport {
    pub users_created: usize,
    pub users_skipped: usize,
    pub questions_created: usize,
    pub questions_skipped: usize,
}

/// Apply migrations and seed the sample data
///
/// Each record is created independently: a uniqueness violation for one
/// record is terminal for that record only, never for the run.
pub fn run(conn: &mut Connection) -> Result<SeedReport> {
    migrations::apply_migrations(conn)?;

    let mut report = SeedReport::default();

    for user in sample_users() {
        match UserRepo::create(conn, &user)? {
            Some(created) => {
                tracing::info!(email = %created.email, "seeded user");
                report.users_created += 1;
            }
            None => {
                tracing::info!(email = %user.email, "records exist, duplicate email, or error");
                report.users_skipped += 1;
            }
        }
    }

    for question in sample_questions() {
        match QuizQuestionRepo::create(conn, &question)? {
            Some(_) => report.questions_created += 1,
            None => {
                tracing::info!(question = %question.question, "records exist, duplicate question, or error");
                report.questions_skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Fixed sample users, each carrying 1 to 3 generated notes
fn sample_users() -> Vec<User> {
    let roster: [(&str, &str, (i32, u32, u32)); 6] = [
        ("Ada Lopez", "ada@example.com", (2005, 3, 14)),
        ("Ben Carter", "ben@example.com", (2004, 11, 2)),
        ("Cleo Nguyen", "cleo@example.com", (2005, 7, 30)),
        ("Dev Patel", "dev@example.com", (2006, 1, 9)),
        ("Iris Fontaine", "iris@example.com", (2005, 9, 21)),
        ("Theo Brandt", "theo@example.com", (2004, 5, 5)),
    ];

    roster
        .iter()
        .enumerate()
        .map(|(i, (name, email, (y, m, d)))| {
            let mut user = User::new(*name, *email)
                .with_dob(NaiveDate::from_ymd_opt(*y, *m, *d).expect("valid seed date"));
            // 1 to 3 notes per user, varied deterministically
            for n in 0..=(i % 3) {
                let note = format!("#### {} note {}.\nGenerated by seed data.", name, n);
                user.add_post(Post::new(note, SEED_IMAGE));
            }
            user
        })
        .collect()
}

/// Fixed sample quiz questions
fn sample_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion::new(
            "Which SQL clause filters rows before grouping?",
            "WHERE",
            "easy",
        ),
        QuizQuestion::new(
            "What does a UNIQUE constraint guarantee?",
            "No two rows share a value in the constrained column",
            "easy",
        ),
        QuizQuestion::new(
            "Which SQLite journal mode lets readers proceed during a write?",
            "WAL",
            "medium",
        ),
    ]
}
