//! Quiz score repository

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};
use studyhall_core::{QuizScore, StudyhallError};

/// SQLite repository for quiz scores
pub struct QuizScoreRepo;

impl QuizScoreRepo {
    /// Insert a new quiz score
    ///
    /// Returns the persisted score with its assigned row id, or `None`
    /// when the email is already present (logged, table unchanged).
    pub fn create(conn: &Connection, score: &QuizScore) -> Result<Option<QuizScore>> {
        let result = conn
            .execute(
                "INSERT INTO quizScores (email, score) VALUES (?1, ?2)",
                rusqlite::params![score.email, score.score],
            )
            .map_err(from_rusqlite);

        match result {
            Ok(_) => {
                let mut created = score.clone();
                created.id = Some(conn.last_insert_rowid());
                Ok(Some(created))
            }
            Err(err) if err.is_constraint_violation() => {
                tracing::warn!(email = %score.email, %err, "quiz score create skipped");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch a quiz score by email
    pub fn find_by_email(conn: &Connection, email: &str) -> Result<Option<QuizScore>> {
        conn.query_row(
            "SELECT id, email, score FROM quizScores WHERE email = ?1",
            [email],
            Self::map_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Apply the supplied fields and persist in one commit
    ///
    /// Empty email leaves the email unchanged; `None` leaves the score
    /// unchanged.
    pub fn update(
        conn: &Connection,
        score: &mut QuizScore,
        email: &str,
        new_score: Option<i64>,
    ) -> Result<()> {
        let id = Self::require_id(score)?;
        score.apply_update(email, new_score);

        conn.execute(
            "UPDATE quizScores SET email = ?1, score = ?2 WHERE id = ?3",
            rusqlite::params![score.email, score.score, id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Remove the quiz score row
    pub fn delete(conn: &Connection, score: &QuizScore) -> Result<()> {
        let id = Self::require_id(score)?;
        conn.execute("DELETE FROM quizScores WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Number of quiz score rows
    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM quizScores", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    fn require_id(score: &QuizScore) -> Result<i64> {
        score.id.ok_or_else(|| StudyhallError::NotFound {
            entity: "QuizScore",
            id: score.email.clone(),
        })
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<QuizScore> {
        let id: i64 = row.get(0)?;
        let email: String = row.get(1)?;
        let value: i64 = row.get(2)?;

        let mut score = QuizScore::new(email, value);
        score.id = Some(id);
        Ok(score)
    }
}
