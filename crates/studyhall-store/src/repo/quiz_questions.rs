//! Quiz question repository

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension};
use studyhall_core::{QuizQuestion, StudyhallError};

/// SQLite repository for quiz questions
pub struct QuizQuestionRepo;

impl QuizQuestionRepo {
    /// Insert a new quiz question
    ///
    /// Returns the persisted question with its assigned row id, or
    /// `None` when the question text is already present (logged, table
    /// unchanged).
    pub fn create(conn: &Connection, question: &QuizQuestion) -> Result<Option<QuizQuestion>> {
        let result = conn
            .execute(
                "INSERT INTO quizQuestions (question, answer, difficulty) VALUES (?1, ?2, ?3)",
                rusqlite::params![question.question, question.answer, question.difficulty],
            )
            .map_err(from_rusqlite);

        match result {
            Ok(_) => {
                let mut created = question.clone();
                created.id = Some(conn.last_insert_rowid());
                Ok(Some(created))
            }
            Err(err) if err.is_constraint_violation() => {
                tracing::warn!(question = %question.question, %err, "quiz question create skipped");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch a quiz question by its unique question text
    pub fn find_by_question(conn: &Connection, text: &str) -> Result<Option<QuizQuestion>> {
        conn.query_row(
            "SELECT id, question, answer, difficulty FROM quizQuestions WHERE question = ?1",
            [text],
            Self::map_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all quiz questions ordered by id
    pub fn list(conn: &Connection) -> Result<Vec<QuizQuestion>> {
        let mut stmt = conn
            .prepare("SELECT id, question, answer, difficulty FROM quizQuestions ORDER BY id")
            .map_err(from_rusqlite)?;

        let questions = stmt
            .query_map([], Self::map_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(questions)
    }

    /// Apply the non-empty supplied fields and persist in one commit
    pub fn update(
        conn: &Connection,
        question: &mut QuizQuestion,
        text: &str,
        answer: &str,
        difficulty: &str,
    ) -> Result<()> {
        let id = Self::require_id(question)?;
        question.apply_update(text, answer, difficulty);

        conn.execute(
            "UPDATE quizQuestions SET question = ?1, answer = ?2, difficulty = ?3 WHERE id = ?4",
            rusqlite::params![question.question, question.answer, question.difficulty, id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Remove the quiz question row
    pub fn delete(conn: &Connection, question: &QuizQuestion) -> Result<()> {
        let id = Self::require_id(question)?;
        conn.execute("DELETE FROM quizQuestions WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Number of quiz question rows
    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM quizQuestions", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    fn require_id(question: &QuizQuestion) -> Result<i64> {
        question.id.ok_or_else(|| StudyhallError::NotFound {
            entity: "QuizQuestion",
            id: question.question.chars().take(32).collect(),
        })
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<QuizQuestion> {
        let id: i64 = row.get(0)?;
        let text: String = row.get(1)?;
        let answer: String = row.get(2)?;
        let difficulty: String = row.get(3)?;

        let mut question = QuizQuestion::new(text, answer, difficulty);
        question.id = Some(id);
        Ok(question)
    }
}
