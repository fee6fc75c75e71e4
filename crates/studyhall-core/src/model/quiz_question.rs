use serde_json::{json, Value};
use std::fmt;

/// QuizQuestion - one question/answer pair with a difficulty label
#[derive(Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    /// Surrogate key, None until the row is persisted
    pub id: Option<i64>,

    /// Unique question text
    pub question: String,

    /// Answer text
    pub answer: String,

    /// Difficulty label (free-form, e.g. "easy")
    pub difficulty: String,
}

impl QuizQuestion {
    /// Create a new QuizQuestion
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            question: question.into(),
            answer: answer.into(),
            difficulty: difficulty.into(),
        }
    }

    /// Plain key/value snapshot of the persisted fields
    pub fn snapshot(&self) -> Value {
        json!({
            "id": self.id,
            "question": self.question,
            "answer": self.answer,
            "difficulty": self.difficulty,
        })
    }

    /// Apply only the non-empty supplied fields
    pub fn apply_update(&mut self, question: &str, answer: &str, difficulty: &str) {
        if !question.is_empty() {
            self.question = question.to_string();
        }
        if !answer.is_empty() {
            self.answer = answer.to_string();
        }
        if !difficulty.is_empty() {
            self.difficulty = difficulty.to_string();
        }
    }
}

impl fmt::Display for QuizQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
