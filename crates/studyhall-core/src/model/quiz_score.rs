use serde_json::{json, Value};
use std::fmt;

/// QuizScore - one quiz result keyed by email
#[derive(Debug, Clone, PartialEq)]
pub struct QuizScore {
    /// Surrogate key, None until the row is persisted
    pub id: Option<i64>,

    /// Unique email address of the quiz taker
    pub email: String,

    /// Integer score
    pub score: i64,
}

impl QuizScore {
    /// Create a new QuizScore
    pub fn new(email: impl Into<String>, score: i64) -> Self {
        Self {
            id: None,
            email: email.into(),
            score,
        }
    }

    /// Plain key/value snapshot of the persisted fields
    pub fn snapshot(&self) -> Value {
        json!({
            "id": self.id,
            "email": self.email,
            "score": self.score,
        })
    }

    /// Apply only the supplied fields
    ///
    /// An empty email leaves the email unchanged; `None` leaves the
    /// score unchanged.
    pub fn apply_update(&mut self, email: &str, score: Option<i64>) {
        if !email.is_empty() {
            self.email = email.to_string();
        }
        if let Some(score) = score {
            self.score = score;
        }
    }
}

impl fmt::Display for QuizScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
