use chrono::{Datelike, Local, NaiveDate};
use serde_json::{json, Value};
use std::fmt;

use crate::password;

use super::post::Post;

/// Default password assigned when none is supplied at construction
const DEFAULT_PASSWORD: &str = "123qwerty";

/// User - an account row with owned posts
///
/// The password hash is private to this type: persistence goes through
/// `stored_hash`/`from_stored`, everything else only ever sees the
/// truncated diagnostic prefix.
#[derive(Clone, PartialEq)]
pub struct User {
    /// Surrogate key, None until the row is persisted
    pub id: Option<i64>,

    /// Display name (not unique)
    pub name: String,

    /// Unique email address
    pub email: String,

    /// Salted hash of the password, never the plaintext
    password_hash: String,

    /// Date of birth
    pub dob: NaiveDate,

    /// Posts owned by this user, hydrated by the repository
    pub posts: Vec<Post>,
}

impl User {
    /// Create a new User with the default password and today's date of birth
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            password_hash: password::hash_password(DEFAULT_PASSWORD),
            dob: Local::now().date_naive(),
            posts: Vec::new(),
        }
    }

    /// Set the password from plaintext, replacing the stored hash
    pub fn with_password(mut self, plain: &str) -> Self {
        self.set_password(plain);
        self
    }

    /// Set the date of birth
    pub fn with_dob(mut self, dob: NaiveDate) -> Self {
        self.dob = dob;
        self
    }

    /// Rehydrate a User from its persisted columns
    pub fn from_stored(
        id: i64,
        name: String,
        email: String,
        password_hash: String,
        dob: NaiveDate,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            email,
            password_hash,
            dob,
            posts: Vec::new(),
        }
    }

    /// Hash and store a new password
    pub fn set_password(&mut self, plain: &str) {
        self.password_hash = password::hash_password(plain);
    }

    /// Check a plaintext candidate against the stored hash
    pub fn check_password(&self, candidate: &str) -> bool {
        password::verify_password(&self.password_hash, candidate)
    }

    /// Check if the given email matches this user's email
    pub fn is_email(&self, email: &str) -> bool {
        self.email == email
    }

    /// Truncated prefix of the stored hash, for diagnostic display only
    pub fn password(&self) -> String {
        password::display_prefix(&self.password_hash)
    }

    /// Full stored hash, for the persistence layer only
    pub fn stored_hash(&self) -> &str {
        &self.password_hash
    }

    /// Date of birth rendered as MM-DD-YYYY
    pub fn dob_string(&self) -> String {
        self.dob.format("%m-%d-%Y").to_string()
    }

    /// Whole-year age as of the given date
    ///
    /// Counts a year only once the birthday has passed.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.dob.year();
        if (today.month(), today.day()) < (self.dob.month(), self.dob.day()) {
            age -= 1;
        }
        age
    }

    /// Whole-year age as of today
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }

    /// Attach a post to this user's in-memory post list
    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    /// Plain key/value snapshot of the persisted fields
    ///
    /// Posts are included as their own snapshots without image payloads;
    /// the store's read path substitutes the full I/O-bearing form.
    pub fn snapshot(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "dob": self.dob_string(),
            "age": self.age(),
            "posts": self.posts.iter().map(Post::snapshot).collect::<Vec<_>>(),
        })
    }

    /// Apply only the non-empty supplied fields
    ///
    /// Empty strings leave the corresponding field unchanged. A non-empty
    /// password is hashed before storage.
    pub fn apply_update(&mut self, name: &str, email: &str, plain_password: &str) {
        if !name.is_empty() {
            self.name = name.to_string();
        }
        if !email.is_empty() {
            self.email = email.to_string();
        }
        if !plain_password.is_empty() {
            self.set_password(plain_password);
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"***REDACTED***")
            .field("dob", &self.dob)
            .field("posts", &self.posts.len())
            .finish()
    }
}
