use serde_json::{json, Value};
use std::fmt;

/// Post - a note owned by a user, with an optional image attachment
///
/// The image field is a bare filename resolved against the configured
/// upload directory at read time; the file itself is never stored in
/// the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Surrogate key, None until the row is persisted
    pub id: Option<i64>,

    /// Foreign key to the owning user, None until attached
    pub user_id: Option<i64>,

    /// Note body
    pub note: String,

    /// Image filename under the upload directory
    pub image: String,
}

impl Post {
    /// Create a new unattached Post
    pub fn new(note: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id: None,
            note: note.into(),
            image: image.into(),
        }
    }

    /// Create a new Post owned by the given user
    pub fn for_user(user_id: i64, note: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            note: note.into(),
            image: image.into(),
        }
    }

    /// Plain key/value snapshot of the persisted fields
    ///
    /// Does not touch the filesystem. The read path in the store layer
    /// extends this with the base64-encoded image payload.
    pub fn snapshot(&self) -> Value {
        json!({
            "id": self.id,
            "userID": self.user_id,
            "note": self.note,
            "image": self.image,
        })
    }

    /// Apply only the non-empty supplied fields
    pub fn apply_update(&mut self, note: &str, image: &str) {
        if !note.is_empty() {
            self.note = note.to_string();
        }
        if !image.is_empty() {
            self.image = image.to_string();
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post() {
        let post = Post::for_user(3, "hello", "logo.png");
        assert_eq!(post.user_id, Some(3));
        assert_eq!(post.note, "hello");
        assert_eq!(post.image, "logo.png");
        assert!(post.id.is_none());
    }

    #[test]
    fn test_snapshot_fields() {
        let post = Post::for_user(1, "a note", "pic.png");
        let snap = post.snapshot();
        assert_eq!(snap["userID"], 1);
        assert_eq!(snap["note"], "a note");
        assert_eq!(snap["image"], "pic.png");
        assert!(snap["id"].is_null());
    }

    #[test]
    fn test_apply_update_empty_skip() {
        let mut post = Post::new("original", "old.png");
        post.apply_update("", "new.png");
        assert_eq!(post.note, "original");
        assert_eq!(post.image, "new.png");
    }

    #[test]
    fn test_display_is_json() {
        let post = Post::for_user(2, "n", "i.png");
        let parsed: Value = serde_json::from_str(&post.to_string()).unwrap();
        assert_eq!(parsed["note"], "n");
    }
}
