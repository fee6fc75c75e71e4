//! Post repository
//!
//! Posts carry a filename reference to an image in the upload directory;
//! the read path loads and base64-encodes that file, so reading a post
//! is an I/O operation, not a pure accessor.

use crate::errors::{from_rusqlite, Result};
use crate::images::ImageStore;
use rusqlite::{Connection, OptionalExtension, Transaction};
use serde_json::Value;
use studyhall_core::{Post, StudyhallError};

/// SQLite repository for posts
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post
    ///
    /// Returns the persisted post with its assigned row id, or `None`
    /// when an integrity constraint is violated (e.g. the owning user
    /// does not exist).
    pub fn create(conn: &Connection, post: &Post) -> Result<Option<Post>> {
        match Self::insert(conn, post) {
            Ok(created) => Ok(Some(created)),
            Err(err) if err.is_constraint_violation() => {
                tracing::warn!(user_id = ?post.user_id, %err, "post create skipped");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Insert within a caller-owned transaction (used by user create)
    pub(crate) fn insert_tx(tx: &Transaction, post: &Post) -> Result<Post> {
        Self::insert(tx, post)
    }

    fn insert(conn: &Connection, post: &Post) -> Result<Post> {
        let user_id = post.user_id.ok_or_else(|| StudyhallError::InvalidInput {
            reason: "post has no owning user".to_string(),
        })?;

        conn.execute(
            "INSERT INTO posts (note, image, userID) VALUES (?1, ?2, ?3)",
            rusqlite::params![post.note, post.image, user_id],
        )
        .map_err(from_rusqlite)?;

        let mut created = post.clone();
        created.id = Some(conn.last_insert_rowid());
        created.user_id = Some(user_id);
        Ok(created)
    }

    /// Fetch a post by id
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Post>> {
        conn.query_row(
            "SELECT id, note, image, userID FROM posts WHERE id = ?1",
            [id],
            Self::map_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List a user's posts ordered by id
    pub fn list_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Post>> {
        let mut stmt = conn
            .prepare("SELECT id, note, image, userID FROM posts WHERE userID = ?1 ORDER BY id")
            .map_err(from_rusqlite)?;

        let posts = stmt
            .query_map([user_id], Self::map_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(posts)
    }

    /// Full read snapshot: persisted fields plus the base64-encoded image
    ///
    /// Blocks on the file read; a missing image file is an Io error.
    pub fn read(post: &Post, images: &ImageStore) -> Result<Value> {
        let mut snapshot = post.snapshot();
        snapshot["base64"] = Value::String(images.read_encoded(&post.image)?);
        Ok(snapshot)
    }

    /// Apply the non-empty supplied fields and persist in one commit
    pub fn update(conn: &Connection, post: &mut Post, note: &str, image: &str) -> Result<()> {
        let id = Self::require_id(post)?;
        post.apply_update(note, image);

        conn.execute(
            "UPDATE posts SET note = ?1, image = ?2 WHERE id = ?3",
            rusqlite::params![post.note, post.image, id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Remove the post row
    pub fn delete(conn: &Connection, post: &Post) -> Result<()> {
        let id = Self::require_id(post)?;
        conn.execute("DELETE FROM posts WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }

    /// Number of post rows
    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    fn require_id(post: &Post) -> Result<i64> {
        post.id.ok_or_else(|| StudyhallError::NotFound {
            entity: "Post",
            id: post.note.chars().take(32).collect(),
        })
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Post> {
        let id: i64 = row.get(0)?;
        let note: String = row.get(1)?;
        let image: String = row.get(2)?;
        let user_id: i64 = row.get(3)?;

        let mut post = Post::for_user(user_id, note, image);
        post.id = Some(id);
        Ok(post)
    }
}
