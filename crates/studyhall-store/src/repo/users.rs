//! User repository
//!
//! Persists users together with their owned posts. The user and its
//! posts always move in one transaction: create inserts both, delete
//! removes posts first and then the user.

use crate::errors::{from_rusqlite, Result};
use crate::images::ImageStore;
use crate::repo::posts::PostRepo;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Transaction};
use serde_json::Value;
use studyhall_core::{StudyhallError, User};

/// Date-of-birth column format
pub(crate) const DATE_FMT: &str = "%Y-%m-%d";

/// SQLite repository for users
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user and its in-memory posts in one transaction
    ///
    /// Returns the persisted user with assigned row ids, or `None` when a
    /// uniqueness/integrity constraint is violated (logged, transaction
    /// rolled back, table left unchanged).
    pub fn create(conn: &mut Connection, user: &User) -> Result<Option<User>> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        match Self::insert_tx(&tx, user) {
            Ok(created) => {
                tx.commit().map_err(from_rusqlite)?;
                Ok(Some(created))
            }
            Err(err) if err.is_constraint_violation() => {
                tracing::warn!(email = %user.email, %err, "user create skipped");
                // Dropping the transaction rolls back the pending insert
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn insert_tx(tx: &Transaction, user: &User) -> Result<User> {
        tx.execute(
            "INSERT INTO users (name, email, password, dob) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                user.name,
                user.email,
                user.stored_hash(),
                user.dob.format(DATE_FMT).to_string(),
            ],
        )
        .map_err(from_rusqlite)?;

        let user_id = tx.last_insert_rowid();
        let mut created = User::from_stored(
            user_id,
            user.name.clone(),
            user.email.clone(),
            user.stored_hash().to_string(),
            user.dob,
        );

        for post in &user.posts {
            let mut owned = post.clone();
            owned.user_id = Some(user_id);
            created.add_post(PostRepo::insert_tx(tx, &owned)?);
        }

        Ok(created)
    }

    /// Fetch a user by id, with posts hydrated
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<User>> {
        let user = conn
            .query_row(
                "SELECT id, name, email, password, dob FROM users WHERE id = ?1",
                [id],
                Self::map_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        match user {
            Some(mut user) => {
                user.posts = PostRepo::list_for_user(conn, id)?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Fetch a user by email, with posts hydrated
    pub fn find_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
        let user = conn
            .query_row(
                "SELECT id, name, email, password, dob FROM users WHERE email = ?1",
                [email],
                Self::map_row,
            )
            .optional()
            .map_err(from_rusqlite)?;

        match user {
            Some(mut user) => {
                if let Some(id) = user.id {
                    user.posts = PostRepo::list_for_user(conn, id)?;
                }
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// List all users ordered by id, with posts hydrated
    pub fn list(conn: &Connection) -> Result<Vec<User>> {
        let mut stmt = conn
            .prepare("SELECT id, name, email, password, dob FROM users ORDER BY id")
            .map_err(from_rusqlite)?;

        let mut users = stmt
            .query_map([], Self::map_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        drop(stmt);

        for user in &mut users {
            if let Some(id) = user.id {
                user.posts = PostRepo::list_for_user(conn, id)?;
            }
        }

        Ok(users)
    }

    /// Full read snapshot: user fields plus post snapshots with their
    /// base64-encoded image payloads
    ///
    /// Performs one blocking file read per post.
    pub fn read(user: &User, images: &ImageStore) -> Result<Value> {
        let mut snapshot = user.snapshot();
        let posts = user
            .posts
            .iter()
            .map(|post| PostRepo::read(post, images))
            .collect::<Result<Vec<_>>>()?;
        snapshot["posts"] = Value::Array(posts);
        Ok(snapshot)
    }

    /// Apply the non-empty supplied fields and persist in one commit
    pub fn update(
        conn: &Connection,
        user: &mut User,
        name: &str,
        email: &str,
        plain_password: &str,
    ) -> Result<()> {
        let id = Self::require_id(user)?;
        user.apply_update(name, email, plain_password);

        conn.execute(
            "UPDATE users SET name = ?1, email = ?2, password = ?3 WHERE id = ?4",
            rusqlite::params![user.name, user.email, user.stored_hash(), id],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    /// Remove the user and all its posts in one transaction
    pub fn delete(conn: &mut Connection, user: &User) -> Result<()> {
        let id = Self::require_id(user)?;
        let tx = conn.transaction().map_err(from_rusqlite)?;

        tx.execute("DELETE FROM posts WHERE userID = ?1", [id])
            .map_err(from_rusqlite)?;
        tx.execute("DELETE FROM users WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        tx.commit().map_err(from_rusqlite)?;
        tracing::debug!(user_id = id, "user deleted");

        Ok(())
    }

    /// Number of user rows
    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }

    fn require_id(user: &User) -> Result<i64> {
        user.id.ok_or_else(|| StudyhallError::NotFound {
            entity: "User",
            id: user.email.clone(),
        })
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        let id: i64 = row.get(0)?;
        let name: String = row.get(1)?;
        let email: String = row.get(2)?;
        let password_hash: String = row.get(3)?;
        let dob_text: String = row.get(4)?;

        // A dob that does not parse is stored-data corruption, not a
        // recoverable condition. Surface it through the query result.
        let dob = NaiveDate::parse_from_str(&dob_text, DATE_FMT).map_err(|err| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(err))
        })?;

        Ok(User::from_stored(id, name, email, password_hash, dob))
    }
}
