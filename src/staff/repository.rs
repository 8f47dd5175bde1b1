use crate::error::{RegistryError, Result};
use crate::staff::models::{Post, Worker};
use chrono::{Datelike, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};

/// Repository for the worker registry.
///
/// Holds only the database path; every operation opens its own
/// connection, commits, and closes it before returning.
pub struct StaffRepository {
    db_path: PathBuf,
}

impl StaffRepository {
    /// Open the repository and make sure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = StaffRepository {
            db_path: path.as_ref().to_path_buf(),
        };
        repo.ensure_schema()?;
        Ok(repo)
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }

    /// Create the `posts` and `workers` tables if absent. Safe to call
    /// any number of times.
    pub fn ensure_schema(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS posts (
                post_id INTEGER PRIMARY KEY AUTOINCREMENT,
                post_title TEXT NOT NULL UNIQUE
            )",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS workers (
                worker_id INTEGER PRIMARY KEY AUTOINCREMENT,
                worker_name TEXT NOT NULL,
                post_id INTEGER NOT NULL REFERENCES posts(post_id),
                worker_year INTEGER NOT NULL
            )",
            [],
        )?;

        Ok(())
    }

    /// Look up a post by exact title.
    pub fn find_post(&self, title: &str) -> Result<Option<Post>> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT post_id, post_title FROM posts WHERE post_title = ?1",
            [title],
            |row| {
                Ok(Post {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            },
        )
        .optional()
        .map_err(Into::into)
    }

    /// Return the id of the post with the given title, inserting it
    /// first if it does not exist yet.
    pub fn get_or_create_post(&self, title: &str) -> Result<i64> {
        if let Some(post) = self.find_post(title)? {
            return Ok(post.id);
        }

        let conn = self.connect()?;
        conn.execute("INSERT INTO posts (post_title) VALUES (?1)", [title])
            .map_err(|e| RegistryError::from_insert(e, "post", title))?;

        let id = conn.last_insert_rowid();
        tracing::debug!(title, id, "post created");
        Ok(id)
    }

    /// Insert a worker, resolving the post by title first.
    pub fn add_worker(&self, name: &str, post_title: &str, year: i32) -> Result<()> {
        let post_id = self.get_or_create_post(post_title)?;

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO workers (worker_name, post_id, worker_year)
             VALUES (?1, ?2, ?3)",
            params![name, post_id, year],
        )?;

        tracing::debug!(name, post_title, year, "worker added");
        Ok(())
    }

    /// All workers joined with their post title. Ordering is whatever
    /// the storage engine returns.
    pub fn get_all_workers(&self) -> Result<Vec<Worker>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT workers.worker_name, posts.post_title, workers.worker_year
             FROM workers
             JOIN posts ON posts.post_id = workers.post_id",
        )?;

        let workers = stmt.query_map([], worker_from_row)?;
        workers
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Workers whose tenure, measured against the current year, is at
    /// least `period` years.
    pub fn select_by_period(&self, period: i32) -> Result<Vec<Worker>> {
        self.select_by_period_as_of(Utc::now().year(), period)
    }

    /// Same filter with an explicit reference year, so callers (and
    /// tests) control the clock.
    pub fn select_by_period_as_of(&self, reference_year: i32, period: i32) -> Result<Vec<Worker>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT workers.worker_name, posts.post_title, workers.worker_year
             FROM workers
             JOIN posts ON posts.post_id = workers.post_id
             WHERE (?1 - workers.worker_year) >= ?2",
        )?;

        let workers = stmt.query_map(params![reference_year, period], worker_from_row)?;
        workers
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}

fn worker_from_row(row: &Row) -> std::result::Result<Worker, rusqlite::Error> {
    Ok(Worker {
        name: row.get(0)?,
        post: row.get(1)?,
        year: row.get(2)?,
    })
}
