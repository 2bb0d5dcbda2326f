use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{error, info};

use super::error::Result;
use super::record::QARecord;

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS faq (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Accessor for the single-table Q&A log
///
/// Holds only the database path. Every operation opens its own connection and
/// commits on its own, so the accessor is cheap to clone into request tasks.
#[derive(Debug, Clone)]
pub struct FaqStore {
    path: PathBuf,
}

impl FaqStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Create the `faq` table if it does not exist
    ///
    /// Safe to call on every start.
    pub fn initialize(&self) -> Result<()> {
        info!(path = %self.path.display(), "Initializing SQLite database");
        let conn = self.connect()?;
        conn.execute(CREATE_TABLE_SQL, [])?;

        if Self::has_table(&conn)? {
            info!("Table 'faq' is ready");
        } else {
            error!("Table 'faq' was not created");
        }
        Ok(())
    }

    /// Whether the `faq` table is present
    pub fn table_exists(&self) -> Result<bool> {
        let conn = self.connect()?;
        Self::has_table(&conn)
    }

    fn has_table(conn: &Connection) -> Result<bool> {
        let name: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'faq'",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(name.is_some())
    }

    /// Append a question/answer pair, returning its id
    pub fn insert(&self, question: &str, answer: &str) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO faq (question, answer) VALUES (?1, ?2)",
            params![question, answer],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Total number of stored records
    pub fn count(&self) -> Result<u64> {
        let conn = self.connect()?;
        let total: i64 = conn.query_row("SELECT COUNT(*) FROM faq", [], |row| row.get(0))?;
        Ok(total as u64)
    }

    /// The `limit` most recent records, newest first
    pub fn recent(&self, limit: usize) -> Result<Vec<QARecord>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, question, answer, created_at FROM faq ORDER BY id DESC LIMIT ?1",
        )?;

        let records = stmt
            .query_map(params![limit as i64], |row| {
                Ok(QARecord {
                    id: row.get(0)?,
                    question: row.get(1)?,
                    answer: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Every stored question, in insertion order
    pub fn all_questions(&self) -> Result<Vec<String>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare("SELECT question FROM faq ORDER BY id")?;
        let questions = stmt
            .query_map([], |row| row.get(0))?
            .collect::<std::result::Result<Vec<String>, _>>()?;
        Ok(questions)
    }

    /// Run a store operation on the blocking thread pool
    pub async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&FaqStore) -> Result<T> + Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || op(&store)).await?
    }
}
