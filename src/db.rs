//! Database connection setup.
//!
//! Supports multiple backends:
//! - Local SQLite file: `path/to/db.sqlite` or `file:path` or `sqlite://path`
//! - In-memory: `:memory:`
//! - Remote Turso: `libsql://...` or `https://...` (requires TURSO_AUTH_TOKEN env var)

use libsql::{Builder, Connection, Database};
use tracing::info;

/// Schema for the student table. Rows default to active (`status = 1`).
const STUDENT_TABLE: &str = "CREATE TABLE IF NOT EXISTS tbl_student (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    display_name TEXT NOT NULL,
    name TEXT NOT NULL,
    phone_no TEXT NOT NULL,
    address TEXT NOT NULL,
    status INTEGER NOT NULL DEFAULT 1
)";

/// An open database together with the single connection shared by all
/// requests.
///
/// The `Database` is kept alive alongside the connection; for `:memory:` the
/// data lives only as long as both do.
#[derive(Clone)]
pub struct Handle {
    _database: std::sync::Arc<Database>,
    conn: Connection,
}

impl Handle {
    /// The shared connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Connect to the database.
///
/// # URL formats
/// - Local file: `mydata.db`, `file:path/to/db.sqlite`, `sqlite://path`
/// - In-memory: `:memory:`
/// - Remote Turso: `libsql://your-db.turso.io` (requires `TURSO_AUTH_TOKEN` env var)
pub async fn connect(url: &str) -> crate::Result<Database> {
    let db = if url.starts_with("libsql://") || url.starts_with("https://") {
        let token = std::env::var("TURSO_AUTH_TOKEN").map_err(|_| {
            crate::Error::Config("TURSO_AUTH_TOKEN not set for remote database".into())
        })?;
        Builder::new_remote(url.to_string(), token).build().await?
    } else if url == ":memory:" {
        Builder::new_local(":memory:").build().await?
    } else {
        // Local file - strip sqlite:// or file: prefix if present
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("file:"))
            .unwrap_or(url);
        Builder::new_local(path).build().await?
    };

    Ok(db)
}

/// Create the student table if it does not exist yet.
pub async fn bootstrap(conn: &Connection) -> crate::Result<()> {
    conn.execute(STUDENT_TABLE, ()).await?;
    Ok(())
}

/// Connect, open the shared connection, and make sure the schema exists.
pub async fn open(url: &str) -> crate::Result<Handle> {
    let database = connect(url).await?;
    let conn = database.connect()?;
    bootstrap(&conn).await?;
    info!("Database ready at {}", redact(url));
    Ok(Handle {
        _database: std::sync::Arc::new(database),
        conn,
    })
}

/// Strip any query string (which may carry credentials) before logging a URL.
fn redact(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}
