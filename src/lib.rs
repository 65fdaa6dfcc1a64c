//! Student registry - a small HTTP service for student records.
//!
//! - **Config**: Layered configuration (file → env → CLI)
//! - **Database**: libsql/Turso connection setup and table bootstrap
//! - **Router**: HTTP routing with path parameters
//! - **Server**: Hyper-based HTTP server
//! - **Module**: Trait for pluggable route groups
//! - **Student**: the student routes, validation, and store
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use student_registry::{ConfigLoader, Module, Router, SqlStore, Students};
//!
//! #[tokio::main]
//! async fn main() -> student_registry::Result<()> {
//!     let config = ConfigLoader::default().load(None, None, None, None)?;
//!     let db = student_registry::db::open(&config.database.url).await?;
//!
//!     let mut router = Router::new();
//!     Students::new(Arc::new(SqlStore::new(db))).routes(&mut router);
//!
//!     let server = student_registry::server::start(config, router.into_handle()).await?;
//!     tokio::signal::ctrl_c().await?;
//!     server.shutdown().await
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod module;
pub mod response;
pub mod router;
pub mod server;
pub mod student;

// Re-export main types at crate root
pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};
pub use module::Module;
pub use router::{Context, Router};
pub use student::{SqlStore, Student, StudentStore, Students};
