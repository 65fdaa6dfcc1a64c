//! Student persistence.
//!
//! [`StudentStore`] is the seam between handlers and the database. The
//! production implementation is [`SqlStore`], which runs every statement on
//! one shared libsql connection with all values bound as parameters.

use libsql::params::Params;
use libsql::{Connection, Value};

use super::{Record, Student};
use crate::Result;
use crate::db::Handle;
use crate::router::BoxFuture;

/// Value of `status` for rows visible to list queries.
pub const ACTIVE: i64 = 1;

/// Optional extra predicate on list queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Search {
    Name(String),
    Phone(String),
}

impl Search {
    /// Interpret the `search_type`/`search_value` pair. Unknown types mean no
    /// extra filter.
    pub fn from_query(search_type: &str, value: String) -> Option<Self> {
        match search_type {
            "name" => Some(Search::Name(value)),
            "phone" => Some(Search::Phone(value)),
            _ => None,
        }
    }
}

/// List query filter. All parts are ANDed with the active-status check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub id: Option<i64>,
    pub search: Option<Search>,
}

/// Storage operations for students.
pub trait StudentStore: Send + Sync {
    /// Insert a new active row and return its id.
    fn insert<'a>(&'a self, record: &'a Record) -> BoxFuture<'a, Result<i64>>;

    /// Overwrite the writable fields of row `id`. Returns rows affected.
    fn update<'a>(&'a self, id: i64, record: &'a Record) -> BoxFuture<'a, Result<u64>>;

    /// Active rows matching `filter`, in store order.
    fn list<'a>(&'a self, filter: &'a Filter) -> BoxFuture<'a, Result<Vec<Student>>>;

    /// Permanently delete row `id`. Returns rows affected.
    fn remove(&self, id: i64) -> BoxFuture<'_, Result<u64>>;
}

/// libsql-backed store.
#[derive(Clone)]
pub struct SqlStore {
    handle: Handle,
}

impl SqlStore {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    fn conn(&self) -> &Connection {
        self.handle.connection()
    }

    async fn insert_row(&self, record: &Record) -> Result<i64> {
        let params = libsql::params![
            record.display_name(),
            record.name.clone(),
            record.phone_no.clone(),
            record.address.clone()
        ];
        let mut rows = self.conn().query(INSERT, params).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| crate::Error::Internal("insert returned no id".into()))?;
        Ok(row.get::<i64>(0)?)
    }

    async fn update_row(&self, id: i64, record: &Record) -> Result<u64> {
        let params = libsql::params![
            record.name.clone(),
            record.display_name(),
            record.phone_no.clone(),
            record.address.clone(),
            id
        ];
        Ok(self.conn().execute(UPDATE, params).await?)
    }

    async fn select_rows(&self, filter: &Filter) -> Result<Vec<Student>> {
        let (sql, values) = list_query(filter);
        let mut rows = self.conn().query(&sql, Params::Positional(values)).await?;

        let mut students = Vec::new();
        while let Some(row) = rows.next().await? {
            students.push(Student {
                id: row.get(0)?,
                name: row.get(1)?,
                display_name: row.get(2)?,
                phone_no: row.get(3)?,
                address: row.get(4)?,
            });
        }
        Ok(students)
    }

    async fn delete_row(&self, id: i64) -> Result<u64> {
        Ok(self.conn().execute(DELETE, libsql::params![id]).await?)
    }
}

const INSERT: &str = "INSERT INTO tbl_student (display_name, name, phone_no, address) \
                      VALUES (?1, ?2, ?3, ?4) RETURNING id";

const UPDATE: &str = "UPDATE tbl_student \
                      SET name = ?1, display_name = ?2, phone_no = ?3, address = ?4 \
                      WHERE id = ?5";

const SELECT: &str = "SELECT id, name, display_name, phone_no, address \
                      FROM tbl_student WHERE status = ?";

const DELETE: &str = "DELETE FROM tbl_student WHERE id = ?1";

/// Build the list statement and its bound values.
fn list_query(filter: &Filter) -> (String, Vec<Value>) {
    let mut sql = String::from(SELECT);
    let mut values = vec![Value::Integer(ACTIVE)];

    if let Some(id) = filter.id {
        sql.push_str(" AND id = ?");
        values.push(Value::Integer(id));
    }
    match &filter.search {
        Some(Search::Name(name)) => {
            sql.push_str(" AND name = ?");
            values.push(Value::Text(name.clone()));
        }
        Some(Search::Phone(phone)) => {
            sql.push_str(" AND phone_no = ?");
            values.push(Value::Text(phone.clone()));
        }
        None => {}
    }

    (sql, values)
}

impl StudentStore for SqlStore {
    fn insert<'a>(&'a self, record: &'a Record) -> BoxFuture<'a, Result<i64>> {
        Box::pin(self.insert_row(record))
    }

    fn update<'a>(&'a self, id: i64, record: &'a Record) -> BoxFuture<'a, Result<u64>> {
        Box::pin(self.update_row(id, record))
    }

    fn list<'a>(&'a self, filter: &'a Filter) -> BoxFuture<'a, Result<Vec<Student>>> {
        Box::pin(self.select_rows(filter))
    }

    fn remove(&self, id: i64) -> BoxFuture<'_, Result<u64>> {
        Box::pin(self.delete_row(id))
    }
}
