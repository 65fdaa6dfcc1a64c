//! The student records module.
//!
//! Registers the four student routes and owns the store they operate on:
//!
//! | Method | Path                           | Handler                         |
//! |--------|--------------------------------|---------------------------------|
//! | POST   | `/add-student`                 | [`handlers::add_or_update`]     |
//! | POST   | `/update-student`              | [`handlers::add_or_update`]     |
//! | POST   | `/remove-student`              | [`handlers::remove`]            |
//! | GET    | `/student-list/{student_id}`   | [`handlers::list`]              |

pub mod handlers;
pub mod store;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::module::Module;
use crate::router::Router;

pub use store::{Filter, Search, SqlStore, StudentStore};

/// A stored student as returned by list queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub phone_no: String,
    pub address: String,
}

/// Incoming add/update payload. Missing strings are treated as empty so that
/// validation can report exactly which field is blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub address: String,
}

/// The writable fields of a student after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub phone_no: String,
    pub address: String,
}

impl Record {
    /// Lower-cased copy of the name, stored alongside it.
    pub fn display_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// What an add/update payload asks for once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Create(Record),
    Update { id: i64, record: Record },
}

impl StudentInput {
    /// Check required fields in order and decide between create and update.
    ///
    /// Returns the caller-facing message of the first failing check.
    pub fn validate(self) -> Result<Change, &'static str> {
        if self.name.is_empty() {
            return Err("Name can't be blank.");
        }
        if self.phone_no.is_empty() {
            return Err("Phone number can't be blank.");
        }
        if !is_phone_number(&self.phone_no) {
            return Err("Mobile number not correct please enter correct number.");
        }
        if self.address.is_empty() {
            return Err("Address can't be blank.");
        }

        let record = Record {
            name: self.name,
            phone_no: self.phone_no,
            address: self.address,
        };
        Ok(match self.id {
            None | Some(0) => Change::Create(record),
            Some(id) => Change::Update { id, record },
        })
    }
}

/// Phone numbers are plain ASCII digits; no sign, spaces, or separators.
fn is_phone_number(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Route module for student records.
pub struct Students {
    store: Arc<dyn StudentStore>,
}

impl Students {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }
}

impl Module for Students {
    fn name(&self) -> &'static str {
        "students"
    }

    fn routes(&self, router: &mut Router) {
        for path in ["/add-student", "/update-student"] {
            let store = Arc::clone(&self.store);
            router.post(path, move |ctx| handlers::add_or_update(ctx, Arc::clone(&store)));
        }

        let store = Arc::clone(&self.store);
        router.post("/remove-student", move |ctx| handlers::remove(ctx, Arc::clone(&store)));

        // The bare paths exist so that a missing id reaches the handler and is
        // reported as a bad request rather than an unknown route.
        for path in ["/student-list/{student_id}", "/student-list/", "/student-list"] {
            let store = Arc::clone(&self.store);
            router.get(path, move |ctx| handlers::list(ctx, Arc::clone(&store)));
        }
    }
}
