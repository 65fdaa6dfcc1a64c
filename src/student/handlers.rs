//! Request handlers for the student routes.
//!
//! Handlers validate input, make at most one store call, and answer with a
//! message or wrapped envelope. Store failures are logged here with their
//! cause; the caller only sees a fixed message.

use std::sync::Arc;

use hyper::StatusCode;
use tracing::{debug, error};

use super::store::{Filter, Search, StudentStore};
use super::{Change, StudentInput};
use crate::response::{self, HttpResponse};
use crate::router::Context;
use crate::{Error, Result};

const INVALID_BODY: &str = "Invalid request - please check your input data.";

/// Path value that lists every active student.
const ALL: &str = "all";

/// `POST /add-student` and `POST /update-student`.
///
/// A payload without an id (or with id `0`) creates a student; any other id
/// overwrites that row. Updating an id that does not exist still succeeds.
pub async fn add_or_update(ctx: Context, store: Arc<dyn StudentStore>) -> Result<HttpResponse> {
    let input = parse_input(&ctx).ok_or_else(|| Error::BadRequest(INVALID_BODY.into()))?;
    let change = input
        .validate()
        .map_err(|message| Error::BadRequest(message.into()))?;

    match change {
        Change::Create(record) => {
            let id = store.insert(&record).await.map_err(|e| {
                error!(error = %e, "Failed to insert student");
                Error::Store("There is an error while inserting Student.")
            })?;
            debug!(id, "Student inserted");
            Ok(response::ok("Student Added SuccessFully."))
        }
        Change::Update { id, record } => {
            let affected = store.update(id, &record).await.map_err(|e| {
                error!(error = %e, id, "Failed to update student");
                Error::Store("There is an error while updating Student.")
            })?;
            debug!(id, affected, "Student updated");
            Ok(response::ok("Student Update SuccessFully."))
        }
    }
}

/// Decode the body, which must be a JSON object. Arrays are not accepted as
/// positional fields.
fn parse_input(ctx: &Context) -> Option<StudentInput> {
    let fields: serde_json::Map<String, serde_json::Value> = ctx.json().ok()?;
    serde_json::from_value(serde_json::Value::Object(fields)).ok()
}

/// `GET /student-list/{student_id}?search_type=..&search_value=..`
pub async fn list(ctx: Context, store: Arc<dyn StudentStore>) -> Result<HttpResponse> {
    let student_id = ctx.param("student_id").unwrap_or_default();
    if student_id.is_empty() {
        return Err(Error::BadRequest("student id can't be blank.".into()));
    }

    let id = if student_id == ALL {
        None
    } else {
        match student_id.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                debug!(student_id, "Non-numeric student id matches nothing");
                return response::wrapped(StatusCode::OK, &Vec::<super::Student>::new());
            }
        }
    };

    let search_type = ctx.query("search_type").unwrap_or_default();
    let search_value = ctx.query("search_value").unwrap_or_default();
    let filter = Filter {
        id,
        search: Search::from_query(&search_type, search_value),
    };

    let students = store.list(&filter).await.map_err(|e| {
        error!(error = %e, ?filter, "Failed to list students");
        Error::Store("Error while fetching student data from db.")
    })?;
    debug!(count = students.len(), "Students listed");

    response::wrapped(StatusCode::OK, &students)
}

/// `POST /remove-student` with form field `student_id`.
///
/// The field is read from a url-encoded or multipart body, falling back to
/// the query string. Deletes the row outright, whatever its status.
pub async fn remove(ctx: Context, store: Arc<dyn StudentStore>) -> Result<HttpResponse> {
    let student_id = ctx.form_value("student_id").await.unwrap_or_default();
    if student_id.is_empty() {
        return Err(Error::BadRequest("Student id can't blank.".into()));
    }
    let id: i64 = student_id
        .parse()
        .map_err(|_| Error::BadRequest("Student id can't correct.".into()))?;

    let affected = store.remove(id).await.map_err(|e| {
        error!(error = %e, id, "Failed to remove student");
        Error::Store("There is an error while removing Student.")
    })?;
    debug!(id, affected, "Student removed");

    Ok(response::ok("Student Removed SuccessFully."))
}
