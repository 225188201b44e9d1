//! Student HTTP Routes
//!
//! Maps the student record operations onto REST endpoints:
//!
//! - `GET    /students/all`
//! - `GET    /students/passed`
//! - `GET    /students/average-grade`
//! - `GET    /students/:id`
//! - `POST   /students`
//! - `PUT    /students/:id`
//! - `DELETE /students/:id`

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderName, StatusCode},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::students::{Student, StudentError, StudentInput, StudentService};

// ==================
// Shared State
// ==================

/// Student state shared across handlers
pub struct StudentsState {
    pub service: StudentService,
    pub metrics: MetricsRegistry,
    pub started_at: DateTime<Utc>,
}

impl StudentsState {
    /// Create state over an existing service
    pub fn new(service: StudentService) -> Self {
        Self {
            service,
            metrics: MetricsRegistry::new(),
            started_at: Utc::now(),
        }
    }

    /// Create state holding the four startup students
    pub fn seeded() -> Self {
        Self::new(StudentService::seeded())
    }

    /// Counters plus the record count read from the store now
    pub fn metrics_json(&self) -> serde_json::Value {
        let students = self.service.count().unwrap_or(0) as u64;
        self.metrics.to_json(students)
    }
}

impl Default for StudentsState {
    fn default() -> Self {
        Self::seeded()
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&StudentError> for ErrorResponse {
    fn from(err: &StudentError) -> Self {
        Self {
            error: err.message().to_string(),
            code: err.status_code(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

type Rejection = (StatusCode, Json<ErrorResponse>);

// ==================
// Student Routes
// ==================

/// Create student routes
pub fn student_routes(state: Arc<StudentsState>) -> Router {
    Router::new()
        .route("/students", post(add_student_handler))
        .route("/students/all", get(list_all_handler))
        .route("/students/passed", get(list_passed_handler))
        .route("/students/average-grade", get(average_grade_handler))
        .route(
            "/students/:id",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Log, count and convert a failed operation
fn reject(state: &StudentsState, operation: &str, err: StudentError) -> Rejection {
    let event = match &err {
        StudentError::InvalidArgument(_) => {
            state.metrics.increment_rejected();
            Event::RequestRejected
        }
        StudentError::NotFound(_) => {
            state.metrics.increment_not_found();
            Event::RecordNotFound
        }
        StudentError::Storage(_) => {
            state.metrics.increment_failed();
            Event::RequestFailed
        }
    };
    log_event_with_fields(event, &[("operation", operation), ("reason", err.message())]);

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(&err)))
}

fn path_id(
    state: &StudentsState,
    operation: &str,
    id: Result<Path<i64>, PathRejection>,
) -> Result<i64, Rejection> {
    id.map(|Path(id)| id).map_err(|rejection| {
        reject(
            state,
            operation,
            StudentError::InvalidArgument(format!("Not accepted ID: {}", rejection.body_text())),
        )
    })
}

fn json_body(
    state: &StudentsState,
    operation: &str,
    body: Result<Json<StudentInput>, JsonRejection>,
) -> Result<StudentInput, Rejection> {
    body.map(|Json(input)| input).map_err(|rejection| {
        reject(
            state,
            operation,
            StudentError::InvalidArgument(format!(
                "Invalid student data. {}",
                rejection.body_text()
            )),
        )
    })
}

// ==================
// Collection Handlers
// ==================

async fn list_all_handler(
    State(state): State<Arc<StudentsState>>,
) -> Result<Json<Vec<Student>>, Rejection> {
    state.metrics.increment_requests();
    let students = state
        .service
        .list_all()
        .map_err(|e| reject(&state, "list_all", e))?;

    let count = students.len().to_string();
    log_event_with_fields(Event::StudentListed, &[("filter", "all"), ("count", count.as_str())]);
    Ok(Json(students))
}

async fn list_passed_handler(
    State(state): State<Arc<StudentsState>>,
) -> Result<Json<Vec<Student>>, Rejection> {
    state.metrics.increment_requests();
    let students = state
        .service
        .list_passed()
        .map_err(|e| reject(&state, "list_passed", e))?;

    let count = students.len().to_string();
    log_event_with_fields(
        Event::StudentListed,
        &[("filter", "passed"), ("count", count.as_str())],
    );
    Ok(Json(students))
}

async fn average_grade_handler(
    State(state): State<Arc<StudentsState>>,
) -> Result<Json<f64>, Rejection> {
    state.metrics.increment_requests();
    let average = state
        .service
        .average_grade()
        .map_err(|e| reject(&state, "average_grade", e))?;

    let rendered = average.to_string();
    log_event_with_fields(Event::AverageComputed, &[("average", rendered.as_str())]);
    Ok(Json(average))
}

// ==================
// Record Handlers
// ==================

async fn get_student_handler(
    State(state): State<Arc<StudentsState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Student>, Rejection> {
    state.metrics.increment_requests();
    let id = path_id(&state, "get", id)?;
    let student = state.service.get(id).map_err(|e| reject(&state, "get", e))?;

    let id = id.to_string();
    log_event_with_fields(Event::StudentFetched, &[("id", id.as_str())]);
    Ok(Json(student))
}

async fn add_student_handler(
    State(state): State<Arc<StudentsState>>,
    body: Result<Json<StudentInput>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Student>), Rejection> {
    state.metrics.increment_requests();
    let input = json_body(&state, "add", body)?;
    let student = state.service.add(input).map_err(|e| reject(&state, "add", e))?;

    state.metrics.increment_created();
    let id = student.id.to_string();
    log_event_with_fields(
        Event::StudentCreated,
        &[("id", id.as_str()), ("name", student.name.as_str())],
    );

    let location = format!("/api/students/{}", student.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(student),
    ))
}

async fn update_student_handler(
    State(state): State<Arc<StudentsState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<StudentInput>, JsonRejection>,
) -> Result<Json<Student>, Rejection> {
    state.metrics.increment_requests();
    let id = path_id(&state, "update", id)?;
    let input = json_body(&state, "update", body)?;
    let student = state
        .service
        .update(id, input)
        .map_err(|e| reject(&state, "update", e))?;

    state.metrics.increment_updated();
    let id = id.to_string();
    log_event_with_fields(Event::StudentUpdated, &[("id", id.as_str())]);
    Ok(Json(student))
}

async fn delete_student_handler(
    State(state): State<Arc<StudentsState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, Rejection> {
    state.metrics.increment_requests();
    let id = path_id(&state, "delete", id)?;
    let message = state
        .service
        .delete(id)
        .map_err(|e| reject(&state, "delete", e))?;

    state.metrics.increment_deleted();
    let id = id.to_string();
    log_event_with_fields(Event::StudentDeleted, &[("id", id.as_str())]);
    Ok(Json(MessageResponse { message }))
}
