//! HTTP route handlers.

use std::io;
use std::path::Path;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{DateTime, Local};
use tracing::error;

use super::dto::{ErrorResponse, FileEntry, ParseQuery, ParseResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pairings/parse", post(parse_pairings))
        .route("/files", get(list_files))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse an uploaded pairing document.
///
/// The body is the raw document; `?limit=k` bounds the number of pairings
/// returned. Extraction failure is a 422, never an empty success.
async fn parse_pairings(
    State(state): State<AppState>,
    Query(query): Query<ParseQuery>,
    body: Bytes,
) -> Result<Json<ParseResponse>, AppError> {
    let outcome = state
        .cache
        .get_or_parse(state.extractor.as_ref(), &body, query.limit)
        .await
        .map_err(|e| AppError::UnprocessableDocument {
            message: e.to_string(),
        })?;

    Ok(Json(ParseResponse::from_outcome(&outcome)))
}

/// List the published pairing documents, newest first.
async fn list_files(State(state): State<AppState>) -> Result<Json<Vec<FileEntry>>, AppError> {
    let entries = read_document_entries(&state.data_dir).map_err(|e| AppError::Internal {
        message: format!("failed to read data directory: {e}"),
    })?;
    Ok(Json(entries))
}

/// Collect the `.txt` documents in `dir`, newest first.
fn read_document_entries(dir: &Path) -> io::Result<Vec<FileEntry>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };

        let metadata = entry.metadata()?;
        let modified = metadata.modified()?;

        files.push((
            modified,
            FileEntry {
                name: name.to_string(),
                size: metadata.len(),
                last_modified: DateTime::<Local>::from(modified).to_rfc3339(),
            },
        ));
    }

    files.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(files.into_iter().map(|(_, entry)| entry).collect())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The document could not be turned into text.
    UnprocessableDocument { message: String },

    /// Anything else.
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::UnprocessableDocument { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
