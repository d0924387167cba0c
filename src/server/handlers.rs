//! Route handlers.
//!
//! Every pipeline failure is converted into an `{error: message}` envelope
//! with HTTP 200; no exception escapes a handler.

use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::warn;

use crate::config::REPORT_FILENAME;
use crate::contacts::ContactRecord;
use crate::extract::{self, DocumentPayload};
use crate::report;
use crate::tasks::TaskRequest;

use super::assets;
use super::AppState;

/// Static landing page.
pub async fn index() -> Html<&'static str> {
    Html(assets::INDEX_HTML)
}

#[derive(Debug, Deserialize)]
pub struct SummarizeBody {
    #[serde(default)]
    text: String,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextBody {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
pub struct QaBody {
    #[serde(default)]
    text: String,
    #[serde(default)]
    question: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareBody {
    #[serde(default)]
    text1: String,
    #[serde(default)]
    text2: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct DownloadBody {
    #[serde(default)]
    summary: String,
}

fn success_envelope(key: &str, text: String) -> Json<Value> {
    let mut map = Map::new();
    map.insert(key.to_string(), Value::String(text));
    Json(Value::Object(map))
}

fn error_envelope(message: impl std::fmt::Display) -> Json<Value> {
    Json(json!({ "error": message.to_string() }))
}

/// Run a task and wrap the outcome under the task's response key.
async fn run_task(state: &AppState, task: TaskRequest) -> Json<Value> {
    match state.runner.run(&task).await {
        Ok(text) => success_envelope(task.response_key(), text),
        Err(e) => {
            warn!(task = task.response_key(), error = %e, "Task failed");
            error_envelope(e)
        }
    }
}

pub async fn summarize(State(state): State<AppState>, Json(body): Json<SummarizeBody>) -> Json<Value> {
    run_task(&state, TaskRequest::summarize(body.text, body.language)).await
}

pub async fn risks(State(state): State<AppState>, Json(body): Json<TextBody>) -> Json<Value> {
    run_task(&state, TaskRequest::Risks { text: body.text }).await
}

pub async fn qa(State(state): State<AppState>, Json(body): Json<QaBody>) -> Json<Value> {
    run_task(
        &state,
        TaskRequest::Qa {
            text: body.text,
            question: body.question,
        },
    )
    .await
}

pub async fn compare(State(state): State<AppState>, Json(body): Json<CompareBody>) -> Json<Value> {
    run_task(
        &state,
        TaskRequest::Compare {
            text_a: body.text1,
            text_b: body.text2,
        },
    )
    .await
}

/// Accept a document upload, normalize it to text, and summarize it.
///
/// The declared extension is checked before any decoder runs.
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Json<Value> {
    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => return error_envelope("No file uploaded."),
        Err(e) => {
            warn!(error = %e, "Failed to read multipart upload");
            return error_envelope(format!("failed to read upload: {}", e));
        }
    };

    let filename = field.file_name().unwrap_or_default().to_string();
    let format = match extract::format_for(&filename) {
        Ok(format) => format,
        Err(e) => return error_envelope(e),
    };

    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(filename = %filename, error = %e, "Failed to read upload body");
            return error_envelope(format!("failed to read upload: {}", e));
        }
    };

    let payload = DocumentPayload::File {
        bytes: bytes.to_vec(),
        format,
    };
    let text = match extract::extract(payload) {
        Ok(text) => text,
        Err(e) => {
            warn!(filename = %filename, error = %e, "Extraction failed");
            return error_envelope(e);
        }
    };

    run_task(&state, TaskRequest::summarize(text, None)).await
}

/// Persist a contact-form submission.
pub async fn contact(State(state): State<AppState>, Json(body): Json<ContactBody>) -> Json<Value> {
    let record = ContactRecord {
        name: body.name.trim().to_string(),
        email: body.email.trim().to_string(),
        message: body.message.trim().to_string(),
    };
    if record.name.is_empty() || record.email.is_empty() || record.message.is_empty() {
        return error_envelope("All fields are required.");
    }

    match state.contacts.append(&record).await {
        Ok(()) => Json(json!({ "success": true })),
        Err(e) => {
            warn!(error = %e, "Contact persistence failed");
            error_envelope(e)
        }
    }
}

/// Render the given summary text as the reusable PDF report.
pub async fn download(State(state): State<AppState>, Json(body): Json<DownloadBody>) -> Json<Value> {
    match report::write_summary(&state.settings.report_path, &body.summary) {
        Ok(()) => {
            let filename = state
                .settings
                .report_path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(REPORT_FILENAME);
            Json(json!({ "file": filename }))
        }
        Err(e) => {
            warn!(error = %e, "Report rendering failed");
            error_envelope(e)
        }
    }
}
