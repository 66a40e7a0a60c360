//! Axum route handlers for the expert endpoints.

use axum::{
    extract::{
        multipart::MultipartRejection,
        rejection::FormRejection,
        Multipart, State,
    },
    Form, Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::info;

use crate::errors::AppError;
use crate::experts::{ExpertKind, JobContext, ResultEnvelope};
use crate::extract::extract_text;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PromptForm {
    pub user_input: String,
    pub expert: String,
    pub job_title: Option<String>,
    pub job_description: Option<String>,
}

/// Fields collected from a `/upload/` multipart body.
#[derive(Debug, Default)]
struct UploadForm {
    filename: Option<String>,
    file: Option<Bytes>,
    expert: Option<String>,
    job_title: Option<String>,
    job_description: Option<String>,
}

impl UploadForm {
    async fn read(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some("file") => {
                    form.filename = field.file_name().map(String::from);
                    form.file = Some(field.bytes().await?);
                }
                Some("expert") => form.expert = Some(field.text().await?),
                Some("job_title") => form.job_title = Some(field.text().await?),
                Some("job_description") => form.job_description = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}

fn missing_field(name: &str) -> AppError {
    AppError::UnprocessableEntity(format!("Missing required field: {name}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /prompt/
///
/// Routes raw resume text (or a user query) to the requested expert.
/// Routing and LLM failures come back as envelopes with status 200;
/// malformed form bodies are rejected as `AppError`.
pub async fn handle_prompt(
    State(state): State<AppState>,
    form: Result<Form<PromptForm>, FormRejection>,
) -> Result<Json<ResultEnvelope>, AppError> {
    let Form(form) = form?;
    let job = JobContext::new(form.job_title, form.job_description);
    Ok(Json(
        state
            .experts
            .route_request(&form.user_input, &form.expert, &job)
            .await,
    ))
}

/// POST /upload/
///
/// Extracts text from an uploaded TXT/PDF, then behaves like `/prompt/`.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResultEnvelope>, AppError> {
    let mut multipart = multipart?;
    let form = UploadForm::read(&mut multipart).await?;

    let file = form.file.ok_or_else(|| missing_field("file"))?;
    let expert = form.expert.ok_or_else(|| missing_field("expert"))?;
    let filename = form.filename.unwrap_or_default();

    info!("Extracting upload '{}' ({} bytes)", filename, file.len());
    let text = tokio::task::spawn_blocking(move || extract_text(&file, &filename))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let job = JobContext::new(form.job_title, form.job_description);
    Ok(Json(state.experts.route_request(&text, &expert, &job).await))
}

/// GET /experts/
///
/// Static catalog of the available personas.
pub async fn handle_list_experts() -> Json<Value> {
    let experts: Map<String, Value> = ExpertKind::ALL
        .into_iter()
        .map(|kind| {
            (
                kind.id().to_string(),
                json!({
                    "name": kind.display_name(),
                    "description": kind.description(),
                }),
            )
        })
        .collect();

    Json(json!({ "experts": experts }))
}
