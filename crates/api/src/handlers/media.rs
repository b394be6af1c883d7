//! `POST /api/v1/admin/media`: multipart upload into `MEDIA_ROOT`.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use campus_core::error::CoreError;
use campus_core::media::{
    public_url, stored_file_name, validate_extension, validate_folder, DEFAULT_FOLDER,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadedMedia {
    /// Public URL to store in `image` / `resume` fields.
    pub url: String,
    /// Path relative to the media root.
    pub path: String,
    pub size: usize,
}

/// POST /api/v1/admin/media
///
/// Fields: `file` (required) and `folder` (optional, default `uploads`).
/// The stored name is the slugified original stem plus a random token, so
/// uploads never overwrite each other.
pub async fn upload(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedMedia>>)> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut folder = DEFAULT_FOLDER.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, data.to_vec()));
            }
            "folder" => {
                folder = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    let (filename, data) =
        file.ok_or_else(|| CoreError::Validation("file is required".into()))?;
    if data.is_empty() {
        return Err(CoreError::Validation("file is empty".into()).into());
    }
    let max = state.config.media.max_upload_bytes;
    if data.len() > max {
        return Err(CoreError::Validation(format!("file exceeds the {max} byte upload limit")).into());
    }

    let ext = validate_extension(&filename)?;
    let folder = validate_folder(&folder)?;
    let token = Uuid::new_v4().simple().to_string();
    let relative = format!("{folder}/{}", stored_file_name(&filename, &token, &ext));

    state
        .media
        .save(&relative, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(
        user_id = user.user_id,
        path = %relative,
        size = data.len(),
        "Media uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedMedia {
                url: public_url(&state.config.media.url, &relative),
                path: relative,
                size: data.len(),
            },
        }),
    ))
}
