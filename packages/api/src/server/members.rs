//! Handlers for `/api/members` and the database probe.

use std::collections::HashMap;

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{AppState, ServerError};
use crate::models::member::MemberRow;
use crate::models::{ApiMessage, Member};

/// `GET /api/members`: newest first.
pub async fn list_members(State(state): State<AppState>) -> Result<Json<Vec<Member>>, ServerError> {
    let rows: Vec<MemberRow> = sqlx::query_as("SELECT * FROM members ORDER BY id DESC")
        .fetch_all(&state.pool)
        .await?;

    Ok(Json(rows.iter().map(MemberRow::to_member).collect()))
}

/// An uploaded file part.
struct FilePart {
    file_name: String,
    bytes: Vec<u8>,
}

/// The decoded multipart body of a create request.
#[derive(Default)]
struct MemberForm {
    fields: HashMap<String, String>,
    image: Option<FilePart>,
}

impl MemberForm {
    async fn read(mut multipart: Multipart) -> Result<Self, ServerError> {
        let mut form = MemberForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            if name == "image" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked
                if !file_name.is_empty() && !bytes.is_empty() {
                    form.image = Some(FilePart {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    fn take(&mut self, field: &'static str) -> Result<String, ServerError> {
        self.fields
            .remove(field)
            .ok_or(ServerError::MissingField(field))
    }
}

/// `POST /api/members`: multipart body with an optional `image` file.
pub async fn create_member(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiMessage>), ServerError> {
    let mut form = MemberForm::read(multipart).await?;

    let name = form.take("name")?;
    let position = form.take("position")?;
    let research = form.take("research")?;
    let email = form.take("email")?;

    let image = match form.image {
        Some(ref file) => state
            .uploads
            .save(&file.file_name, &file.bytes)
            .await?
            .unwrap_or_default(),
        None => String::new(),
    };

    let inserted: Result<(i64,), sqlx::Error> = sqlx::query_as(
        "INSERT INTO members (name, position, research, email, image) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(&name)
    .bind(&position)
    .bind(&research)
    .bind(&email)
    .bind(&image)
    .fetch_one(&state.pool)
    .await;

    let id = match inserted {
        Ok(id) => id,
        Err(e) => {
            // No row will reference the file
            if !image.is_empty() {
                if let Err(io) = state.uploads.remove(&image).await {
                    tracing::warn!("failed to remove orphaned image {}: {}", image, io);
                }
            }
            return Err(e.into());
        }
    };

    tracing::info!(id = id.0, %position, "member created");

    Ok((StatusCode::CREATED, Json(ApiMessage::new("Member created"))))
}

/// `DELETE /api/members/{id}`: also removes the member's image file.
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiMessage>, ServerError> {
    let image: Option<(String,)> = sqlx::query_as("SELECT image FROM members WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?;

    if let Some((image,)) = image.filter(|(image,)| !image.is_empty()) {
        if let Err(e) = state.uploads.remove(&image).await {
            tracing::warn!(id, "failed to remove profile image {}: {}", image, e);
        }
    }

    let result = sqlx::query("DELETE FROM members WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    tracing::info!(id, deleted = result.rows_affected(), "member deleted");

    Ok(Json(ApiMessage::new("Member deleted")))
}

#[derive(Serialize)]
struct ProbeBody {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_time: Option<DateTime<Utc>>,
}

/// `GET /api/debug/db`: checks the database answers.
pub async fn debug_db(State(state): State<AppState>) -> Response {
    let now: Result<(DateTime<Utc>,), sqlx::Error> = sqlx::query_as("SELECT NOW()")
        .fetch_one(&state.pool)
        .await;

    match now {
        Ok((current_time,)) => Json(ProbeBody {
            status: "success",
            message: "database connection ok".to_string(),
            current_time: Some(current_time),
        })
        .into_response(),
        Err(e) => {
            tracing::error!("database probe failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ProbeBody {
                    status: "error",
                    message: format!("database connection failed: {e}"),
                    current_time: None,
                }),
            )
                .into_response()
        }
    }
}
