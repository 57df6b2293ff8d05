// src/handlers/rooms.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError},
        filter_param::enum_filter,
    },
    config::AppState,
    handlers::record_or_no_content,
    middleware::{i18n::Locale, session::SessionContext},
    models::room::{NewRoom, Room, RoomListing, RoomPatch, RoomStatus, RoomStatusPayload, RoomType},
    query::Criteria,
};

// Filtros da tela de quartos. "all" ou vazio = sem filtro.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RoomQuery {
    /// Busca em número e descrição
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "enum_filter")]
    pub room_type: Option<RoomType>,
    #[serde(default, deserialize_with = "enum_filter")]
    pub status: Option<RoomStatus>,
}

impl From<RoomQuery> for Criteria<Room> {
    fn from(query: RoomQuery) -> Self {
        Criteria {
            term: query.search,
            category: query.room_type,
            status: query.status,
        }
    }
}

// GET /api/admin/rooms
#[utoipa::path(
    get,
    path = "/api/admin/rooms",
    tag = "Rooms",
    params(
        RoomQuery,
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Quartos filtrados e estatísticas", body = RoomListing)
    )
)]
pub async fn list_rooms(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Query(query): Query<RoomQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let listing = app_state
        .room_service
        .list(session.0, &query.into())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(listing)))
}

// POST /api/admin/rooms
#[utoipa::path(
    post,
    path = "/api/admin/rooms",
    tag = "Rooms",
    request_body = NewRoom,
    params(
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 201, description = "Quarto criado", body = Room),
        (status = 400, description = "Campos inválidos")
    )
)]
pub async fn create_room(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Json(payload): Json<NewRoom>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let room = app_state
        .room_service
        .create(session.0, payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(room)))
}

// PUT /api/admin/rooms/{id}
#[utoipa::path(
    put,
    path = "/api/admin/rooms/{id}",
    tag = "Rooms",
    request_body = RoomPatch,
    params(
        ("id" = String, Path, description = "ID do quarto"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Quarto atualizado", body = Room),
        (status = 204, description = "ID desconhecido; nada mudou")
    )
)]
pub async fn update_room(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(room_id): Path<String>,
    Json(payload): Json<RoomPatch>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let updated = app_state
        .room_service
        .update(session.0, &room_id, payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(record_or_no_content(updated))
}

// DELETE /api/admin/rooms/{id}
#[utoipa::path(
    delete,
    path = "/api/admin/rooms/{id}",
    tag = "Rooms",
    params(
        ("id" = String, Path, description = "ID do quarto"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 204, description = "Removido (ou já não existia)")
    )
)]
pub async fn delete_room(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .room_service
        .delete(session.0, &room_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}

// PATCH /api/admin/rooms/{id}/status
#[utoipa::path(
    patch,
    path = "/api/admin/rooms/{id}/status",
    tag = "Rooms",
    request_body = RoomStatusPayload,
    params(
        ("id" = String, Path, description = "ID do quarto"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Status alterado", body = Room),
        (status = 204, description = "ID desconhecido; nada mudou")
    )
)]
pub async fn set_room_status(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(room_id): Path<String>,
    Json(payload): Json<RoomStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = app_state
        .room_service
        .set_status(session.0, &room_id, payload.status)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(record_or_no_content(updated))
}
