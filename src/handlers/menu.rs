// src/handlers/menu.rs

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
        filter_param::{availability_filter, enum_filter},
    },
    config::AppState,
    handlers::record_or_no_content,
    middleware::{i18n::Locale, session::SessionContext},
    models::menu::{FoodCategory, FoodItem, FoodItemPatch, MenuListing, NewFoodItem},
    query::Criteria,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MenuQuery {
    /// Busca em nome e descrição
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "enum_filter")]
    pub category: Option<FoodCategory>,
    /// `available`/`true`, `unavailable`/`false` ou `all`
    #[serde(default, deserialize_with = "availability_filter")]
    pub available: Option<bool>,
}

impl From<MenuQuery> for Criteria<FoodItem> {
    fn from(query: MenuQuery) -> Self {
        Criteria {
            term: query.search,
            category: query.category,
            status: query.available,
        }
    }
}

// GET /api/admin/menu
#[utoipa::path(
    get,
    path = "/api/admin/menu",
    tag = "Menu",
    params(
        MenuQuery,
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Itens filtrados e estatísticas", body = MenuListing)
    )
)]
pub async fn list_items(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Query(query): Query<MenuQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let listing = app_state
        .menu_service
        .list(session.0, &query.into())
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(listing)))
}

// POST /api/admin/menu
#[utoipa::path(
    post,
    path = "/api/admin/menu",
    tag = "Menu",
    request_body = NewFoodItem,
    params(
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 201, description = "Item criado", body = FoodItem),
        (status = 400, description = "Campos inválidos")
    )
)]
pub async fn create_item(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Json(payload): Json<NewFoodItem>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let item = app_state
        .menu_service
        .create(session.0, payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(item)))
}

// PUT /api/admin/menu/{id}
pub async fn update_item(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(item_id): Path<String>,
    Json(payload): Json<FoodItemPatch>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let updated = app_state
        .menu_service
        .update(session.0, &item_id, payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(record_or_no_content(updated))
}

// DELETE /api/admin/menu/{id}
pub async fn delete_item(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .menu_service
        .delete(session.0, &item_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(StatusCode::NO_CONTENT)
}

// POST /api/admin/menu/{id}/toggle-availability
#[utoipa::path(
    post,
    path = "/api/admin/menu/{id}/toggle-availability",
    tag = "Menu",
    params(
        ("id" = String, Path, description = "ID do item"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Disponibilidade invertida", body = FoodItem),
        (status = 204, description = "ID desconhecido; nada mudou")
    )
)]
pub async fn toggle_availability(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(item_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = app_state
        .menu_service
        .toggle_availability(session.0, &item_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(record_or_no_content(updated))
}
