// src/handlers/service_requests.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    common::{error::ApiError, filter_param::enum_filter},
    config::AppState,
    handlers::record_or_no_content,
    middleware::{i18n::Locale, session::SessionContext},
    models::service_request::{
        Priority, ServiceListing, ServiceRequest, ServiceStatus, ServiceStatusPayload,
    },
    query::Criteria,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServiceQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "enum_filter")]
    pub status: Option<ServiceStatus>,
    #[serde(default, deserialize_with = "enum_filter")]
    pub priority: Option<Priority>,
}

// GET /api/admin/services
#[utoipa::path(
    get,
    path = "/api/admin/services",
    tag = "Services",
    params(
        ServiceQuery,
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Pedidos filtrados e estatísticas", body = ServiceListing)
    )
)]
pub async fn list_requests(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Query(query): Query<ServiceQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let criteria = Criteria::<ServiceRequest> {
        term: query.search,
        category: query.priority,
        status: query.status,
    };

    let listing = app_state
        .request_service
        .list(session.0, &criteria)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(listing)))
}

// PATCH /api/admin/services/{id}/status
#[utoipa::path(
    patch,
    path = "/api/admin/services/{id}/status",
    tag = "Services",
    request_body = ServiceStatusPayload,
    params(
        ("id" = String, Path, description = "ID do pedido"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Status alterado", body = ServiceRequest),
        (status = 204, description = "ID desconhecido; nada mudou"),
        (status = 409, description = "Transição não permitida")
    )
)]
pub async fn set_request_status(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(request_id): Path<String>,
    Json(payload): Json<ServiceStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = app_state
        .request_service
        .set_status(session.0, &request_id, payload.status)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(record_or_no_content(updated))
}
