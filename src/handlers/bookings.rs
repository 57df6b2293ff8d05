// src/handlers/bookings.rs

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
    models::booking::{Booking, BookingListing, BookingStatus, BookingStatusPayload},
    query::Criteria,
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookingQuery {
    /// Busca em hóspede, e-mail e número do quarto
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "enum_filter")]
    pub status: Option<BookingStatus>,
}

// GET /api/admin/bookings
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = "Bookings",
    params(
        BookingQuery,
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Reservas filtradas e estatísticas", body = BookingListing)
    )
)]
pub async fn list_bookings(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Query(query): Query<BookingQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let criteria = Criteria::<Booking> {
        term: query.search,
        category: None,
        status: query.status,
    };

    let listing = app_state
        .booking_service
        .list(session.0, &criteria)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(listing)))
}

// PATCH /api/admin/bookings/{id}/status
#[utoipa::path(
    patch,
    path = "/api/admin/bookings/{id}/status",
    tag = "Bookings",
    request_body = BookingStatusPayload,
    params(
        ("id" = String, Path, description = "ID da reserva"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Status alterado", body = Booking),
        (status = 204, description = "ID desconhecido; nada mudou"),
        (status = 409, description = "Transição não permitida")
    )
)]
pub async fn set_booking_status(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(booking_id): Path<String>,
    Json(payload): Json<BookingStatusPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = app_state
        .booking_service
        .set_status(session.0, &booking_id, payload.status)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok(record_or_no_content(updated))
}
