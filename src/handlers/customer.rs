// src/handlers/customer.rs

// Rotas do lado do hóspede. Operam sobre as mesmas coleções da sessão que o
// painel administrativo.

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
    middleware::{i18n::Locale, session::SessionContext},
    models::{
        booking::{BookRoomPayload, Booking},
        dashboard::{CheckoutResponse, CheckoutSummary},
        food_order::{FoodOrder, PlaceOrderPayload},
        menu::MenuSection,
        room::{Room, RoomType},
        service_request::{NewServiceRequest, ServiceRequest},
    },
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailableRoomsQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "enum_filter")]
    pub room_type: Option<RoomType>,
}

// GET /api/customer/rooms
#[utoipa::path(
    get,
    path = "/api/customer/rooms",
    tag = "Customer",
    params(
        AvailableRoomsQuery,
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Quartos disponíveis", body = Vec<Room>)
    )
)]
pub async fn list_rooms(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Query(query): Query<AvailableRoomsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rooms = app_state
        .room_service
        .list_available(session.0, query.search, query.room_type)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(rooms)))
}

// POST /api/customer/rooms/{id}/book
#[utoipa::path(
    post,
    path = "/api/customer/rooms/{id}/book",
    tag = "Customer",
    request_body = BookRoomPayload,
    params(
        ("id" = String, Path, description = "ID do quarto"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 201, description = "Reserva confirmada", body = Booking),
        (status = 400, description = "Dados inválidos"),
        (status = 404, description = "Quarto não encontrado"),
        (status = 409, description = "Quarto indisponível")
    )
)]
pub async fn book_room(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(room_id): Path<String>,
    Json(payload): Json<BookRoomPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let booking = app_state
        .booking_service
        .book_room(session.0, &room_id, payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(booking)))
}

// GET /api/customer/bookings
pub async fn my_bookings(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let bookings = app_state
        .booking_service
        .list_for_guest(session.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(bookings)))
}

// GET /api/customer/menu
#[utoipa::path(
    get,
    path = "/api/customer/menu",
    tag = "Customer",
    params(
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Itens disponíveis agrupados por categoria", body = Vec<MenuSection>)
    )
)]
pub async fn menu(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let sections = app_state
        .menu_service
        .guest_menu(session.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(sections)))
}

// POST /api/customer/food-orders
#[utoipa::path(
    post,
    path = "/api/customer/food-orders",
    tag = "Customer",
    request_body = PlaceOrderPayload,
    params(
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 201, description = "Pedido registrado", body = FoodOrder),
        (status = 400, description = "Carrinho vazio"),
        (status = 409, description = "Item indisponível")
    )
)]
pub async fn place_order(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Json(payload): Json<PlaceOrderPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let order = app_state
        .food_order_service
        .place_order(session.0, payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(order)))
}

// GET /api/customer/food-orders
pub async fn list_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let orders = app_state
        .food_order_service
        .list(session.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(orders)))
}

// POST /api/customer/services
#[utoipa::path(
    post,
    path = "/api/customer/services",
    tag = "Customer",
    request_body = NewServiceRequest,
    params(
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 201, description = "Pedido de serviço registrado", body = ServiceRequest),
        (status = 400, description = "Campos inválidos")
    )
)]
pub async fn submit_request(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Json(payload): Json<NewServiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale))?;

    let request = app_state
        .request_service
        .submit(session.0, payload)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(request)))
}

// GET /api/customer/checkout/{bookingId}
#[utoipa::path(
    get,
    path = "/api/customer/checkout/{booking_id}",
    tag = "Customer",
    params(
        ("booking_id" = String, Path, description = "ID da reserva"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Conta da estadia", body = CheckoutSummary),
        (status = 404, description = "Reserva não encontrada")
    )
)]
pub async fn checkout_summary(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = app_state
        .checkout_service
        .summary(session.0, &booking_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(summary)))
}

// POST /api/customer/checkout/{bookingId}
#[utoipa::path(
    post,
    path = "/api/customer/checkout/{booking_id}",
    tag = "Customer",
    params(
        ("booking_id" = String, Path, description = "ID da reserva"),
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Check-out feito; volta para o início", body = CheckoutResponse),
        (status = 404, description = "Reserva não encontrada"),
        (status = 409, description = "A reserva não está em andamento")
    )
)]
pub async fn check_out(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let response = app_state
        .checkout_service
        .check_out(session.0, &booking_id)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(response)))
}
