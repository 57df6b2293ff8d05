use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub mod auth;
pub mod bookings;
pub mod customer;
pub mod dashboard;
pub mod menu;
pub mod navigation;
pub mod rooms;
pub mod service_requests;

// Mutação em id desconhecido não é erro: nada muda e a resposta vem vazia.
pub(crate) fn record_or_no_content<T: Serialize>(record: Option<T>) -> Response {
    match record {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
