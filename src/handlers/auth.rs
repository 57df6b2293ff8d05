// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    middleware::{i18n::Locale, session::SessionContext},
    models::auth::{RedirectResponse, SignInPayload, SignInResponse, SignUpPayload},
};

// POST /api/auth/sign-in
#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    tag = "Auth",
    request_body = SignInPayload,
    responses(
        (status = 201, description = "Sessão criada com os dados de demonstração", body = SignInResponse),
        (status = 503, description = "Limite de sessões atingido")
    )
)]
pub async fn sign_in(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<SignInPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let response = app_state
        .auth_service
        .sign_in(payload.role)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::CREATED, Json(response)))
}

// POST /api/auth/sign-up
#[utoipa::path(
    post,
    path = "/api/auth/sign-up",
    tag = "Auth",
    request_body = SignUpPayload,
    responses(
        (status = 200, description = "Formulário aceito; volta para o início", body = RedirectResponse),
        (status = 400, description = "Campos inválidos")
    )
)]
pub async fn sign_up(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<SignUpPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let response = app_state
        .auth_service
        .sign_up(&payload)
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(response)))
}

// DELETE /api/auth/session
#[utoipa::path(
    delete,
    path = "/api/auth/session",
    tag = "Auth",
    params(
        ("x-session-id" = Uuid, Header, description = "ID da sessão")
    ),
    responses(
        (status = 200, description = "Sessão encerrada", body = RedirectResponse),
        (status = 401, description = "Sessão inexistente")
    )
)]
pub async fn sign_out(
    State(app_state): State<AppState>,
    locale: Locale,
    session: SessionContext,
) -> Result<impl IntoResponse, ApiError> {
    let response = app_state
        .auth_service
        .sign_out(session.0)
        .await
        .map_err(|e| e.to_api_error(&locale))?;

    Ok((StatusCode::OK, Json(response)))
}
