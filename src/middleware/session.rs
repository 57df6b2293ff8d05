// src/middleware/session.rs

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use uuid::Uuid;

use crate::common::error::ApiError;

// O nome do nosso cabeçalho HTTP customizado
pub const SESSION_ID_HEADER: &str = "x-session-id";

// Sessão (aba do navegador) dona das coleções em memória.
// Só valida o formato; se a sessão existe é o repositório que decide.
#[derive(Debug, Clone, Copy)]
pub struct SessionContext(pub Uuid);

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts.headers.get(SESSION_ID_HEADER).ok_or(ApiError {
            status: StatusCode::BAD_REQUEST,
            error: "O cabeçalho X-Session-ID é obrigatório.".to_string(),
            details: None,
        })?;

        let value_str = header_value.to_str().map_err(|_| ApiError {
            status: StatusCode::BAD_REQUEST,
            error: "Cabeçalho X-Session-ID contém caracteres inválidos.".to_string(),
            details: None,
        })?;

        let session_id = Uuid::parse_str(value_str.trim()).map_err(|_| ApiError {
            status: StatusCode::BAD_REQUEST,
            error: "Cabeçalho X-Session-ID inválido (não é um UUID).".to_string(),
            details: None,
        })?;

        Ok(SessionContext(session_id))
    }
}
