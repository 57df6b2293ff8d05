use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::middleware::i18n::Locale;
use crate::query::TransitionError;

// Erros de domínio. A conversão para HTTP (e o idioma da mensagem) fica em
// `to_api_error`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Sessão não encontrada")]
    SessionNotFound,

    #[error("Limite de sessões atingido")]
    TooManySessions,

    #[error("Quarto não encontrado")]
    RoomNotFound,

    #[error("Quarto indisponível para reserva")]
    RoomUnavailable,

    #[error("Reserva não encontrada")]
    BookingNotFound,

    #[error("Item do cardápio indisponível: {0}")]
    MenuItemUnavailable(String),

    #[error(transparent)]
    InvalidStatusTransition(#[from] TransitionError),

    // Variante genérica para qualquer outro erro inesperado
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

/// Corpo de erro devolvido pela API.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub error: String,
    pub details: Option<Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({ "error": self.error, "details": details }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::SessionNotFound => StatusCode::UNAUTHORIZED,
            AppError::TooManySessions => StatusCode::SERVICE_UNAVAILABLE,
            AppError::RoomNotFound | AppError::BookingNotFound => StatusCode::NOT_FOUND,
            AppError::RoomUnavailable
            | AppError::MenuItemUnavailable(_)
            | AppError::InvalidStatusTransition(_) => StatusCode::CONFLICT,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self, locale: &Locale) -> String {
        let pt = locale.is_portuguese();
        match self {
            AppError::ValidationError(_) if pt => "Um ou mais campos são inválidos.".into(),
            AppError::ValidationError(_) => "One or more fields are invalid.".into(),
            AppError::SessionNotFound if pt => "Sessão inválida ou expirada.".into(),
            AppError::SessionNotFound => "Invalid or expired session.".into(),
            AppError::TooManySessions if pt => "Muitas sessões abertas. Tente novamente mais tarde.".into(),
            AppError::TooManySessions => "Too many open sessions. Try again later.".into(),
            AppError::RoomNotFound if pt => "Quarto não encontrado.".into(),
            AppError::RoomNotFound => "Room not found.".into(),
            AppError::RoomUnavailable if pt => "Este quarto não está disponível.".into(),
            AppError::RoomUnavailable => "This room is not available.".into(),
            AppError::BookingNotFound if pt => "Reserva não encontrada.".into(),
            AppError::BookingNotFound => "Booking not found.".into(),
            AppError::MenuItemUnavailable(id) if pt => format!("O item '{}' não está disponível.", id),
            AppError::MenuItemUnavailable(id) => format!("Item '{}' is not available.", id),
            AppError::InvalidStatusTransition(e) if pt => {
                format!("Não é possível mudar o status de '{}' para '{}'.", e.from, e.to)
            }
            AppError::InvalidStatusTransition(e) => {
                format!("Cannot change status from '{}' to '{}'.", e.from, e.to)
            }
            AppError::InternalServerError(_) if pt => "Ocorreu um erro inesperado.".into(),
            AppError::InternalServerError(_) => "An unexpected error occurred.".into(),
        }
    }

    pub fn to_api_error(&self, locale: &Locale) -> ApiError {
        let details = match self {
            // Retorna todos os detalhes da validação, campo a campo.
            AppError::ValidationError(errors) => {
                let mut details = serde_json::Map::new();
                for (field, field_errors) in errors.field_errors() {
                    let messages: Vec<String> = field_errors
                        .iter()
                        .map(|e| match &e.message {
                            Some(m) => m.to_string(),
                            None => e.code.to_string(),
                        })
                        .collect();
                    details.insert(field.to_string(), json!(messages));
                }
                Some(Value::Object(details))
            }
            AppError::InternalServerError(e) => {
                tracing::error!("Erro Interno do Servidor: {:?}", e);
                None
            }
            _ => None,
        };

        ApiError {
            status: self.status(),
            error: self.message(locale),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_api_error(&Locale::default()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn validation_errors_keep_field_details() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("range");
        err.message = Some("O valor não pode ser negativo.".into());
        errors.add("price", err);

        let api = AppError::ValidationError(errors).to_api_error(&Locale("pt".into()));
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.error, "Um ou mais campos são inválidos.");
        assert_eq!(
            api.details,
            Some(json!({ "price": ["O valor não pode ser negativo."] }))
        );
    }

    #[test]
    fn messages_follow_locale() {
        let err = AppError::InvalidStatusTransition(TransitionError {
            from: "completed",
            to: "pending",
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
        assert_eq!(
            err.to_api_error(&Locale("en".into())).error,
            "Cannot change status from 'completed' to 'pending'."
        );
        assert_eq!(
            err.to_api_error(&Locale("pt".into())).error,
            "Não é possível mudar o status de 'completed' para 'pending'."
        );
    }
}
