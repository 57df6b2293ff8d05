// src/services/auth.rs

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    db::SessionRepository,
    models::auth::{RedirectResponse, SignInResponse, SignUpPayload, UserRole},
};

#[derive(Clone)]
pub struct AuthService {
    repo: SessionRepository,
}

impl AuthService {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    // Não há credenciais: escolher o perfil já abre uma sessão nova,
    // com os dados de demonstração.
    pub async fn sign_in(&self, role: UserRole) -> Result<SignInResponse, AppError> {
        let session_id = self.repo.create(role).await.inspect_err(|_| {
            tracing::warn!("Limite de sessões atingido; login recusado");
        })?;

        tracing::info!(session = %session_id, ?role, "Sessão aberta");
        Ok(SignInResponse {
            session_id,
            role,
            redirect_to: role.landing_path().to_string(),
        })
    }

    /// O cadastro só valida o formulário e manda de volta para o início.
    pub fn sign_up(&self, payload: &SignUpPayload) -> Result<RedirectResponse, AppError> {
        payload.validate()?;
        tracing::info!(email = %payload.email, "Cadastro recebido (não persistido)");
        Ok(RedirectResponse {
            redirect_to: "/".to_string(),
        })
    }

    /// Encerrar a sessão descarta todas as alterações feitas nela.
    pub async fn sign_out(&self, session_id: Uuid) -> Result<RedirectResponse, AppError> {
        let session = self
            .repo
            .remove(session_id)
            .await
            .ok_or(AppError::SessionNotFound)?;

        let minutes = (Utc::now() - session.created_at).num_minutes();
        tracing::info!(session = %session_id, role = ?session.role, minutes, "Sessão encerrada");
        Ok(RedirectResponse {
            redirect_to: "/".to_string(),
        })
    }
}
