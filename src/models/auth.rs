// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Customer,
}

impl UserRole {
    /// Para onde o painel leva logo após o login.
    pub fn landing_path(self) -> &'static str {
        match self {
            UserRole::Admin => "/admin/dashboard",
            UserRole::Customer => "/customer/rooms",
        }
    }
}

// Login sem credenciais: só a escolha do perfil
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInPayload {
    pub role: UserRole,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub session_id: Uuid,
    pub role: UserRole,
    #[schema(example = "/admin/dashboard")]
    pub redirect_to: String,
}

// Cadastro ainda é só um formulário: nada é gravado
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SignUpPayload {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub redirect_to: String,
}
