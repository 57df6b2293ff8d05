// src/handlers/navigation.rs

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::{
    auth::UserRole,
    navigation::{self, Page, ResolvedRoute, SidebarEntry},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    /// Caminho da interface, ex.: `/admin/rooms`
    #[serde(default)]
    pub path: String,
}

// GET /api/navigation/resolve?path=/admin/rooms
#[utoipa::path(
    get,
    path = "/api/navigation/resolve",
    tag = "Navigation",
    params(ResolveQuery),
    responses(
        (status = 200, description = "Página correspondente (ou not-found)", body = ResolvedRoute)
    )
)]
pub async fn resolve(Query(query): Query<ResolveQuery>) -> impl IntoResponse {
    let resolved = ResolvedRoute::from(Page::from_path(&query.path));
    (StatusCode::OK, Json(resolved))
}

// GET /api/navigation/sidebar/{role}
#[utoipa::path(
    get,
    path = "/api/navigation/sidebar/{role}",
    tag = "Navigation",
    params(
        ("role" = UserRole, Path, description = "admin ou customer")
    ),
    responses(
        (status = 200, description = "Itens do menu lateral", body = Vec<SidebarEntry>)
    )
)]
pub async fn sidebar(Path(role): Path<UserRole>) -> impl IntoResponse {
    (StatusCode::OK, Json(navigation::sidebar(role)))
}
