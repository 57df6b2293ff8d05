// src/models/service_request.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::query::Queryable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    Cleaning,
    Laundry,
    Towels,
    RoomService, // Vira "room-service"
    Maintenance,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    Pending,
    InProgress, // Vira "in-progress"
    Completed,
}

impl ServiceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::InProgress => "in-progress",
            ServiceStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: String,
    #[schema(example = "102")]
    pub room_number: String,
    pub guest_name: String,
    #[serde(rename = "type")]
    pub request_type: ServiceType,
    #[schema(example = "Extra towels needed")]
    pub description: String,
    pub status: ServiceStatus,
    pub priority: Priority,
    pub created_at: NaiveDateTime,
}

// A tela de pedidos filtra por status e prioridade; a prioridade ocupa a
// dimensão de categoria.
impl Queryable for ServiceRequest {
    type Category = Priority;
    type Status = ServiceStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.guest_name.as_str(),
            self.room_number.as_str(),
            self.description.as_str(),
        ]
    }

    fn category(&self) -> Option<Priority> {
        Some(self.priority)
    }

    fn status(&self) -> ServiceStatus {
        self.status
    }

    fn set_status(&mut self, status: ServiceStatus) {
        self.status = status;
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceRequest {
    #[validate(length(min = 1, message = "O número do quarto é obrigatório."))]
    pub room_number: String,
    #[validate(length(min = 1, message = "O nome do hóspede é obrigatório."))]
    pub guest_name: String,
    #[serde(rename = "type")]
    pub request_type: ServiceType,
    #[validate(length(min = 1, max = 1000, message = "Descreva o pedido (até 1000 caracteres)."))]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ServiceStatusPayload {
    pub status: ServiceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Prioridade alta e ainda não concluídos.
    pub open_high_priority: usize,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListing {
    pub requests: Vec<ServiceRequest>,
    pub stats: ServiceStats,
}
