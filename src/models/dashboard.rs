// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{booking::Booking, service_request::ServiceRequest};

// 1. Cards do topo + ocupação
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub maintenance_rooms: usize,
    pub reserved_rooms: usize,
    pub occupancy_rate: u32,   // Percentual inteiro
    pub active_bookings: usize, // Confirmadas + hospedadas
    pub total_revenue: Decimal, // Tudo que não foi cancelado
    pub pending_requests: usize,
    // 2. Listas "recentes"
    pub recent_bookings: Vec<Booking>,
    pub recent_requests: Vec<ServiceRequest>,
}

// Resumo da conta na tela de check-out
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub booking_id: String,
    pub room_number: String,
    pub guest_name: String,
    pub check_in: chrono::NaiveDate,
    pub check_out: chrono::NaiveDate,
    pub nights: i64,
    pub room_charges: Decimal,
    pub food_and_services: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub booking: Booking,
    pub redirect_to: String,
}
