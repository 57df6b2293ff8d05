// src/services/dashboard_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::SessionRepository,
    models::{dashboard::DashboardSummary, service_request::ServiceStatus},
    query::{aggregate::revenue, room_stats},
};

// Quantos itens aparecem nas listas "recentes" do painel
const RECENT_LIMIT: usize = 4;

#[derive(Clone)]
pub struct DashboardService {
    repo: SessionRepository,
}

impl DashboardService {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    pub async fn get_summary(&self, session_id: Uuid) -> Result<DashboardSummary, AppError> {
        self.repo
            .read(session_id, |session| {
                let rooms = room_stats(&session.rooms);

                DashboardSummary {
                    available_rooms: rooms.available,
                    occupied_rooms: rooms.occupied,
                    maintenance_rooms: rooms.maintenance,
                    reserved_rooms: rooms.reserved,
                    occupancy_rate: rooms.occupancy_rate,
                    active_bookings: session
                        .bookings
                        .iter()
                        .filter(|b| b.status.is_active())
                        .count(),
                    total_revenue: revenue(&session.bookings),
                    pending_requests: session
                        .requests
                        .iter()
                        .filter(|r| r.status == ServiceStatus::Pending)
                        .count(),
                    recent_bookings: session.bookings.iter().take(RECENT_LIMIT).cloned().collect(),
                    recent_requests: session.requests.iter().take(RECENT_LIMIT).cloned().collect(),
                }
            })
            .await
    }
}
