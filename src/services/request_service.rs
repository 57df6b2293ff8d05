// src/services/request_service.rs

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::SessionRepository,
    models::service_request::{NewServiceRequest, ServiceListing, ServiceRequest, ServiceStatus},
    query::{self, filter, mutation, service_stats, Criteria},
};

#[derive(Clone)]
pub struct RequestService {
    repo: SessionRepository,
}

impl RequestService {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        session_id: Uuid,
        criteria: &Criteria<ServiceRequest>,
    ) -> Result<ServiceListing, AppError> {
        self.repo
            .read(session_id, |session| {
                let requests = filter(&session.requests, criteria);
                let stats = service_stats(&requests);
                ServiceListing { requests, stats }
            })
            .await
    }

    // Todo pedido novo entra como pendente.
    pub async fn submit(
        &self,
        session_id: Uuid,
        new_request: NewServiceRequest,
    ) -> Result<ServiceRequest, AppError> {
        let request = ServiceRequest {
            id: Uuid::new_v4().to_string(),
            room_number: new_request.room_number,
            guest_name: new_request.guest_name,
            request_type: new_request.request_type,
            description: new_request.description,
            status: ServiceStatus::Pending,
            priority: new_request.priority,
            created_at: Utc::now().naive_utc(),
        };

        self.repo
            .write(session_id, |session| {
                session.requests = mutation::insert(&session.requests, request.clone());
            })
            .await?;

        tracing::info!(session = %session_id, request_id = %request.id, room = %request.room_number, "Pedido de serviço registrado");
        Ok(request)
    }

    pub async fn set_status(
        &self,
        session_id: Uuid,
        request_id: &str,
        status: ServiceStatus,
    ) -> Result<Option<ServiceRequest>, AppError> {
        let updated = self
            .repo
            .write(session_id, |session| {
                session.requests = query::transition::transition(&session.requests, request_id, status)
                    .inspect_err(|e| tracing::warn!(request_id, error = %e, "Transição de pedido recusada"))?;
                Ok::<_, AppError>(mutation::find(&session.requests, request_id).cloned())
            })
            .await??;

        if updated.is_some() {
            tracing::info!(session = %session_id, request_id, status = status.as_str(), "Status do pedido alterado");
        }
        Ok(updated)
    }
}
