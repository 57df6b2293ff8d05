// src/db/session_repo.rs

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::seed,
    models::{
        auth::UserRole,
        booking::Booking,
        food_order::FoodOrder,
        menu::FoodItem,
        room::Room,
        service_request::ServiceRequest,
    },
};

pub const DEFAULT_TTL_MINUTES: i64 = 120;

/// Estado completo de uma sessão. Nada sobrevive ao fim da sessão.
#[derive(Debug, Clone)]
pub struct Session {
    pub role: UserRole,
    pub rooms: Vec<Room>,
    pub menu: Vec<FoodItem>,
    pub bookings: Vec<Booking>,
    pub requests: Vec<ServiceRequest>,
    pub food_orders: Vec<FoodOrder>,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn seeded(role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            role,
            rooms: seed::rooms(),
            menu: seed::food_items(),
            bookings: seed::bookings(),
            requests: seed::service_requests(),
            food_orders: Vec::new(),
            created_at: now,
            last_seen: now,
        }
    }

    fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.last_seen > ttl
    }
}

/// Sessões paradas por mais que `ttl` expiram: somem na próxima criação de
/// sessão e respondem como inexistentes até lá.
#[derive(Clone)]
pub struct SessionRepository {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    max_sessions: usize,
    ttl: Duration,
}

impl SessionRepository {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub async fn create(&self, role: UserRole) -> Result<Uuid, AppError> {
        let mut sessions = self.sessions.write().await;

        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(self.ttl, now));
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, "Sessões expiradas descartadas");
        }

        if sessions.len() >= self.max_sessions {
            return Err(AppError::TooManySessions);
        }

        let id = Uuid::new_v4();
        sessions.insert(id, Session::seeded(role));
        Ok(id)
    }

    /// Devolve a sessão removida, se existia.
    pub async fn remove(&self, id: Uuid) -> Option<Session> {
        self.sessions.write().await.remove(&id)
    }

    #[cfg(test)]
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Leitura também conta como atividade, por isso pega o lock de escrita.
    pub async fn read<R>(&self, id: Uuid, f: impl FnOnce(&Session) -> R) -> Result<R, AppError> {
        self.write(id, |session| f(session)).await
    }

    pub async fn write<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, AppError> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();

        let expired = match sessions.get(&id) {
            Some(session) => session.is_expired(self.ttl, now),
            None => return Err(AppError::SessionNotFound),
        };
        if expired {
            sessions.remove(&id);
            tracing::info!(session = %id, "Sessão expirada");
            return Err(AppError::SessionNotFound);
        }

        let session = sessions.get_mut(&id).ok_or(AppError::SessionNotFound)?;
        session.last_seen = now;
        Ok(f(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sessions_are_isolated() {
        let repo = SessionRepository::new(10);
        let a = repo.create(UserRole::Admin).await.unwrap();
        let b = repo.create(UserRole::Customer).await.unwrap();

        repo.write(a, |s| s.rooms.clear()).await.unwrap();

        assert_eq!(repo.read(a, |s| s.rooms.len()).await.unwrap(), 0);
        assert_eq!(repo.read(b, |s| s.rooms.len()).await.unwrap(), 6);
        assert_eq!(repo.read(b, |s| s.role).await.unwrap(), UserRole::Customer);
    }

    #[tokio::test]
    async fn removed_session_is_gone() {
        let repo = SessionRepository::new(10);
        let id = repo.create(UserRole::Admin).await.unwrap();

        assert!(repo.remove(id).await.is_some());
        assert!(repo.remove(id).await.is_none());
        assert!(matches!(
            repo.read(id, |s| s.rooms.len()).await,
            Err(AppError::SessionNotFound)
        ));
    }

    #[tokio::test]
    async fn refuses_sessions_beyond_limit() {
        let repo = SessionRepository::new(1);
        repo.create(UserRole::Admin).await.unwrap();
        assert!(matches!(
            repo.create(UserRole::Admin).await,
            Err(AppError::TooManySessions)
        ));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn idle_sessions_expire() {
        let repo = SessionRepository::new(1).with_ttl(Duration::minutes(30));
        let old = repo.create(UserRole::Admin).await.unwrap();

        // Simula uma sessão parada há uma hora
        repo.write(old, |s| s.last_seen = Utc::now() - Duration::hours(1))
            .await
            .unwrap();

        // A vaga da sessão expirada é liberada
        let new = repo.create(UserRole::Customer).await.unwrap();
        assert_eq!(repo.count().await, 1);
        assert!(matches!(
            repo.read(old, |s| s.rooms.len()).await,
            Err(AppError::SessionNotFound)
        ));
        assert_eq!(repo.read(new, |s| s.role).await.unwrap(), UserRole::Customer);
    }

    #[tokio::test]
    async fn expired_session_is_gone_on_access() {
        let repo = SessionRepository::new(10).with_ttl(Duration::minutes(30));
        let id = repo.create(UserRole::Admin).await.unwrap();
        repo.write(id, |s| s.last_seen = Utc::now() - Duration::minutes(31))
            .await
            .unwrap();

        assert!(matches!(
            repo.write(id, |s| s.rooms.clear()).await,
            Err(AppError::SessionNotFound)
        ));
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn activity_keeps_session_alive() {
        let repo = SessionRepository::new(10).with_ttl(Duration::minutes(30));
        let id = repo.create(UserRole::Admin).await.unwrap();
        repo.write(id, |s| s.last_seen = Utc::now() - Duration::minutes(20))
            .await
            .unwrap();

        // O acesso anterior renovou o last_seen
        let seen = repo.read(id, |s| s.last_seen).await.unwrap();
        assert!(Utc::now() - seen < Duration::minutes(1));
    }
}
