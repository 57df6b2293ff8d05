// src/services/room_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::SessionRepository,
    models::room::{NewRoom, Room, RoomListing, RoomPatch, RoomStatus, RoomType},
    query::{self, filter, filter_by, mutation, room_stats, Criteria},
};

#[derive(Clone)]
pub struct RoomService {
    repo: SessionRepository,
}

impl RoomService {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    // --- LISTAGEM (ADMIN) ---
    pub async fn list(
        &self,
        session_id: Uuid,
        criteria: &Criteria<Room>,
    ) -> Result<RoomListing, AppError> {
        self.repo
            .read(session_id, |session| {
                let rooms = filter(&session.rooms, criteria);
                let stats = room_stats(&rooms);
                RoomListing { rooms, stats }
            })
            .await
    }

    // --- LISTAGEM (HÓSPEDE) ---
    // O hóspede só vê quartos disponíveis e a busca olha apenas a descrição.
    pub async fn list_available(
        &self,
        session_id: Uuid,
        term: Option<String>,
        room_type: Option<RoomType>,
    ) -> Result<Vec<Room>, AppError> {
        let criteria = Criteria::<Room> {
            term,
            category: room_type,
            status: Some(RoomStatus::Available),
        };
        self.repo
            .read(session_id, |session| {
                filter_by(&session.rooms, &criteria, |room| {
                    vec![room.description.as_str()]
                })
            })
            .await
    }

    pub async fn create(&self, session_id: Uuid, new_room: NewRoom) -> Result<Room, AppError> {
        let room = new_room.into_room(Uuid::new_v4().to_string());

        self.repo
            .write(session_id, |session| {
                session.rooms = mutation::insert(&session.rooms, room.clone());
            })
            .await?;

        tracing::info!(session = %session_id, room_id = %room.id, number = %room.number, "Quarto adicionado");
        Ok(room)
    }

    /// `None` quando o id não existe (nada muda).
    pub async fn update(
        &self,
        session_id: Uuid,
        room_id: &str,
        patch: RoomPatch,
    ) -> Result<Option<Room>, AppError> {
        let updated = self
            .repo
            .write(session_id, |session| {
                session.rooms = mutation::replace(&session.rooms, room_id, patch);
                mutation::find(&session.rooms, room_id).cloned()
            })
            .await?;

        if updated.is_some() {
            tracing::info!(session = %session_id, room_id, "Quarto atualizado");
        }
        Ok(updated)
    }

    pub async fn delete(&self, session_id: Uuid, room_id: &str) -> Result<bool, AppError> {
        let removed = self
            .repo
            .write(session_id, |session| {
                let before = session.rooms.len();
                session.rooms = mutation::remove(&session.rooms, room_id);
                session.rooms.len() < before
            })
            .await?;

        if removed {
            tracing::info!(session = %session_id, room_id, "Quarto removido");
        }
        Ok(removed)
    }

    pub async fn set_status(
        &self,
        session_id: Uuid,
        room_id: &str,
        status: RoomStatus,
    ) -> Result<Option<Room>, AppError> {
        let updated = self
            .repo
            .write(session_id, |session| {
                session.rooms = query::transition::transition(&session.rooms, room_id, status)?;
                Ok::<_, AppError>(mutation::find(&session.rooms, room_id).cloned())
            })
            .await??;

        if updated.is_some() {
            tracing::info!(session = %session_id, room_id, status = status.as_str(), "Status do quarto alterado");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserRole;
    use rust_decimal::Decimal;

    async fn setup() -> (RoomService, Uuid) {
        let repo = SessionRepository::new(10);
        let session = repo.create(UserRole::Admin).await.unwrap();
        (RoomService::new(repo), session)
    }

    fn new_room() -> NewRoom {
        NewRoom {
            number: "501".to_string(),
            room_type: RoomType::Suite,
            price: Decimal::from(400),
            status: RoomStatus::Available,
            capacity: 3,
            description: "Corner suite with ocean view".to_string(),
            amenities: None,
            image: None,
        }
    }

    #[tokio::test]
    async fn created_room_gets_id_and_defaults() {
        let (service, session) = setup().await;
        let room = service.create(session, new_room()).await.unwrap();

        assert!(!room.id.is_empty());
        assert_eq!(room.amenities, vec!["WiFi", "TV", "Air Conditioning"]);

        let listing = service
            .list(session, &Criteria::new().term("ocean"))
            .await
            .unwrap();
        assert_eq!(listing.rooms, vec![room]);
        assert_eq!(listing.stats.total, 1);
    }

    #[tokio::test]
    async fn unknown_ids_are_silent_noops() {
        let (service, session) = setup().await;

        let updated = service
            .update(session, "999", RoomPatch { capacity: Some(9), ..Default::default() })
            .await
            .unwrap();
        assert!(updated.is_none());
        assert!(!service.delete(session, "999").await.unwrap());
        assert_eq!(service.list(session, &Criteria::new()).await.unwrap().rooms.len(), 6);
    }

    #[tokio::test]
    async fn guests_only_see_available_rooms() {
        let (service, session) = setup().await;

        let rooms = service.list_available(session, None, None).await.unwrap();
        assert_eq!(rooms.len(), 3);
        assert!(rooms.iter().all(|r| r.status == RoomStatus::Available));

        let rooms = service
            .list_available(session, Some("LUXURIOUS".into()), Some(RoomType::Suite))
            .await
            .unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].number, "301");

        // O número do quarto não entra na busca do hóspede
        let rooms = service
            .list_available(session, Some("301".into()), None)
            .await
            .unwrap();
        assert!(rooms.is_empty());
    }

    #[tokio::test]
    async fn status_changes_are_free_for_rooms() {
        let (service, session) = setup().await;
        let room = service
            .set_status(session, "4", RoomStatus::Available)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(room.status, RoomStatus::Available);

        let stats = service.list(session, &Criteria::new()).await.unwrap().stats;
        assert_eq!(stats.available, 4);
        assert_eq!(stats.maintenance, 0);
    }
}
