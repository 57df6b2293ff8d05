// src/services/menu_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::SessionRepository,
    models::menu::{FoodCategory, FoodItem, FoodItemPatch, MenuListing, MenuSection, NewFoodItem},
    query::{filter, menu_stats, mutation, Criteria},
};

#[derive(Clone)]
pub struct MenuService {
    repo: SessionRepository,
}

impl MenuService {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        session_id: Uuid,
        criteria: &Criteria<FoodItem>,
    ) -> Result<MenuListing, AppError> {
        self.repo
            .read(session_id, |session| {
                let items = filter(&session.menu, criteria);
                let stats = menu_stats(&items);
                MenuListing { items, stats }
            })
            .await
    }

    /// Cardápio do hóspede: só pratos disponíveis, uma seção por categoria.
    pub async fn guest_menu(&self, session_id: Uuid) -> Result<Vec<MenuSection>, AppError> {
        self.repo
            .read(session_id, |session| {
                FoodCategory::ALL
                    .iter()
                    .map(|&category| MenuSection {
                        category,
                        items: filter(
                            &session.menu,
                            &Criteria::new().category(category).status(true),
                        ),
                    })
                    .collect()
            })
            .await
    }

    pub async fn create(&self, session_id: Uuid, new_item: NewFoodItem) -> Result<FoodItem, AppError> {
        let item = new_item.into_item(Uuid::new_v4().to_string());

        self.repo
            .write(session_id, |session| {
                session.menu = mutation::insert(&session.menu, item.clone());
            })
            .await?;

        tracing::info!(session = %session_id, item_id = %item.id, name = %item.name, "Item adicionado ao cardápio");
        Ok(item)
    }

    pub async fn update(
        &self,
        session_id: Uuid,
        item_id: &str,
        patch: FoodItemPatch,
    ) -> Result<Option<FoodItem>, AppError> {
        let updated = self
            .repo
            .write(session_id, |session| {
                session.menu = mutation::replace(&session.menu, item_id, patch);
                mutation::find(&session.menu, item_id).cloned()
            })
            .await?;

        if updated.is_some() {
            tracing::info!(session = %session_id, item_id, "Item do cardápio atualizado");
        }
        Ok(updated)
    }

    pub async fn delete(&self, session_id: Uuid, item_id: &str) -> Result<bool, AppError> {
        let removed = self
            .repo
            .write(session_id, |session| {
                let before = session.menu.len();
                session.menu = mutation::remove(&session.menu, item_id);
                session.menu.len() < before
            })
            .await?;

        if removed {
            tracing::info!(session = %session_id, item_id, "Item removido do cardápio");
        }
        Ok(removed)
    }

    pub async fn toggle_availability(
        &self,
        session_id: Uuid,
        item_id: &str,
    ) -> Result<Option<FoodItem>, AppError> {
        let updated = self
            .repo
            .write(session_id, |session| {
                let current = mutation::find(&session.menu, item_id).map(|i| i.available)?;
                session.menu = mutation::set_status(&session.menu, item_id, !current);
                mutation::find(&session.menu, item_id).cloned()
            })
            .await?;

        if let Some(item) = &updated {
            tracing::info!(session = %session_id, item_id, available = item.available, "Disponibilidade alterada");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserRole;
    use rust_decimal::Decimal;

    async fn setup() -> (MenuService, Uuid) {
        let repo = SessionRepository::new(10);
        let session = repo.create(UserRole::Admin).await.unwrap();
        (MenuService::new(repo), session)
    }

    #[tokio::test]
    async fn search_and_category_combine() {
        let (service, session) = setup().await;

        let listing = service
            .list(session, &Criteria::new().term("french"))
            .await
            .unwrap();
        let names: Vec<&str> = listing.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Lobster Thermidor", "Champagne", "Crème Brûlée"]);

        let listing = service
            .list(
                session,
                &Criteria::new().term("french").category(FoodCategory::Desserts),
            )
            .await
            .unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.stats.total, 1);
    }

    #[tokio::test]
    async fn toggling_hides_item_from_guest_menu() {
        let (service, session) = setup().await;

        let item = service.toggle_availability(session, "8").await.unwrap().unwrap();
        assert!(!item.available);

        let sections = service.guest_menu(session).await.unwrap();
        assert_eq!(sections.len(), 5);
        let beverages = sections
            .iter()
            .find(|s| s.category == FoodCategory::Beverages)
            .unwrap();
        assert_eq!(beverages.items.len(), 1);
        assert_eq!(beverages.items[0].name, "Fresh Orange Juice");

        let item = service.toggle_availability(session, "8").await.unwrap().unwrap();
        assert!(item.available);
        assert!(service.toggle_availability(session, "999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn edit_merges_and_delete_removes() {
        let (service, session) = setup().await;
        let created = service
            .create(
                session,
                NewFoodItem {
                    name: "Club Sandwich".into(),
                    description: "Triple-decker with fries".into(),
                    price: Decimal::from(22),
                    category: FoodCategory::Lunch,
                    available: true,
                    image: None,
                },
            )
            .await
            .unwrap();

        let updated = service
            .update(
                session,
                &created.id,
                FoodItemPatch {
                    price: Some(Decimal::new(2450, 2)),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, Decimal::new(2450, 2));
        assert_eq!(updated.name, "Club Sandwich");

        assert!(service.delete(session, &created.id).await.unwrap());
        let listing = service.list(session, &Criteria::new()).await.unwrap();
        assert!(listing.items.iter().all(|i| i.id != created.id));
    }
}
