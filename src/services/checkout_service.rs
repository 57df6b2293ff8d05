// src/services/checkout_service.rs

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, validation::amount_overflow},
    db::SessionRepository,
    models::{
        booking::BookingStatus,
        dashboard::{CheckoutResponse, CheckoutSummary},
    },
    query::{self, mutation},
};

#[derive(Clone)]
pub struct CheckoutService {
    repo: SessionRepository,
}

impl CheckoutService {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    /// Conta da estadia. Consumo = pedidos de comida feitos para o mesmo
    /// número de quarto nesta sessão.
    pub async fn summary(&self, session_id: Uuid, booking_id: &str) -> Result<CheckoutSummary, AppError> {
        self.repo
            .read(session_id, |session| -> Result<CheckoutSummary, AppError> {
                let booking =
                    mutation::find(&session.bookings, booking_id).ok_or(AppError::BookingNotFound)?;
                let food_and_services = session
                    .food_orders
                    .iter()
                    .filter(|o| o.room_number == booking.room_number)
                    .try_fold(Decimal::ZERO, |acc, o| acc.checked_add(o.total))
                    .ok_or_else(|| amount_overflow("foodAndServices"))?;
                let total = booking
                    .total_amount
                    .checked_add(food_and_services)
                    .ok_or_else(|| amount_overflow("total"))?;

                Ok(CheckoutSummary {
                    booking_id: booking.id.clone(),
                    room_number: booking.room_number.clone(),
                    guest_name: booking.guest_name.clone(),
                    check_in: booking.check_in,
                    check_out: booking.check_out,
                    nights: booking.nights(),
                    room_charges: booking.total_amount,
                    food_and_services,
                    total,
                })
            })
            .await?
    }

    pub async fn check_out(&self, session_id: Uuid, booking_id: &str) -> Result<CheckoutResponse, AppError> {
        let booking = self
            .repo
            .write(session_id, |session| -> Result<_, AppError> {
                if mutation::find(&session.bookings, booking_id).is_none() {
                    return Err(AppError::BookingNotFound);
                }
                session.bookings =
                    query::transition::transition(&session.bookings, booking_id, BookingStatus::CheckedOut)
                        .inspect_err(|e| tracing::warn!(booking_id, error = %e, "Check-out recusado"))?;
                mutation::find(&session.bookings, booking_id)
                    .cloned()
                    .ok_or(AppError::BookingNotFound)
            })
            .await??;

        tracing::info!(session = %session_id, booking_id, room = %booking.room_number, "Check-out concluído");
        Ok(CheckoutResponse {
            booking,
            redirect_to: "/".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        auth::UserRole,
        food_order::{CartLine, PlaceOrderPayload},
    };
    use crate::services::food_order_service::FoodOrderService;

    async fn setup() -> (CheckoutService, FoodOrderService, Uuid) {
        let repo = SessionRepository::new(10);
        let session = repo.create(UserRole::Customer).await.unwrap();
        (
            CheckoutService::new(repo.clone()),
            FoodOrderService::new(repo),
            session,
        )
    }

    #[tokio::test]
    async fn summary_adds_room_food_orders() {
        let (checkout, orders, session) = setup().await;
        orders
            .place_order(
                session,
                PlaceOrderPayload {
                    room_number: "102".into(),
                    items: vec![CartLine { item_id: "5".into(), quantity: 2 }],
                },
            )
            .await
            .unwrap();
        // Outro quarto não entra na conta
        orders
            .place_order(
                session,
                PlaceOrderPayload {
                    room_number: "301".into(),
                    items: vec![CartLine { item_id: "8".into(), quantity: 1 }],
                },
            )
            .await
            .unwrap();

        let summary = checkout.summary(session, "1").await.unwrap();
        assert_eq!(summary.nights, 5);
        assert_eq!(summary.room_charges, Decimal::from(600));
        assert_eq!(summary.food_and_services, Decimal::from(110));
        assert_eq!(summary.total, Decimal::from(710));
    }

    #[tokio::test]
    async fn summary_that_overflows_is_rejected() {
        let repo = SessionRepository::new(10);
        let session = repo.create(UserRole::Customer).await.unwrap();
        let checkout = CheckoutService::new(repo.clone());
        repo.write(session, |s| {
            for booking in s.bookings.iter_mut().filter(|b| b.id == "1") {
                booking.total_amount = Decimal::MAX;
            }
            s.food_orders.push(crate::models::food_order::FoodOrder {
                id: "f1".into(),
                room_number: "102".into(),
                items: Vec::new(),
                total: Decimal::ONE,
                status: crate::models::food_order::FoodOrderStatus::Pending,
                created_at: chrono::Utc::now(),
            });
        })
        .await
        .unwrap();

        match checkout.summary(session, "1").await {
            Err(AppError::ValidationError(errors)) => {
                assert!(errors.field_errors().contains_key("total"))
            }
            other => panic!("esperava erro de validação, veio {:?}", other),
        }
    }

    #[tokio::test]
    async fn check_out_moves_booking_and_redirects_home() {
        let (checkout, _, session) = setup().await;

        let response = checkout.check_out(session, "1").await.unwrap();
        assert_eq!(response.booking.status, BookingStatus::CheckedOut);
        assert_eq!(response.redirect_to, "/");

        // Já saiu: não pode sair de novo
        let err = checkout.check_out(session, "1").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidStatusTransition(_)));

        assert!(matches!(
            checkout.check_out(session, "999").await,
            Err(AppError::BookingNotFound)
        ));
        assert!(matches!(
            checkout.summary(session, "999").await,
            Err(AppError::BookingNotFound)
        ));
    }
}
