// src/services/food_order_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{
    common::{error::AppError, validation::amount_overflow},
    db::SessionRepository,
    models::food_order::{CartLine, FoodOrder, FoodOrderLine, FoodOrderStatus, PlaceOrderPayload},
    query::mutation,
};

#[derive(Clone)]
pub struct FoodOrderService {
    repo: SessionRepository,
}

/// Junta linhas repetidas do carrinho (mantendo a ordem da primeira
/// ocorrência) e descarta quantidade zero. Uma soma que não cabe em `u32`
/// é erro de validação.
fn merge_cart(lines: Vec<CartLine>) -> Result<Vec<CartLine>, AppError> {
    let mut merged: Vec<CartLine> = Vec::new();
    for line in lines.into_iter().filter(|l| l.quantity > 0) {
        match merged.iter_mut().find(|m| m.item_id == line.item_id) {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(line.quantity)
                    .ok_or_else(|| amount_overflow("items"))?;
            }
            None => merged.push(line),
        }
    }
    Ok(merged)
}

fn empty_cart() -> AppError {
    let mut err = ValidationError::new("EmptyCart");
    err.message = Some("O carrinho está vazio.".into());
    let mut errors = ValidationErrors::new();
    errors.add("items", err);
    AppError::ValidationError(errors)
}

impl FoodOrderService {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    pub async fn place_order(
        &self,
        session_id: Uuid,
        payload: PlaceOrderPayload,
    ) -> Result<FoodOrder, AppError> {
        payload.validate()?;
        let cart = merge_cart(payload.items)?;
        if cart.is_empty() {
            return Err(empty_cart());
        }
        let room_number = payload.room_number;

        let order = self
            .repo
            .write(session_id, |session| -> Result<FoodOrder, AppError> {
                // Preço congelado no momento do pedido
                let lines = cart
                    .iter()
                    .map(|line| match mutation::find(&session.menu, &line.item_id) {
                        Some(item) if item.available => Ok(FoodOrderLine {
                            item_id: item.id.clone(),
                            name: item.name.clone(),
                            quantity: line.quantity,
                            price: item.price,
                        }),
                        _ => Err(AppError::MenuItemUnavailable(line.item_id.clone())),
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let total = lines
                    .iter()
                    .try_fold(Decimal::ZERO, |acc, l| {
                        l.price
                            .checked_mul(Decimal::from(l.quantity))
                            .and_then(|subtotal| acc.checked_add(subtotal))
                    })
                    .ok_or_else(|| amount_overflow("items"))?;

                let order = FoodOrder {
                    id: Uuid::new_v4().to_string(),
                    room_number,
                    items: lines,
                    total,
                    status: FoodOrderStatus::Pending,
                    created_at: Utc::now(),
                };
                session.food_orders.push(order.clone());
                Ok(order)
            })
            .await??;

        tracing::info!(
            session = %session_id,
            order_id = %order.id,
            room = %order.room_number,
            total = %order.total,
            "Pedido de comida registrado"
        );
        Ok(order)
    }

    pub async fn list(&self, session_id: Uuid) -> Result<Vec<FoodOrder>, AppError> {
        self.repo
            .read(session_id, |session| session.food_orders.clone())
            .await
    }
}
