// src/models/food_order.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodOrderStatus {
    Pending,
    Preparing,
    Delivered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodOrderLine {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    // Preço unitário no momento do pedido
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodOrder {
    pub id: String,
    pub room_number: String,
    pub items: Vec<FoodOrderLine>,
    pub total: Decimal,
    pub status: FoodOrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderPayload {
    #[validate(length(min = 1, message = "O número do quarto é obrigatório."))]
    pub room_number: String,
    #[validate(length(min = 1, message = "O carrinho está vazio."))]
    pub items: Vec<CartLine>,
}
