// src/models/menu.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_price;
use crate::query::{mutation::Patch, Queryable};

pub const DEFAULT_FOOD_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=800";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Breakfast,
    Lunch,
    Dinner,
    Beverages,
    Desserts,
}

impl FoodCategory {
    // Ordem das abas do cardápio
    pub const ALL: [FoodCategory; 5] = [
        FoodCategory::Breakfast,
        FoodCategory::Lunch,
        FoodCategory::Dinner,
        FoodCategory::Beverages,
        FoodCategory::Desserts,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Continental Breakfast")]
    pub name: String,
    pub description: String,
    #[schema(example = 25)]
    pub price: Decimal,
    pub category: FoodCategory,
    pub image: String,
    pub available: bool,
}

// No cardápio o "status" é a disponibilidade do prato.
impl Queryable for FoodItem {
    type Category = FoodCategory;
    type Status = bool;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn category(&self) -> Option<FoodCategory> {
        Some(self.category)
    }

    fn status(&self) -> bool {
        self.available
    }

    fn set_status(&mut self, available: bool) {
        self.available = available;
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFoodItem {
    #[validate(length(min = 1, message = "O nome é obrigatório."))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    pub category: FoodCategory,

    #[serde(default = "default_available")]
    pub available: bool,

    pub image: Option<String>,
}

fn default_available() -> bool {
    true
}

impl NewFoodItem {
    pub fn into_item(self, id: String) -> FoodItem {
        FoodItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            category: self.category,
            available: self.available,
            image: self.image.unwrap_or_else(|| DEFAULT_FOOD_IMAGE.to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemPatch {
    #[validate(length(min = 1, message = "O nome não pode ser vazio."))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,
    pub category: Option<FoodCategory>,
    pub available: Option<bool>,
    pub image: Option<String>,
}

impl Patch<FoodItem> for FoodItemPatch {
    fn apply_to(self, item: &mut FoodItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(available) = self.available {
            item.available = available;
        }
        if let Some(image) = self.image {
            item.image = image;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CategoryCount {
    pub category: FoodCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuStats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
    pub by_category: Vec<CategoryCount>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuListing {
    pub items: Vec<FoodItem>,
    pub stats: MenuStats,
}

/// Uma aba do cardápio do hóspede.
#[derive(Debug, Serialize, ToSchema)]
pub struct MenuSection {
    pub category: FoodCategory,
    pub items: Vec<FoodItem>,
}
