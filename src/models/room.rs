// src/models/room.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::common::validation::validate_price;
use crate::query::{mutation::Patch, Queryable};

pub const DEFAULT_ROOM_IMAGE: &str =
    "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?w=800";

// --- Enums ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
    Reserved,
}

impl RoomStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Maintenance => "maintenance",
            RoomStatus::Reserved => "reserved",
        }
    }
}

// --- Quarto ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "101")]
    pub number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[schema(example = 120)]
    pub price: Decimal,
    pub status: RoomStatus,
    pub amenities: Vec<String>,
    #[schema(example = 2)]
    pub capacity: u32,
    pub image: String,
    pub description: String,
}

impl Queryable for Room {
    type Category = RoomType;
    type Status = RoomStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.number.as_str(), self.description.as_str()]
    }

    fn category(&self) -> Option<RoomType> {
        Some(self.room_type)
    }

    fn status(&self) -> RoomStatus {
        self.status
    }

    fn set_status(&mut self, status: RoomStatus) {
        self.status = status;
    }
}

// --- Payloads ---

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    #[validate(length(min = 1, message = "O número do quarto é obrigatório."))]
    #[schema(example = "501")]
    pub number: String,

    #[serde(rename = "type")]
    pub room_type: RoomType,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    // Se não vier no JSON, o quarto entra como disponível
    #[serde(default = "default_status")]
    pub status: RoomStatus,

    #[validate(range(min = 1, message = "A capacidade deve ser de pelo menos 1 hóspede."))]
    pub capacity: u32,

    #[serde(default)]
    pub description: String,

    pub amenities: Option<Vec<String>>,

    pub image: Option<String>,
}

fn default_status() -> RoomStatus {
    RoomStatus::Available
}

impl NewRoom {
    pub fn into_room(self, id: String) -> Room {
        Room {
            id,
            number: self.number,
            room_type: self.room_type,
            price: self.price,
            status: self.status,
            capacity: self.capacity,
            description: self.description,
            amenities: self.amenities.unwrap_or_else(default_amenities),
            image: self.image.unwrap_or_else(|| DEFAULT_ROOM_IMAGE.to_string()),
        }
    }
}

pub fn default_amenities() -> Vec<String> {
    ["WiFi", "TV", "Air Conditioning"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomPatch {
    #[validate(length(min = 1, message = "O número do quarto não pode ser vazio."))]
    pub number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<RoomType>,
    #[validate(custom(function = "validate_price"))]
    pub price: Option<Decimal>,
    pub status: Option<RoomStatus>,
    #[validate(range(min = 1, message = "A capacidade deve ser de pelo menos 1 hóspede."))]
    pub capacity: Option<u32>,
    pub description: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub image: Option<String>,
}

impl Patch<Room> for RoomPatch {
    fn apply_to(self, room: &mut Room) {
        if let Some(number) = self.number {
            room.number = number;
        }
        if let Some(room_type) = self.room_type {
            room.room_type = room_type;
        }
        if let Some(price) = self.price {
            room.price = price;
        }
        if let Some(status) = self.status {
            room.status = status;
        }
        if let Some(capacity) = self.capacity {
            room.capacity = capacity;
        }
        if let Some(description) = self.description {
            room.description = description;
        }
        if let Some(amenities) = self.amenities {
            room.amenities = amenities;
        }
        if let Some(image) = self.image {
            room.image = image;
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomStatusPayload {
    pub status: RoomStatus,
}

// --- Agregados ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomStats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub maintenance: usize,
    pub reserved: usize,
    /// Percentual inteiro de quartos ocupados.
    pub occupancy_rate: u32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomListing {
    pub rooms: Vec<Room>,
    pub stats: RoomStats,
}
