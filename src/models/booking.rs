// src/models/booking.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::query::Queryable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,  // Vira "checked-in"
    CheckedOut, // Vira "checked-out"
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Reserva que ainda ocupa (ou vai ocupar) um quarto.
    pub fn is_active(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[schema(example = "1")]
    pub id: String,
    pub room_id: String,
    // Cópia do número do quarto, nunca ressincronizada
    #[schema(example = "102")]
    pub room_number: String,
    #[schema(example = "John Smith")]
    pub guest_name: String,
    #[schema(example = "john.smith@email.com")]
    pub guest_email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    #[schema(example = 600)]
    pub total_amount: Decimal,
    pub created_at: NaiveDate,
}

impl Booking {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

// Reservas não têm dimensão de categoria.
impl Queryable for Booking {
    type Category = std::convert::Infallible;
    type Status = BookingStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.guest_name.as_str(),
            self.guest_email.as_str(),
            self.room_number.as_str(),
        ]
    }

    fn category(&self) -> Option<Self::Category> {
        None
    }

    fn status(&self) -> BookingStatus {
        self.status
    }

    fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingStatusPayload {
    pub status: BookingStatus,
}

// Dados para o hóspede reservar um quarto
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookRoomPayload {
    #[validate(length(min = 1, message = "O nome do hóspede é obrigatório."))]
    pub guest_name: String,
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    pub guest_email: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl BookRoomPayload {
    pub fn validate_consistency(&self) -> Result<(), ValidationError> {
        // Regra: pelo menos uma diária
        if self.check_out <= self.check_in {
            let mut err = ValidationError::new("CheckOutBeforeCheckIn");
            err.message = Some("A data de saída deve ser posterior à data de entrada.".into());
            return Err(err);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    pub total: usize,
    pub confirmed: usize,
    pub checked_in: usize,
    pub checked_out: usize,
    pub cancelled: usize,
    /// Soma das reservas não canceladas.
    pub revenue: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingListing {
    pub bookings: Vec<Booking>,
    pub stats: BookingStats,
}
