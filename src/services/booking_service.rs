// src/services/booking_service.rs

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{
    common::{error::AppError, validation::amount_overflow},
    db::SessionRepository,
    models::{
        booking::{BookRoomPayload, Booking, BookingListing, BookingStatus},
        room::RoomStatus,
    },
    query::{self, booking_stats, filter, mutation, Criteria},
};

#[derive(Clone)]
pub struct BookingService {
    repo: SessionRepository,
}

impl BookingService {
    pub fn new(repo: SessionRepository) -> Self {
        Self { repo }
    }

    pub async fn list(
        &self,
        session_id: Uuid,
        criteria: &Criteria<Booking>,
    ) -> Result<BookingListing, AppError> {
        self.repo
            .read(session_id, |session| {
                let bookings = filter(&session.bookings, criteria);
                let stats = booking_stats(&bookings);
                BookingListing { bookings, stats }
            })
            .await
    }

    /// "Minhas reservas": tudo que não foi cancelado.
    pub async fn list_for_guest(&self, session_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.repo
            .read(session_id, |session| {
                session
                    .bookings
                    .iter()
                    .filter(|b| b.status != BookingStatus::Cancelled)
                    .cloned()
                    .collect()
            })
            .await
    }

    /// Reserva um quarto disponível. O quarto passa a `reserved` e o total é
    /// diárias x preço.
    pub async fn book_room(
        &self,
        session_id: Uuid,
        room_id: &str,
        payload: BookRoomPayload,
    ) -> Result<Booking, AppError> {
        payload.validate()?;
        if let Err(err) = payload.validate_consistency() {
            let mut errors = ValidationErrors::new();
            errors.add("checkOut", err);
            return Err(AppError::ValidationError(errors));
        }

        let booking = self
            .repo
            .write(session_id, |session| -> Result<Booking, AppError> {
                let room = mutation::find(&session.rooms, room_id).ok_or(AppError::RoomNotFound)?;
                if room.status != RoomStatus::Available {
                    return Err(AppError::RoomUnavailable);
                }

                let nights = (payload.check_out - payload.check_in).num_days();
                let total_amount = room
                    .price
                    .checked_mul(Decimal::from(nights))
                    .ok_or_else(|| amount_overflow("totalAmount"))?;
                let booking = Booking {
                    id: Uuid::new_v4().to_string(),
                    room_id: room.id.clone(),
                    room_number: room.number.clone(),
                    guest_name: payload.guest_name,
                    guest_email: payload.guest_email,
                    check_in: payload.check_in,
                    check_out: payload.check_out,
                    status: BookingStatus::Confirmed,
                    total_amount,
                    created_at: Utc::now().date_naive(),
                };

                session.rooms = mutation::set_status(&session.rooms, room_id, RoomStatus::Reserved);
                session.bookings = mutation::insert(&session.bookings, booking.clone());
                Ok(booking)
            })
            .await??;

        tracing::info!(
            session = %session_id,
            booking_id = %booking.id,
            room = %booking.room_number,
            total = %booking.total_amount,
            "Reserva criada"
        );
        Ok(booking)
    }

    pub async fn set_status(
        &self,
        session_id: Uuid,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        let updated = self
            .repo
            .write(session_id, |session| {
                session.bookings = query::transition::transition(&session.bookings, booking_id, status)
                    .inspect_err(|e| tracing::warn!(booking_id, error = %e, "Transição de reserva recusada"))?;
                Ok::<_, AppError>(mutation::find(&session.bookings, booking_id).cloned())
            })
            .await??;

        if updated.is_some() {
            tracing::info!(session = %session_id, booking_id, status = status.as_str(), "Status da reserva alterado");
        }
        Ok(updated)
    }
}
