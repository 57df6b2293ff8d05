// src/query/transition.rs

use thiserror::Error;

use super::{mutation, Queryable};
use crate::models::booking::BookingStatus;
use crate::models::room::RoomStatus;
use crate::models::service_request::ServiceStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transição de status inválida: {from} -> {to}")]
pub struct TransitionError {
    pub from: &'static str,
    pub to: &'static str,
}

/// Tabela de transições permitidas de um status.
pub trait StatusMachine: Copy + PartialEq {
    fn can_transition_to(self, next: Self) -> bool;

    /// Nome do status como aparece no JSON.
    fn label(self) -> &'static str;

    fn ensure_transition(self, next: Self) -> Result<(), TransitionError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(TransitionError {
                from: self.label(),
                to: next.label(),
            })
        }
    }
}

// Quartos: livre
impl StatusMachine for RoomStatus {
    fn can_transition_to(self, _next: Self) -> bool {
        true
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl StatusMachine for BookingStatus {
    fn can_transition_to(self, next: Self) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Confirmed, CheckedIn)
                | (CheckedIn, CheckedOut)
                | (Confirmed, Cancelled)
                | (CheckedIn, Cancelled)
        )
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

impl StatusMachine for ServiceStatus {
    fn can_transition_to(self, next: Self) -> bool {
        use ServiceStatus::*;
        matches!((self, next), (Pending, InProgress) | (InProgress, Completed))
    }

    fn label(self) -> &'static str {
        self.as_str()
    }
}

/// `set_status` com validação da tabela de transições. Id desconhecido
/// devolve a coleção inalterada.
pub fn transition<T>(items: &[T], id: &str, next: T::Status) -> Result<Vec<T>, TransitionError>
where
    T: Queryable,
    T::Status: StatusMachine,
{
    match mutation::find(items, id) {
        Some(current) => {
            current.status().ensure_transition(next)?;
            Ok(mutation::set_status(items, id, next))
        }
        None => Ok(items.to_vec()),
    }
}
