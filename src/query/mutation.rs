// src/query/mutation.rs

use super::Queryable;

/// Alteração parcial de um registro: campos ausentes ficam como estão.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}

pub fn find<'a, T: Queryable>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

pub fn insert<T: Queryable>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Aplica o patch ao registro com o `id` informado. Id desconhecido não
/// altera nada.
pub fn replace<T, P>(items: &[T], id: &str, patch: P) -> Vec<T>
where
    T: Queryable,
    P: Patch<T>,
{
    let mut patch = Some(patch);
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id() == id {
                if let Some(patch) = patch.take() {
                    patch.apply_to(&mut item);
                }
            }
            item
        })
        .collect()
}

pub fn remove<T: Queryable>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

/// Atribui o status sem validar a transição.
pub fn set_status<T: Queryable>(items: &[T], id: &str, status: T::Status) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            let mut item = item.clone();
            if item.id() == id {
                item.set_status(status);
            }
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;
    use crate::models::booking::BookingStatus;
    use crate::models::menu::FoodItemPatch;
    use crate::models::room::{RoomPatch, RoomStatus};
    use crate::query::{filter, Criteria};
    use rust_decimal::Decimal;

    #[test]
    fn delete_unknown_id_is_noop() {
        let bookings = seed::bookings();
        let next = remove(&bookings, "999");
        assert_eq!(next, bookings);
    }

    #[test]
    fn deleted_id_never_comes_back_from_filter() {
        let rooms = seed::rooms();
        let next = remove(&rooms, "3");
        assert_eq!(next.len(), rooms.len() - 1);
        assert!(filter(&next, &Criteria::new()).iter().all(|r| r.id != "3"));
        // A coleção original não foi tocada.
        assert_eq!(rooms.len(), 6);
    }

    #[test]
    fn patch_merges_over_prior_record() {
        let rooms = seed::rooms();
        let patch = RoomPatch {
            price: Some(Decimal::from(150)),
            description: Some("Renovated standard room".to_string()),
            ..Default::default()
        };
        let next = replace(&rooms, "1", patch);
        let before = find(&rooms, "1").unwrap();
        let after = find(&next, "1").unwrap();

        assert_eq!(after.price, Decimal::from(150));
        assert_eq!(after.description, "Renovated standard room");
        assert_eq!(after.number, before.number);
        assert_eq!(after.room_type, before.room_type);
        assert_eq!(after.status, before.status);
        assert_eq!(after.amenities, before.amenities);
        assert_eq!(next[1..], rooms[1..]);
    }

    #[test]
    fn patch_on_unknown_id_is_noop() {
        let menu = seed::food_items();
        let patch = FoodItemPatch {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };
        assert_eq!(replace(&menu, "999", patch), menu);
    }

    #[test]
    fn insert_appends_at_the_end() {
        let rooms = seed::rooms();
        let mut room = rooms[0].clone();
        room.id = "new".to_string();
        let next = insert(&rooms, room);
        assert_eq!(next.len(), 7);
        assert_eq!(next.last().map(|r| r.id.as_str()), Some("new"));
    }

    #[test]
    fn set_status_accepts_any_value() {
        let bookings = seed::bookings();
        // checked-out -> confirmed não é uma transição válida, mas aqui não há validação.
        let next = set_status(&bookings, "3", BookingStatus::Confirmed);
        assert_eq!(find(&next, "3").unwrap().status, BookingStatus::Confirmed);

        let rooms = seed::rooms();
        let next = set_status(&rooms, "999", RoomStatus::Maintenance);
        assert_eq!(next, rooms);
    }
}
