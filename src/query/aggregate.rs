// src/query/aggregate.rs

use rust_decimal::Decimal;

use crate::models::{
    booking::{Booking, BookingStatus, BookingStats},
    menu::{CategoryCount, FoodCategory, FoodItem, MenuStats},
    room::{Room, RoomStats, RoomStatus},
    service_request::{Priority, ServiceRequest, ServiceStats, ServiceStatus},
};

pub fn room_stats(rooms: &[Room]) -> RoomStats {
    let count = |status: RoomStatus| rooms.iter().filter(|r| r.status == status).count();
    let occupied = count(RoomStatus::Occupied);

    RoomStats {
        total: rooms.len(),
        available: count(RoomStatus::Available),
        occupied,
        maintenance: count(RoomStatus::Maintenance),
        reserved: count(RoomStatus::Reserved),
        occupancy_rate: occupancy_rate(occupied, rooms.len()),
    }
}

/// Percentual arredondado de quartos ocupados; 0 sem quartos.
pub fn occupancy_rate(occupied: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (occupied as f64 / total as f64 * 100.0).round() as u32
}

/// Soma de `total_amount` das reservas não canceladas. Satura em
/// `Decimal::MAX`.
pub fn revenue(bookings: &[Booking]) -> Decimal {
    bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
        .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.total_amount))
}

pub fn booking_stats(bookings: &[Booking]) -> BookingStats {
    let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();

    BookingStats {
        total: bookings.len(),
        confirmed: count(BookingStatus::Confirmed),
        checked_in: count(BookingStatus::CheckedIn),
        checked_out: count(BookingStatus::CheckedOut),
        cancelled: count(BookingStatus::Cancelled),
        revenue: revenue(bookings),
    }
}

pub fn menu_stats(items: &[FoodItem]) -> MenuStats {
    let available = items.iter().filter(|i| i.available).count();
    let by_category = FoodCategory::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: items.iter().filter(|i| i.category == category).count(),
        })
        .collect();

    MenuStats {
        total: items.len(),
        available,
        unavailable: items.len() - available,
        by_category,
    }
}

pub fn service_stats(requests: &[ServiceRequest]) -> ServiceStats {
    let count = |status: ServiceStatus| requests.iter().filter(|r| r.status == status).count();

    ServiceStats {
        total: requests.len(),
        pending: count(ServiceStatus::Pending),
        in_progress: count(ServiceStatus::InProgress),
        completed: count(ServiceStatus::Completed),
        open_high_priority: requests
            .iter()
            .filter(|r| r.priority == Priority::High && r.status != ServiceStatus::Completed)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;
    use crate::query::{filter, mutation, Criteria};

    #[test]
    fn confirmed_bookings_scenario() {
        let bookings = seed::bookings();

        let confirmed = filter(&bookings, &Criteria::new().status(BookingStatus::Confirmed));
        assert_eq!(confirmed.len(), 2);
        let total: Decimal = confirmed.iter().map(|b| b.total_amount).sum();
        assert_eq!(total, Decimal::from(5300));

        let stats = booking_stats(&bookings);
        assert_eq!(stats.revenue, Decimal::from(6500));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.confirmed, 2);
        assert_eq!(stats.checked_in, 1);
        assert_eq!(stats.checked_out, 1);
        assert_eq!(stats.cancelled, 0);
    }

    #[test]
    fn revenue_saturates_instead_of_panicking() {
        let bookings: Vec<Booking> = seed::bookings()
            .into_iter()
            .map(|mut b| {
                b.total_amount = Decimal::MAX;
                b
            })
            .collect();
        assert_eq!(revenue(&bookings), Decimal::MAX);
    }

    #[test]
    fn revenue_excludes_cancelled() {
        let bookings = mutation::set_status(&seed::bookings(), "2", BookingStatus::Cancelled);
        let expected: Decimal = bookings
            .iter()
            .filter(|b| b.status != BookingStatus::Cancelled)
            .map(|b| b.total_amount)
            .sum();
        assert_eq!(revenue(&bookings), expected);
        assert_eq!(revenue(&bookings), Decimal::from(3300));
    }

    #[test]
    fn occupancy_rate_scenario() {
        let rooms = seed::rooms();
        let stats = room_stats(&rooms);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.available, 3);
        assert_eq!(stats.occupied, 1);
        assert_eq!(stats.occupancy_rate, 17);

        // Seis quartos, dois disponíveis, um ocupado.
        let rooms = mutation::set_status(&rooms, "5", RoomStatus::Maintenance);
        let stats = room_stats(&rooms);
        assert_eq!(stats.available, 2);
        assert_eq!(stats.occupancy_rate, 17);
    }

    #[test]
    fn empty_collections_aggregate_to_zero() {
        assert_eq!(room_stats(&[]).occupancy_rate, 0);
        assert_eq!(booking_stats(&[]).revenue, Decimal::ZERO);
        assert_eq!(service_stats(&[]).total, 0);
        assert_eq!(menu_stats(&[]).by_category.len(), 5);
    }

    #[test]
    fn service_stats_count_open_high_priority() {
        let requests = seed::service_requests();
        let stats = service_stats(&requests);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.open_high_priority, 1);
    }

    #[test]
    fn menu_stats_by_category() {
        let items = mutation::replace(
            &seed::food_items(),
            "8",
            crate::models::menu::FoodItemPatch {
                available: Some(false),
                ..Default::default()
            },
        );
        let stats = menu_stats(&items);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.available, 9);
        assert_eq!(stats.unavailable, 1);
        assert!(stats.by_category.iter().all(|c| c.count == 2));
    }
}
