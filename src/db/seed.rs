// src/db/seed.rs

// Conjunto de dados inicial de cada sessão. Recarregado igual toda vez.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{
    booking::{Booking, BookingStatus},
    menu::{FoodCategory, FoodItem},
    room::{Room, RoomStatus, RoomType},
    service_request::{Priority, ServiceRequest, ServiceStatus, ServiceType},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn room(
    id: &str,
    number: &str,
    room_type: RoomType,
    price: i64,
    status: RoomStatus,
    amenities: &[&str],
    capacity: u32,
    image: &str,
    description: &str,
) -> Room {
    Room {
        id: id.to_string(),
        number: number.to_string(),
        room_type,
        price: Decimal::from(price),
        status,
        amenities: strings(amenities),
        capacity,
        image: image.to_string(),
        description: description.to_string(),
    }
}

pub fn rooms() -> Vec<Room> {
    let standard = ["WiFi", "TV", "Air Conditioning", "Mini Bar"];
    let deluxe = ["WiFi", "TV", "Air Conditioning", "Mini Bar", "Balcony", "Coffee Machine"];

    vec![
        room(
            "1", "101", RoomType::Standard, 120, RoomStatus::Available, &standard, 2,
            "https://images.unsplash.com/photo-1631049307264-da0ec9d70304?w=800",
            "Comfortable standard room with city view",
        ),
        room(
            "2", "102", RoomType::Standard, 120, RoomStatus::Occupied, &standard, 2,
            "https://images.unsplash.com/photo-1618773928121-c32242e63f39?w=800",
            "Cozy standard room with garden view",
        ),
        room(
            "3", "201", RoomType::Deluxe, 200, RoomStatus::Available, &deluxe, 2,
            "https://images.unsplash.com/photo-1590490360182-c33d57733427?w=800",
            "Spacious deluxe room with panoramic views",
        ),
        room(
            "4", "202", RoomType::Deluxe, 200, RoomStatus::Maintenance, &deluxe, 2,
            "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?w=800",
            "Elegant deluxe room with modern amenities",
        ),
        room(
            "5", "301", RoomType::Suite, 350, RoomStatus::Available,
            &["WiFi", "TV", "Air Conditioning", "Mini Bar", "Balcony", "Coffee Machine", "Jacuzzi", "Living Room"],
            4,
            "https://images.unsplash.com/photo-1591088398332-8a7791972843?w=800",
            "Luxurious suite with separate living area",
        ),
        room(
            "6", "401", RoomType::Presidential, 800, RoomStatus::Reserved,
            &[
                "WiFi", "TV", "Air Conditioning", "Mini Bar", "Private Terrace", "Coffee Machine",
                "Jacuzzi", "Living Room", "Dining Room", "Butler Service",
            ],
            6,
            "https://images.unsplash.com/photo-1578683010236-d716f9a3f461?w=800",
            "The ultimate luxury experience with panoramic views",
        ),
    ]
}

fn food(
    id: &str,
    name: &str,
    description: &str,
    price: i64,
    category: FoodCategory,
    image: &str,
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::from(price),
        category,
        image: image.to_string(),
        available: true,
    }
}

pub fn food_items() -> Vec<FoodItem> {
    vec![
        food("1", "Continental Breakfast", "Fresh croissants, fruits, yogurt, and fresh juice", 25,
            FoodCategory::Breakfast, "https://images.unsplash.com/photo-1533089860892-a7c6f0a88666?w=800"),
        food("2", "Eggs Benedict", "Poached eggs with hollandaise sauce on English muffin", 18,
            FoodCategory::Breakfast, "/assets/eggs-benedict.jpg"),
        food("3", "Grilled Salmon", "Fresh Atlantic salmon with seasonal vegetables", 35,
            FoodCategory::Lunch, "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=800"),
        food("4", "Caesar Salad", "Crispy romaine lettuce with parmesan and croutons", 16,
            FoodCategory::Lunch, "https://images.unsplash.com/photo-1550304943-4f24f54ddde9?w=800"),
        food("5", "Filet Mignon", "Premium beef tenderloin with truffle mashed potatoes", 55,
            FoodCategory::Dinner, "https://images.unsplash.com/photo-1558030006-450675393462?w=800"),
        food("6", "Lobster Thermidor", "Classic French lobster dish with creamy sauce", 75,
            FoodCategory::Dinner, "https://images.unsplash.com/photo-1559737558-2f5a35f4523b?w=800"),
        food("7", "Fresh Orange Juice", "Freshly squeezed orange juice", 8,
            FoodCategory::Beverages, "https://images.unsplash.com/photo-1621506289937-a8e4df240d0b?w=800"),
        food("8", "Champagne", "Premium French champagne", 120,
            FoodCategory::Beverages, "https://images.unsplash.com/photo-1594372365401-3b5ff14eaaed?w=800"),
        food("9", "Chocolate Lava Cake", "Warm chocolate cake with molten center", 14,
            FoodCategory::Desserts, "https://images.unsplash.com/photo-1624353365286-3f8d62daad51?w=800"),
        food("10", "Crème Brûlée", "Classic French vanilla custard with caramelized top", 12,
            FoodCategory::Desserts, "https://images.unsplash.com/photo-1470124182917-cc6e71b22ecc?w=800"),
    ]
}

pub fn bookings() -> Vec<Booking> {
    let booking = |id: &str,
                   room_id: &str,
                   room_number: &str,
                   guest_name: &str,
                   guest_email: &str,
                   check_in: NaiveDate,
                   check_out: NaiveDate,
                   status: BookingStatus,
                   total_amount: i64,
                   created_at: NaiveDate| Booking {
        id: id.to_string(),
        room_id: room_id.to_string(),
        room_number: room_number.to_string(),
        guest_name: guest_name.to_string(),
        guest_email: guest_email.to_string(),
        check_in,
        check_out,
        status,
        total_amount: Decimal::from(total_amount),
        created_at,
    };

    vec![
        booking("1", "2", "102", "John Smith", "john.smith@email.com",
            date(2024, 12, 20), date(2024, 12, 25), BookingStatus::CheckedIn, 600, date(2024, 12, 15)),
        booking("2", "6", "401", "Emma Johnson", "emma.j@email.com",
            date(2024, 12, 26), date(2024, 12, 30), BookingStatus::Confirmed, 3200, date(2024, 12, 18)),
        booking("3", "1", "101", "Michael Brown", "mbrown@email.com",
            date(2024, 12, 10), date(2024, 12, 15), BookingStatus::CheckedOut, 600, date(2024, 12, 5)),
        booking("4", "5", "301", "Sarah Davis", "sarah.d@email.com",
            date(2024, 12, 22), date(2024, 12, 28), BookingStatus::Confirmed, 2100, date(2024, 12, 19)),
    ]
}

pub fn service_requests() -> Vec<ServiceRequest> {
    let request = |id: &str,
                   room_number: &str,
                   guest_name: &str,
                   request_type: ServiceType,
                   description: &str,
                   status: ServiceStatus,
                   priority: Priority,
                   created_at: NaiveDateTime| ServiceRequest {
        id: id.to_string(),
        room_number: room_number.to_string(),
        guest_name: guest_name.to_string(),
        request_type,
        description: description.to_string(),
        status,
        priority,
        created_at,
    };

    vec![
        request("1", "102", "John Smith", ServiceType::Cleaning, "Daily room cleaning requested",
            ServiceStatus::Pending, Priority::Medium, date_time(2024, 12, 24, 8, 30)),
        request("2", "102", "John Smith", ServiceType::Towels, "Extra towels needed",
            ServiceStatus::InProgress, Priority::Low, date_time(2024, 12, 24, 9, 15)),
        request("3", "301", "Sarah Davis", ServiceType::Maintenance, "Air conditioning not working properly",
            ServiceStatus::Pending, Priority::High, date_time(2024, 12, 24, 7, 45)),
        request("4", "201", "Robert Wilson", ServiceType::Laundry, "Express laundry service needed",
            ServiceStatus::Completed, Priority::Medium, date_time(2024, 12, 23, 14, 20)),
    ]
}
