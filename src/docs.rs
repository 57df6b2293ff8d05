// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Dashboard API", description = "Painel do hotel: quartos, cardápio, reservas e pedidos de serviço"),
    paths(
        // --- Auth ---
        handlers::auth::sign_in,
        handlers::auth::sign_up,
        handlers::auth::sign_out,

        // --- Navigation ---
        handlers::navigation::resolve,
        handlers::navigation::sidebar,

        // --- Dashboard ---
        handlers::dashboard::get_summary,

        // --- Rooms ---
        handlers::rooms::list_rooms,
        handlers::rooms::create_room,
        handlers::rooms::update_room,
        handlers::rooms::delete_room,
        handlers::rooms::set_room_status,

        // --- Menu ---
        handlers::menu::list_items,
        handlers::menu::create_item,
        handlers::menu::toggle_availability,

        // --- Bookings / Services ---
        handlers::bookings::list_bookings,
        handlers::bookings::set_booking_status,
        handlers::service_requests::list_requests,
        handlers::service_requests::set_request_status,

        // --- Customer ---
        handlers::customer::list_rooms,
        handlers::customer::book_room,
        handlers::customer::menu,
        handlers::customer::place_order,
        handlers::customer::submit_request,
        handlers::customer::checkout_summary,
        handlers::customer::check_out,
    ),
    components(
        schemas(
            // --- Auth ---
            models::auth::UserRole,
            models::auth::SignInPayload,
            models::auth::SignInResponse,
            models::auth::SignUpPayload,
            models::auth::RedirectResponse,

            // --- Navigation ---
            models::navigation::Page,
            models::navigation::ResolvedRoute,
            models::navigation::SidebarEntry,

            // --- Rooms ---
            models::room::RoomType,
            models::room::RoomStatus,
            models::room::Room,
            models::room::NewRoom,
            models::room::RoomPatch,
            models::room::RoomStatusPayload,
            models::room::RoomStats,
            models::room::RoomListing,

            // --- Menu ---
            models::menu::FoodCategory,
            models::menu::FoodItem,
            models::menu::NewFoodItem,
            models::menu::FoodItemPatch,
            models::menu::CategoryCount,
            models::menu::MenuStats,
            models::menu::MenuListing,
            models::menu::MenuSection,

            // --- Bookings ---
            models::booking::BookingStatus,
            models::booking::Booking,
            models::booking::BookingStatusPayload,
            models::booking::BookRoomPayload,
            models::booking::BookingStats,
            models::booking::BookingListing,

            // --- Service requests ---
            models::service_request::ServiceType,
            models::service_request::ServiceStatus,
            models::service_request::Priority,
            models::service_request::ServiceRequest,
            models::service_request::NewServiceRequest,
            models::service_request::ServiceStatusPayload,
            models::service_request::ServiceStats,
            models::service_request::ServiceListing,

            // --- Food orders / checkout ---
            models::food_order::FoodOrderStatus,
            models::food_order::FoodOrderLine,
            models::food_order::FoodOrder,
            models::food_order::CartLine,
            models::food_order::PlaceOrderPayload,
            models::dashboard::DashboardSummary,
            models::dashboard::CheckoutSummary,
            models::dashboard::CheckoutResponse,
        )
    ),
    tags(
        (name = "Auth", description = "Abertura e encerramento de sessão"),
        (name = "Navigation", description = "Rotas da interface e menu lateral"),
        (name = "Dashboard", description = "Resumo do painel administrativo"),
        (name = "Rooms", description = "Gestão de quartos"),
        (name = "Menu", description = "Gestão do cardápio"),
        (name = "Bookings", description = "Reservas"),
        (name = "Services", description = "Pedidos de serviço"),
        (name = "Customer", description = "Área do hóspede")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_main_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/admin/rooms"));
        assert!(doc.paths.paths.contains_key("/api/customer/checkout/{booking_id}"));
    }
}
