pub mod auth;
pub use auth::AuthService;
pub mod booking_service;
pub use booking_service::BookingService;
pub mod checkout_service;
pub use checkout_service::CheckoutService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod food_order_service;
pub use food_order_service::FoodOrderService;
pub mod menu_service;
pub use menu_service::MenuService;
pub mod request_service;
pub use request_service::RequestService;
pub mod room_service;
pub use room_service::RoomService;
