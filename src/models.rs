pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod food_order;
pub mod menu;
pub mod navigation;
pub mod room;
pub mod service_request;
