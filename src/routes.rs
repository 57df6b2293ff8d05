// src/routes.rs

use axum::{
    http::StatusCode,
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    common::error::ApiError, config::AppState, docs::ApiDoc, handlers, middleware::i18n::Locale,
};

async fn not_found(locale: Locale) -> ApiError {
    let error = if locale.is_portuguese() {
        "Rota não encontrada."
    } else {
        "Not found."
    };
    ApiError {
        status: StatusCode::NOT_FOUND,
        error: error.to_string(),
        details: None,
    }
}

pub fn app(app_state: AppState) -> Router {
    // Login/logout: não exigem sessão prévia (exceto o DELETE)
    let auth_routes = Router::new()
        .route("/sign-in", post(handlers::auth::sign_in))
        .route("/sign-up", post(handlers::auth::sign_up))
        .route("/session", delete(handlers::auth::sign_out));

    let navigation_routes = Router::new()
        .route("/resolve", get(handlers::navigation::resolve))
        .route("/sidebar/{role}", get(handlers::navigation::sidebar));

    let admin_routes = Router::new()
        .route("/dashboard", get(handlers::dashboard::get_summary))
        // Quartos
        .route(
            "/rooms",
            get(handlers::rooms::list_rooms).post(handlers::rooms::create_room),
        )
        .route(
            "/rooms/{id}",
            put(handlers::rooms::update_room).delete(handlers::rooms::delete_room),
        )
        .route("/rooms/{id}/status", patch(handlers::rooms::set_room_status))
        // Cardápio
        .route(
            "/menu",
            get(handlers::menu::list_items).post(handlers::menu::create_item),
        )
        .route(
            "/menu/{id}",
            put(handlers::menu::update_item).delete(handlers::menu::delete_item),
        )
        .route(
            "/menu/{id}/toggle-availability",
            post(handlers::menu::toggle_availability),
        )
        // Reservas e pedidos
        .route("/bookings", get(handlers::bookings::list_bookings))
        .route(
            "/bookings/{id}/status",
            patch(handlers::bookings::set_booking_status),
        )
        .route("/services", get(handlers::service_requests::list_requests))
        .route(
            "/services/{id}/status",
            patch(handlers::service_requests::set_request_status),
        );

    let customer_routes = Router::new()
        .route("/rooms", get(handlers::customer::list_rooms))
        .route("/rooms/{id}/book", post(handlers::customer::book_room))
        .route("/bookings", get(handlers::customer::my_bookings))
        .route("/menu", get(handlers::customer::menu))
        .route(
            "/food-orders",
            get(handlers::customer::list_orders).post(handlers::customer::place_order),
        )
        .route("/services", post(handlers::customer::submit_request))
        .route(
            "/checkout/{booking_id}",
            get(handlers::customer::checkout_summary).post(handlers::customer::check_out),
        );

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/auth", auth_routes)
        .nest("/api/navigation", navigation_routes)
        .nest("/api/admin", admin_routes)
        .nest("/api/customer", customer_routes)
        .fallback(not_found)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{header, Method, Request, Response},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(AppState::new(&Config::default()))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        session: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(session) = session {
            builder = builder.header("x-session-id", session);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn sign_in(app: &Router, role: &str) -> String {
        let response = send(app, Method::POST, "/api/auth/sign-in", None, Some(json!({ "role": role }))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await["sessionId"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_public() {
        let response = send(&test_app(), Method::GET, "/api/health", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn filtered_rooms_come_with_stats() {
        let app = test_app();
        let session = sign_in(&app, "admin").await;

        let response = send(&app, Method::GET, "/api/admin/rooms?search=&type=all&status=available", Some(&session), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["rooms"].as_array().unwrap().len(), 3);
        assert_eq!(body["stats"]["total"], 3);

        let response = send(&app, Method::GET, "/api/admin/rooms?status=vacant", Some(&session), None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn session_header_is_required() {
        let app = test_app();

        let response = send(&app, Method::GET, "/api/admin/dashboard", None, None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, Method::GET, "/api/admin/dashboard", Some("abc"), None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let unknown = uuid::Uuid::new_v4().to_string();
        let response = send(&app, Method::GET, "/api/admin/dashboard", Some(&unknown), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sessions_do_not_share_data() {
        let app = test_app();
        let a = sign_in(&app, "admin").await;
        let b = sign_in(&app, "admin").await;

        let response = send(&app, Method::DELETE, "/api/admin/rooms/1", Some(&a), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let rooms_a = body_json(send(&app, Method::GET, "/api/admin/rooms", Some(&a), None).await).await;
        let rooms_b = body_json(send(&app, Method::GET, "/api/admin/rooms", Some(&b), None).await).await;
        assert_eq!(rooms_a["stats"]["total"], 5);
        assert_eq!(rooms_b["stats"]["total"], 6);

        // Sair descarta tudo; a sessão deixa de existir
        let response = send(&app, Method::DELETE, "/api/auth/session", Some(&a), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = send(&app, Method::GET, "/api/admin/rooms", Some(&a), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_ids_answer_no_content() {
        let app = test_app();
        let session = sign_in(&app, "admin").await;

        let response = send(
            &app,
            Method::PUT,
            "/api/admin/rooms/999",
            Some(&session),
            Some(json!({ "capacity": 4 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = send(
            &app,
            Method::PATCH,
            "/api/admin/bookings/999/status",
            Some(&session),
            Some(json!({ "status": "cancelled" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn invalid_transition_is_a_localized_conflict() {
        let app = test_app();
        let session = sign_in(&app, "admin").await;

        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/api/admin/bookings/3/status")
            .header("x-session-id", &session)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT_LANGUAGE, "pt-BR")
            .body(Body::from(json!({ "status": "confirmed" }).to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "Não é possível mudar o status de 'checked-out' para 'confirmed'."
        );
    }

    #[tokio::test]
    async fn negative_price_is_rejected() {
        let app = test_app();
        let session = sign_in(&app, "admin").await;

        let response = send(
            &app,
            Method::POST,
            "/api/admin/menu",
            Some(&session),
            Some(json!({ "name": "Soup", "price": -5, "category": "lunch" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["details"]["price"].is_array());
    }

    #[tokio::test]
    async fn guest_books_orders_and_checks_out() {
        let app = test_app();
        let session = sign_in(&app, "customer").await;

        let response = send(
            &app,
            Method::POST,
            "/api/customer/rooms/3/book",
            Some(&session),
            Some(json!({
                "guestName": "Ana Costa",
                "guestEmail": "ana@email.com",
                "checkIn": "2025-01-10",
                "checkOut": "2025-01-12"
            })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let booking = body_json(response).await;
        assert_eq!(booking["totalAmount"], 400.0);

        let response = send(
            &app,
            Method::POST,
            "/api/customer/food-orders",
            Some(&session),
            Some(json!({ "roomNumber": "102", "items": [{ "itemId": "7", "quantity": 2 }] })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let summary = body_json(
            send(&app, Method::GET, "/api/customer/checkout/1", Some(&session), None).await,
        )
        .await;
        assert_eq!(summary["foodAndServices"], 16.0);
        assert_eq!(summary["total"], 616.0);

        let response = send(&app, Method::POST, "/api/customer/checkout/1", Some(&session), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["redirectTo"], "/");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_json_404() {
        let response = send(&test_app(), Method::GET, "/admin", None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Not found.");
    }

    #[tokio::test]
    async fn navigation_resolves_ui_paths() {
        let app = test_app();

        let body = body_json(send(&app, Method::GET, "/api/navigation/resolve?path=/admin/rooms", None, None).await).await;
        assert_eq!(body["page"], "admin-rooms");

        let body = body_json(send(&app, Method::GET, "/api/navigation/resolve?path=/nope", None, None).await).await;
        assert_eq!(body["page"], "not-found");

        let body = body_json(send(&app, Method::GET, "/api/navigation/sidebar/customer", None, None).await).await;
        assert_eq!(body.as_array().unwrap().len(), 6);
    }
}
