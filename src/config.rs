// src/config.rs

use std::env;

use anyhow::Context;
use chrono::Duration;

use crate::{
    db::{session_repo::DEFAULT_TTL_MINUTES, SessionRepository},
    services::{
        AuthService, BookingService, CheckoutService, DashboardService, FoodOrderService,
        MenuService, RequestService, RoomService,
    },
};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_SESSIONS: usize = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub max_sessions: usize,
    pub session_ttl: Duration,
}

impl Config {
    // Lê o .env (se existir) e depois as variáveis de ambiente.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string());

        let max_sessions = match env::var("MAX_SESSIONS") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("MAX_SESSIONS inválido: '{}'", raw))?,
            Err(_) => DEFAULT_MAX_SESSIONS,
        };

        let ttl_minutes: i64 = match env::var("SESSION_TTL_MINUTES") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SESSION_TTL_MINUTES inválido: '{}'", raw))?,
            Err(_) => DEFAULT_TTL_MINUTES,
        };
        if ttl_minutes <= 0 {
            anyhow::bail!("SESSION_TTL_MINUTES deve ser positivo: {}", ttl_minutes);
        }
        let session_ttl = Duration::try_minutes(ttl_minutes)
            .with_context(|| format!("SESSION_TTL_MINUTES fora do limite: {}", ttl_minutes))?;

        Ok(Self {
            server_addr,
            max_sessions,
            session_ttl,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDR.to_string(),
            max_sessions: DEFAULT_MAX_SESSIONS,
            session_ttl: Duration::minutes(DEFAULT_TTL_MINUTES),
        }
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub dashboard_service: DashboardService,
    pub room_service: RoomService,
    pub menu_service: MenuService,
    pub booking_service: BookingService,
    pub request_service: RequestService,
    pub food_order_service: FoodOrderService,
    pub checkout_service: CheckoutService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        // --- Monta o gráfico de dependências ---
        let sessions = SessionRepository::new(config.max_sessions).with_ttl(config.session_ttl);

        Self {
            auth_service: AuthService::new(sessions.clone()),
            dashboard_service: DashboardService::new(sessions.clone()),
            room_service: RoomService::new(sessions.clone()),
            menu_service: MenuService::new(sessions.clone()),
            booking_service: BookingService::new(sessions.clone()),
            request_service: RequestService::new(sessions.clone()),
            food_order_service: FoodOrderService::new(sessions.clone()),
            checkout_service: CheckoutService::new(sessions),
        }
    }
}
