// src/models/navigation.rs

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::auth::UserRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    SignIn,
    SignUp,
    AdminDashboard,
    AdminRooms,
    AdminMenu,
    AdminBookings,
    AdminServices,
    CustomerHome,
    CustomerRooms,
    CustomerBookings,
    CustomerFood,
    CustomerServices,
    CustomerCheckout,
    NotFound,
}

// Tabela de rotas do painel
const ROUTES: [(&str, Page); 13] = [
    ("/", Page::SignIn),
    ("/signup", Page::SignUp),
    ("/admin/dashboard", Page::AdminDashboard),
    ("/admin/rooms", Page::AdminRooms),
    ("/admin/menu", Page::AdminMenu),
    ("/admin/bookings", Page::AdminBookings),
    ("/admin/services", Page::AdminServices),
    ("/customer", Page::CustomerHome),
    ("/customer/rooms", Page::CustomerRooms),
    ("/customer/bookings", Page::CustomerBookings),
    ("/customer/food", Page::CustomerFood),
    ("/customer/services", Page::CustomerServices),
    ("/customer/checkout", Page::CustomerCheckout),
];

impl Page {
    /// Resolve um caminho da interface. Barra final é ignorada; query string e
    /// fragmento também.
    pub fn from_path(path: &str) -> Page {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, page)| *page)
            .unwrap_or(Page::NotFound)
    }

    pub fn path(self) -> Option<&'static str> {
        ROUTES
            .iter()
            .find(|(_, page)| *page == self)
            .map(|(route, _)| *route)
    }

    /// Perfil dono da página; `None` para páginas públicas.
    pub fn role(self) -> Option<UserRole> {
        match self {
            Page::AdminDashboard
            | Page::AdminRooms
            | Page::AdminMenu
            | Page::AdminBookings
            | Page::AdminServices => Some(UserRole::Admin),
            Page::CustomerHome
            | Page::CustomerRooms
            | Page::CustomerBookings
            | Page::CustomerFood
            | Page::CustomerServices
            | Page::CustomerCheckout => Some(UserRole::Customer),
            Page::SignIn | Page::SignUp | Page::NotFound => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::SignIn => "Sign In",
            Page::SignUp => "Sign Up",
            Page::AdminDashboard => "Dashboard",
            Page::AdminRooms => "Manage Rooms",
            Page::AdminMenu => "Food Menu",
            Page::AdminBookings => "Bookings",
            Page::AdminServices => "Service Requests",
            Page::CustomerHome => "Home",
            Page::CustomerRooms => "Browse Rooms",
            Page::CustomerBookings => "My Bookings",
            Page::CustomerFood => "Order Food",
            Page::CustomerServices => "Room Service",
            Page::CustomerCheckout => "Check Out",
            Page::NotFound => "Page Not Found",
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResolvedRoute {
    pub page: Page,
    pub title: String,
    pub role: Option<UserRole>,
}

impl From<Page> for ResolvedRoute {
    fn from(page: Page) -> Self {
        Self {
            page,
            title: page.title().to_string(),
            role: page.role(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SidebarEntry {
    pub path: String,
    pub label: String,
}

pub fn sidebar(role: UserRole) -> Vec<SidebarEntry> {
    let pages: &[Page] = match role {
        UserRole::Admin => &[
            Page::AdminDashboard,
            Page::AdminRooms,
            Page::AdminMenu,
            Page::AdminBookings,
            Page::AdminServices,
        ],
        UserRole::Customer => &[
            Page::CustomerHome,
            Page::CustomerRooms,
            Page::CustomerBookings,
            Page::CustomerFood,
            Page::CustomerServices,
            Page::CustomerCheckout,
        ],
    };

    pages
        .iter()
        .filter_map(|page| {
            page.path().map(|path| SidebarEntry {
                path: path.to_string(),
                label: page.title().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_routes() {
        assert_eq!(Page::from_path("/"), Page::SignIn);
        assert_eq!(Page::from_path("/signup"), Page::SignUp);
        assert_eq!(Page::from_path("/admin/rooms"), Page::AdminRooms);
        assert_eq!(Page::from_path("/admin/rooms/"), Page::AdminRooms);
        assert_eq!(Page::from_path("/customer"), Page::CustomerHome);
        assert_eq!(Page::from_path("/customer/checkout?step=2"), Page::CustomerCheckout);
    }

    #[test]
    fn anything_else_is_not_found() {
        assert_eq!(Page::from_path("/admin"), Page::NotFound);
        assert_eq!(Page::from_path("/admin/unknown"), Page::NotFound);
        assert_eq!(Page::from_path("/Customer/rooms"), Page::NotFound);
        assert_eq!(Page::from_path("admin/rooms"), Page::NotFound);
    }

    #[test]
    fn every_page_but_not_found_has_a_path() {
        for (route, page) in ROUTES {
            assert_eq!(page.path(), Some(route));
        }
        assert_eq!(Page::NotFound.path(), None);
    }

    #[test]
    fn sidebars_follow_roles() {
        let admin = sidebar(UserRole::Admin);
        assert_eq!(admin.len(), 5);
        assert_eq!(admin[0].path, "/admin/dashboard");
        assert_eq!(admin[1].label, "Manage Rooms");

        let customer = sidebar(UserRole::Customer);
        assert_eq!(customer.len(), 6);
        assert!(customer.iter().all(|e| Page::from_path(&e.path).role() == Some(UserRole::Customer)));
    }
}
