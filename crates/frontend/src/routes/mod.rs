//! Route table and the authenticated shell.

use leptos::prelude::*;
use leptos_router::components::{ProtectedParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::overview::ui::DashboardPage;
use crate::domain::allocation::ui::AllocationPage;
use crate::domain::customer::ui::CustomerPage;
use crate::domain::dept::ui::DeptPage;
use crate::domain::product::ui::ProductPage;
use crate::domain::role::ui::RolePage;
use crate::layout::MainLayout;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use crate::system::users::ui::UsersPage;

/// One navigable screen. `permission` gates the sidebar entry; `None`
/// means every signed-in user sees it.
#[derive(Clone, Copy, Debug)]
pub struct RouteMeta {
    pub path: &'static str,
    pub title: &'static str,
    pub requires_auth: bool,
    pub permission: Option<&'static str>,
}

pub static ROUTES: &[RouteMeta] = &[
    RouteMeta {
        path: "/dashboard",
        title: "Dashboard",
        requires_auth: true,
        permission: None,
    },
    RouteMeta {
        path: "/customer",
        title: "Customers",
        requires_auth: true,
        permission: Some("customer:list"),
    },
    RouteMeta {
        path: "/dept",
        title: "Stores",
        requires_auth: true,
        permission: Some("dept:list"),
    },
    RouteMeta {
        path: "/user",
        title: "Users",
        requires_auth: true,
        permission: Some("user:list"),
    },
    RouteMeta {
        path: "/role",
        title: "Roles",
        requires_auth: true,
        permission: Some("role:list"),
    },
    RouteMeta {
        path: "/product",
        title: "Products",
        requires_auth: true,
        permission: Some("product:list"),
    },
    RouteMeta {
        path: "/allocation",
        title: "Allocation",
        requires_auth: true,
        permission: Some("allocation:list"),
    },
];

/// Navigation guard: an unauthenticated visit to a protected path goes
/// to the login screen instead.
pub fn allow(requires_auth: bool, has_session: bool) -> bool {
    !requires_auth || has_session
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth, _) = use_auth();

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/login") view=LoginPage />
                <ProtectedParentRoute
                    path=path!("")
                    view=MainLayout
                    condition=move || Some(allow(true, auth.get().is_authenticated()))
                    redirect_path=|| "/login"
                >
                    <Route path=path!("") view=|| view! { <Redirect path="/dashboard" /> } />
                    <Route path=path!("/dashboard") view=DashboardPage />
                    <Route path=path!("/customer") view=CustomerPage />
                    <Route path=path!("/dept") view=DeptPage />
                    <Route path=path!("/user") view=UsersPage />
                    <Route path=path!("/role") view=RolePage />
                    <Route path=path!("/product") view=ProductPage />
                    <Route path=path!("/allocation") view=AllocationPage />
                </ProtectedParentRoute>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_paths_need_a_session() {
        assert!(!allow(true, false));
        assert!(allow(true, true));
    }

    #[test]
    fn public_paths_never_do() {
        assert!(allow(false, false));
        assert!(allow(false, true));
    }

    #[test]
    fn every_screen_but_the_dashboard_is_permission_gated() {
        for route in ROUTES {
            assert!(route.requires_auth, "{} must be protected", route.path);
            if route.path != "/dashboard" {
                assert!(route.permission.is_some(), "{} has no gate", route.path);
            }
        }
    }
}
