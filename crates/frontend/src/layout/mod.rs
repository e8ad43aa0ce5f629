//! Authenticated application shell: sidebar navigation, top bar, and
//! the routed content area.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;
use thaw::*;

use crate::routes::{RouteMeta, ROUTES};
use crate::system::auth::context::{use_auth, AuthState};
use crate::system::auth::storage;

#[component]
fn Sidebar() -> impl IntoView {
    let (auth, _) = use_auth();

    let visible: Signal<Vec<RouteMeta>> = Signal::derive(move || {
        let state = auth.get();
        ROUTES
            .iter()
            .filter(|route| {
                route
                    .permission
                    .is_none_or(|permission| state.has_permission(permission))
            })
            .copied()
            .collect()
    });

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">"CRM Console"</div>
            <For
                each=move || visible.get()
                key=|route| route.path
                children=|route| {
                    view! {
                        <a href=route.path class="sidebar__link">
                            {route.title}
                        </a>
                    }
                }
            />
        </nav>
    }
}

#[component]
fn TopHeader() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let navigate = use_navigate();

    let username = move || auth.get().username.unwrap_or_else(|| "-".into());
    let role = move || auth.get().role_name.unwrap_or_else(|| "-".into());

    let logout = move |_| {
        storage::clear_session();
        set_auth.set(AuthState::default());
        navigate("/login", Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__user">
                <span class="top-header__name">{username}</span>
                <span class="top-header__role">{role}</span>
            </div>
            <Button appearance=ButtonAppearance::Transparent on_click=logout>
                "Sign out"
            </Button>
        </header>
    }
}

#[component]
pub fn MainLayout() -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar />
            <div class="layout__main">
                <TopHeader />
                <main class="layout__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
