use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::notify::MessageHost;
use crate::system::auth::context::AuthProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <MessageHost />
            <AppRoutes />
        </AuthProvider>
    }
}
