use contracts::system::auth::LoginResponse;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub username: Option<String>,
    pub role_name: Option<String>,
    pub permissions: Vec<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Checks the session's permission list against a tree node id.
    /// Administrator roles implicitly hold the whole tree; real
    /// enforcement stays server-side, this only drives what the UI
    /// offers.
    pub fn has_permission(&self, id: &str) -> bool {
        let is_admin = self
            .role_name
            .as_deref()
            .is_some_and(|role| role.to_lowercase().contains("admin"));
        is_admin || self.permissions.iter().any(|p| p == id)
    }
}

impl From<LoginResponse> for AuthState {
    fn from(session: LoginResponse) -> Self {
        Self {
            token: Some(session.access_token),
            username: Some(session.username),
            role_name: session.role_name,
            permissions: session.permissions,
        }
    }
}

/// Provides the session state to the whole tree, restoring it from
/// `localStorage` on startup.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = storage::load_session()
        .map(AuthState::from)
        .unwrap_or_default();
    let (auth_state, set_auth_state) = signal(initial);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");
    (auth_state, set_auth_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Option<&str>, permissions: &[&str]) -> AuthState {
        AuthState {
            token: Some("tok".into()),
            username: Some("u".into()),
            role_name: role.map(str::to_string),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn permission_checks_use_the_session_list() {
        let state = session(Some("Sales"), &["customer:list", "customer:follow"]);
        assert!(state.has_permission("customer:follow"));
        assert!(!state.has_permission("dept:delete"));
    }

    #[test]
    fn admin_roles_hold_everything() {
        let state = session(Some("Administrator"), &[]);
        assert!(state.has_permission("dept:delete"));
        assert!(state.has_permission("allocation:add"));
    }

    #[test]
    fn default_state_is_unauthenticated() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert!(!state.has_permission("customer:list"));
    }
}
