use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api_utils::ApiError;

/// Which top-level view the session allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionView {
    Auth,
    App,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
}

impl AuthState {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
        }
    }

    /// The app is shown whenever a token is present; the token is not
    /// validated up front.
    pub fn view(&self) -> SessionView {
        match self.access_token.as_deref() {
            Some(token) if !token.is_empty() => SessionView::App,
            _ => SessionView::Auth,
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the session persisted by a previous login.
    let restored = AuthState {
        access_token: storage::get_access_token(),
    };
    let (auth_state, set_auth_state) = signal(restored);

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Log in, persist the token and switch the gate to the app view.
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);
    set_auth_state.set(AuthState::with_token(response.access_token));
    log::info!("logged in");

    Ok(())
}

/// Forget the token and switch the gate back to the auth view.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
    log::info!("logged out");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_follows_token_presence() {
        assert_eq!(AuthState::default().view(), SessionView::Auth);
        assert_eq!(AuthState::with_token("").view(), SessionView::Auth);
        assert_eq!(AuthState::with_token("eyJhbGciOi").view(), SessionView::App);
    }
}
