use contracts::api::ApiError;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Try to restore session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(token) = storage::get_token() {
                // Validate token by fetching current user
                match api::get_current_user(&token).await {
                    Ok(user) => {
                        set_auth_state.set(AuthState {
                            token: Some(token),
                            user: Some(user),
                        });
                    }
                    Err(e) => {
                        // Token rejected; clear it and stay on the login page
                        log::error!("Session restore failed: {}", e);
                        storage::clear_token();
                    }
                }
            }
        });
    });

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

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;

    storage::save_token(&response.token);

    // Профиль подтягиваем тем же токеном; неудача не отменяет вход,
    // роль придёт из LoginResponse при следующем рестарте сессии.
    let user = api::get_current_user(&response.token).await.ok();

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user,
    });

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
