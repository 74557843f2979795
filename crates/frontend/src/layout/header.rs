use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::system::auth::{do_logout, use_auth};

/// Шапка приложения: название, текущий пользователь и выход из системы.
#[component]
pub fn AccountHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let username = move || {
        auth_state
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let role_name = move || {
        auth_state
            .get()
            .user
            .map(|u| u.role.display_name().to_string())
            .unwrap_or_default()
    };

    let handle_logout = move |_| {
        do_logout(set_auth_state);
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">"Поставки"</div>
            <div class="app-header__account">
                <span class="app-header__username">{username}</span>
                <span class="app-header__role">{role_name}</span>
                <button class="button button--secondary button--small" on:click=handle_logout>
                    {icon("logout")}
                    " Выйти"
                </button>
            </div>
        </header>
    }
}
