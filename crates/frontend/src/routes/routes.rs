use contracts::system::auth::Role;
use leptos::prelude::*;
use thaw::*;

use crate::system::auth::context::use_auth;
use crate::system::pages::carrier::CarrierPage;
use crate::system::pages::factory::FactoryPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::sale_point::SalePointPage;

/// Раздача страниц по роли пользователя. Пока информация о пользователе
/// ещё загружается (токен есть, профиля нет) — показываем спиннер.
#[component]
fn RoleDispatch() -> impl IntoView {
    let (auth_state, _) = use_auth();

    move || match auth_state.get().user.map(|u| u.role) {
        Some(Role::Factory) => view! { <FactoryPage /> }.into_any(),
        Some(Role::Carrier) => view! { <CarrierPage /> }.into_any(),
        Some(Role::SalePoint) => view! { <SalePointPage /> }.into_any(),
        None => view! {
            <div class="page page--loading">
                <Spinner />
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <RoleDispatch />
        </Show>
    }
}
