use contracts::system::auth::Role;
use leptos::prelude::*;
use thaw::*;

use super::context::use_auth;

/// Пропускает детей только для пользователя с указанной ролью.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || {
                let state = auth_state.get();
                state.token.is_some() && state.user.as_ref().map(|u| u.role) == Some(role)
            }
            fallback=|| view! {
                <MessageBar intent=MessageBarIntent::Warning>
                    "Доступ запрещён для вашей роли."
                </MessageBar>
            }
        >
            {children()}
        </Show>
    }
}
