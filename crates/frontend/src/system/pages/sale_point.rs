use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::domain::a007_availability::ui::list::AvailabilityList;
use crate::layout::AccountHeader;
use crate::system::auth::guard::RequireRole;

/// Рабочее место торговой точки: наличие товаров и оформление заказа.
#[component]
pub fn SalePointPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::SalePoint>
            <AccountHeader />
            <main class="page">
                <AvailabilityList />
            </main>
        </RequireRole>
    }
}
