use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::domain::a006_order::ui::list::OrderList;
use crate::layout::AccountHeader;
use crate::system::auth::guard::RequireRole;

/// Рабочее место перевозчика: список заказов со сменой статусов.
#[component]
pub fn CarrierPage() -> impl IntoView {
    view! {
        <RequireRole role=Role::Carrier>
            <AccountHeader />
            <main class="page">
                <OrderList />
            </main>
        </RequireRole>
    }
}
