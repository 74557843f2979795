use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a005_warehouse::ui::list::WarehouseList;
use crate::layout::AccountHeader;
use crate::system::auth::guard::RequireRole;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FactoryTab {
    Products,
    Warehouse,
    Categories,
}

/// Рабочее место завода: товары, складские остатки и категории.
#[component]
pub fn FactoryPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(FactoryTab::Products);

    let tab_class = move |tab: FactoryTab| {
        if active_tab.get() == tab {
            "tabs__tab tabs__tab--active"
        } else {
            "tabs__tab"
        }
    };

    view! {
        <RequireRole role=Role::Factory>
            <AccountHeader />
            <main class="page">
                <nav class="tabs">
                    <button
                        class=move || tab_class(FactoryTab::Products)
                        on:click=move |_| set_active_tab.set(FactoryTab::Products)
                    >
                        "Все товары"
                    </button>
                    <button
                        class=move || tab_class(FactoryTab::Warehouse)
                        on:click=move |_| set_active_tab.set(FactoryTab::Warehouse)
                    >
                        "На складе"
                    </button>
                    <button
                        class=move || tab_class(FactoryTab::Categories)
                        on:click=move |_| set_active_tab.set(FactoryTab::Categories)
                    >
                        "Категории"
                    </button>
                </nav>
                {move || match active_tab.get() {
                    FactoryTab::Products => view! { <ProductList /> }.into_any(),
                    FactoryTab::Warehouse => view! { <WarehouseList /> }.into_any(),
                    FactoryTab::Categories => view! { <CategoryList /> }.into_any(),
                }}
            </main>
        </RequireRole>
    }
}
