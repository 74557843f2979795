use contracts::domain::category::Category;
use contracts::ordering::OrderSelection;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_category::model as category_model;
use crate::domain::a007_availability::model;
use crate::domain::a007_availability::ui::order_dialog::OrderDialog;
use crate::shared::api_client::ApiClient;
use crate::shared::components::quantity_selector::QuantitySelector;
use crate::shared::components::ui::Button;
use crate::shared::format::{format_money, format_weight};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::use_auth;

/// Наличие товаров для торговой точки: остатки по заводам, выбор
/// количества в пределах остатка и оформление заказа.
#[component]
pub fn AvailabilityList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let toast = use_toast();

    let selection = RwSignal::new(OrderSelection::default());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (pending, set_pending) = signal(0u32);
    let (show_dialog, set_show_dialog) = signal(false);

    // Перечитывание фида сбрасывает выбранные количества: остатки могли
    // измениться, и старый выбор может их превышать.
    let fetch = move || {
        let token = auth_state.get_untracked().token;

        set_pending.update(|n| *n += 1);
        let token_for_feed = token.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token_for_feed)?;
                model::fetch_availability(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(feed) => selection.set(OrderSelection::from_availability(&feed)),
                Err(e) => {
                    log::error!("Availability fetch failed: {}", e);
                    toast.error("Наличие не загружено", &e.to_string());
                }
            }
        });

        set_pending.update(|n| *n += 1);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                category_model::fetch_categories(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(list) => set_categories.set(list),
                Err(e) => log::error!("Category fetch failed: {}", e),
            }
        });
    };

    let category_name = move |category_id: Option<i64>| {
        category_id
            .and_then(|id| categories.get().into_iter().find(|c| c.id == id))
            .map(|c| c.name)
            .unwrap_or_else(|| "-".to_string())
    };

    let can_submit = Signal::derive(move || selection.get().can_submit());

    fetch();

    view! {
        <div class="list-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Наличие товаров"</h1>
                </div>
                <div class="header__actions">
                    <Button
                        disabled=Signal::derive(move || !can_submit.get())
                        on_click=Callback::new(move |_| set_show_dialog.set(true))
                    >
                        {icon("cart")}
                        "Оформить заказ"
                    </Button>
                    <button
                        class="button button--secondary"
                        disabled=move || pending.get() > 0
                        on:click=move |_| fetch()
                    >
                        {icon("refresh")}
                        "Обновить"
                    </button>
                </div>
            </div>

            <Show when={move || pending.get() > 0}>
                <div class="list-page__loading"><Spinner /></div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Товар"</th>
                            <th class="table__header-cell">"Категория"</th>
                            <th class="table__header-cell">"Цена"</th>
                            <th class="table__header-cell">"Вес"</th>
                            <th class="table__header-cell">"На складе"</th>
                            <th class="table__header-cell">"В заказ"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || selection.get().lines().iter().map(|line| {
                            let product_id = line.product.id;
                            let available = line.available;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{line.product.name.clone()}</td>
                                    <td class="table__cell">{category_name(line.product.category_id)}</td>
                                    <td class="table__cell table__cell--number">{format_money(line.product.price)}</td>
                                    <td class="table__cell table__cell--number">{format_weight(line.product.weight)}</td>
                                    <td class="table__cell table__cell--number">{available}</td>
                                    <td class="table__cell">
                                        <QuantitySelector
                                            value=Signal::derive(move || selection.get().quantity_of(product_id))
                                            max=Signal::derive(move || available)
                                            on_value_change=Callback::new(move |v| {
                                                selection.update(|s| s.set_quantity(product_id, v));
                                            })
                                        />
                                    </td>
                                </tr>
                            }
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_dialog.get()>
                <OrderDialog
                    selection=selection
                    on_close=Callback::new(move |_| set_show_dialog.set(false))
                    on_success=Callback::new(move |_| {
                        set_show_dialog.set(false);
                        fetch();
                    })
                />
            </Show>
        </div>
    }
}
