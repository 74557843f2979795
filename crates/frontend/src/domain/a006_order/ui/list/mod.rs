pub mod state;

use std::collections::HashSet;

use contracts::domain::factory::Factory;
use contracts::domain::order::{Order, OrderStatus};
use contracts::domain::product::Product;
use contracts::domain::sale_point::SalePoint;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_product::model as product_model;
use crate::domain::a003_factory::model as factory_model;
use crate::domain::a004_sale_point::model as sale_point_model;
use crate::domain::a006_order::model;
use crate::shared::api_client::ApiClient;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Checkbox, Select};
use crate::shared::format::format_order_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, filter_list, get_sort_indicator, sort_list};
use crate::shared::toast::use_toast;
use crate::system::auth::use_auth;

use state::OrderRow;

/// Таблица заказов перевозчика: поиск, сортировка, массовая смена
/// статусов выбранных заказов.
#[component]
pub fn OrderList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let toast = use_toast();

    let (orders, set_orders) = signal::<Vec<Order>>(Vec::new());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (factories, set_factories) = signal::<Vec<Factory>>(Vec::new());
    let (sale_points, set_sale_points) = signal::<Vec<SalePoint>>(Vec::new());
    let (pending, set_pending) = signal(0u32);

    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("date".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let (selected, set_selected) = signal::<HashSet<i64>>(HashSet::new());
    let (target_status, set_target_status) = signal(OrderStatus::Delivery);
    let (show_confirm, set_show_confirm) = signal(false);
    let (is_updating, set_is_updating) = signal(false);

    // Заказы и три справочника грузятся независимыми задачами; упавший
    // справочник оставляет в таблице "#id" вместо имени.
    let fetch = move || {
        let token = auth_state.get_untracked().token;

        set_pending.update(|n| *n += 1);
        let token_for_orders = token.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token_for_orders)?;
                model::fetch_orders(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(list) => set_orders.set(list),
                Err(e) => {
                    log::error!("Order fetch failed: {}", e);
                    toast.error("Заказы не загружены", &e.to_string());
                }
            }
        });

        set_pending.update(|n| *n += 1);
        let token_for_products = token.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token_for_products)?;
                product_model::fetch_products(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(list) => set_products.set(list),
                Err(e) => log::error!("Product fetch failed: {}", e),
            }
        });

        set_pending.update(|n| *n += 1);
        let token_for_factories = token.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token_for_factories)?;
                factory_model::fetch_factories(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(list) => set_factories.set(list),
                Err(e) => log::error!("Factory fetch failed: {}", e),
            }
        });

        set_pending.update(|n| *n += 1);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                sale_point_model::fetch_sale_points(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(list) => set_sale_points.set(list),
                Err(e) => log::error!("Sale point fetch failed: {}", e),
            }
        });
    };

    let rows = Signal::derive(move || {
        let mut rows: Vec<OrderRow> = {
            let products = products.get();
            let factories = factories.get();
            let sale_points = sale_points.get();
            orders
                .get()
                .into_iter()
                .map(|order| OrderRow::build(order, &products, &factories, &sale_points))
                .collect()
        };
        rows = filter_list(rows, &filter.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });

    let toggle_select = move |id: i64, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    let toggle_select_all = move |checked: bool| {
        if checked {
            set_selected.set(rows.get_untracked().iter().map(|r| r.id).collect());
        } else {
            set_selected.set(HashSet::new());
        }
    };

    let all_selected = Signal::derive(move || {
        let rows = rows.get();
        !rows.is_empty() && rows.iter().all(|r| selected.get().contains(&r.id))
    });

    let apply_status = move || {
        let ids: Vec<i64> = selected.get_untracked().into_iter().collect();
        if ids.is_empty() || is_updating.get_untracked() {
            return;
        }
        let status = target_status.get_untracked();
        let token = auth_state.get_untracked().token;

        set_is_updating.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                model::bulk_update_status(&client, &ids, status).await
            }
            .await;

            set_is_updating.set(false);
            set_show_confirm.set(false);
            match result {
                Ok(response) => {
                    toast.success(
                        "Статус товаров изменён",
                        &format!(
                            "Заказов обновлено: {}, новый статус: {}",
                            response.updated_orders,
                            response.status.display_name()
                        ),
                    );
                    set_selected.set(HashSet::new());
                    fetch();
                }
                Err(e) => {
                    log::error!("Bulk status update failed: {}", e);
                    toast.error("Статусы не изменены", &e.to_string());
                }
            }
        });
    };

    let status_options: Vec<(String, String)> = OrderStatus::all()
        .iter()
        .map(|s| (s.wire_name().to_string(), s.display_name().to_string()))
        .collect();

    let status_value = Signal::derive(move || target_status.get().wire_name().to_string());

    let header = move |field: &'static str, label: &'static str| {
        let on_click = create_sort_toggle(field, sort_field.into(), set_sort_field, set_sort_ascending);
        view! {
            <th class="table__header-cell table__header-cell--sortable" on:click=on_click>
                {label}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    fetch();

    view! {
        <div class="list-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Заказы"</h1>
                </div>
                <div class="header__actions">
                    <input
                        class="form__input list-page__filter"
                        type="text"
                        placeholder="Поиск..."
                        prop:value=move || filter.get()
                        on:input=move |ev| set_filter.set(event_target_value(&ev))
                    />
                    <Select
                        value=status_value
                        options=status_options
                        on_change=Callback::new(move |v: String| {
                            if let Some(status) = OrderStatus::from_wire(&v) {
                                set_target_status.set(status);
                            }
                        })
                    />
                    <Button
                        disabled=Signal::derive(move || selected.get().is_empty())
                        on_click=Callback::new(move |_| set_show_confirm.set(true))
                    >
                        {icon("check")}
                        {move || format!("Изменить статус ({})", selected.get().len())}
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
                            <th class="table__header-cell table__header-cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    prop:checked=move || all_selected.get()
                                    on:change=move |ev| toggle_select_all(event_target_checked(&ev))
                                />
                            </th>
                            {header("product", "Товар")}
                            {header("quantity", "Количество")}
                            {header("date", "Дата заказа")}
                            {header("status", "Статус")}
                            {header("factory", "Завод")}
                            {header("sale_point", "Торговая точка")}
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let id = row.id;
                            view! {
                                <tr
                                    class="table__row"
                                    class:table__row--selected=move || selected.get().contains(&id)
                                >
                                    <td class="table__cell table__cell--checkbox">
                                        <Checkbox
                                            checked=Signal::derive(move || selected.get().contains(&id))
                                            on_change=Callback::new(move |checked| toggle_select(id, checked))
                                        />
                                    </td>
                                    <td class="table__cell">{row.product_name}</td>
                                    <td class="table__cell table__cell--number">{row.quantity}</td>
                                    <td class="table__cell">{format_order_date(row.order_date)}</td>
                                    <td class="table__cell">{row.status.display_name()}</td>
                                    <td class="table__cell">{row.factory_name}</td>
                                    <td class="table__cell">{row.sale_point_name}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <Show when=move || show_confirm.get()>
                <Modal
                    title="Смена статуса".to_string()
                    on_close=Callback::new(move |_| set_show_confirm.set(false))
                >
                    <p>
                        {move || format!(
                            "Перевести выбранные заказы ({}) в статус \"{}\"?",
                            selected.get().len(),
                            target_status.get().display_name()
                        )}
                    </p>
                    <div class="form__actions">
                        <Button
                            disabled=Signal::derive(move || is_updating.get())
                            on_click=Callback::new(move |_| apply_status())
                        >
                            {move || if is_updating.get() { "Применение..." } else { "Подтвердить" }}
                        </Button>
                        <Button
                            variant="secondary".to_string()
                            on_click=Callback::new(move |_| set_show_confirm.set(false))
                        >
                            "Отмена"
                        </Button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
