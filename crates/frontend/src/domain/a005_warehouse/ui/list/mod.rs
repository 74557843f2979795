use contracts::domain::product::Product;
use contracts::domain::warehouse::StockRecord;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_product::model as product_model;
use crate::domain::a005_warehouse::model;
use crate::shared::api_client::ApiClient;
use crate::shared::components::quantity_selector::QuantitySelector;
use crate::shared::components::ui::{Button, Select};
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::use_auth;

/// Остатки правятся счётчиком без верхней границы со стороны бизнеса;
/// ограничение чисто техническое.
const STOCK_CEILING: u32 = 1_000_000;

/// Складские остатки завода: количество по каждому товару, добавление
/// товара на склад и снятие с учёта.
#[component]
pub fn WarehouseList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let toast = use_toast();

    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (stock, set_stock) = signal::<Vec<StockRecord>>(Vec::new());
    let (pending, set_pending) = signal(0u32);
    let (new_product_id, set_new_product_id) = signal::<Option<i64>>(None);
    let (new_quantity, set_new_quantity) = signal(0u32);

    // Остатки и справочник товаров загружаются независимыми задачами.
    let fetch = move || {
        let token = auth_state.get_untracked().token;

        set_pending.update(|n| *n += 1);
        let token_for_stock = token.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token_for_stock)?;
                model::fetch_stock(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(list) => set_stock.set(list),
                Err(e) => {
                    log::error!("Stock fetch failed: {}", e);
                    toast.error("Остатки не загружены", &e.to_string());
                }
            }
        });

        set_pending.update(|n| *n += 1);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                product_model::fetch_products(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(list) => set_products.set(list),
                Err(e) => log::error!("Product fetch failed: {}", e),
            }
        });
    };

    let product_name = move |product_id: i64| {
        products
            .get()
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Товар #{}", product_id))
    };

    let set_count = move |product_id: i64, quantity: u32| {
        let token = auth_state.get_untracked().token;
        // Оптимистичное обновление, при ошибке список перечитывается
        set_stock.update(|records| {
            if let Some(record) = records.iter_mut().find(|r| r.product == product_id) {
                record.quantity = quantity;
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                let records = [StockRecord {
                    product: product_id,
                    quantity,
                }];
                model::update_stock(&client, &records).await
            }
            .await;

            if let Err(e) = result {
                log::error!("Stock update failed: {}", e);
                toast.error("Остаток не изменён", &e.to_string());
                fetch();
            }
        });
    };

    let handle_add = move |_| {
        let Some(product_id) = new_product_id.get_untracked() else {
            return;
        };
        let token = auth_state.get_untracked().token;
        let quantity = new_quantity.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                let records = [StockRecord {
                    product: product_id,
                    quantity,
                }];
                model::add_stock(&client, &records).await
            }
            .await;

            match result {
                Ok(_) => {
                    toast.success("Готово", "Товар добавлен на склад");
                    set_new_product_id.set(None);
                    set_new_quantity.set(0);
                    fetch();
                }
                Err(e) => {
                    log::error!("Stock add failed: {}", e);
                    toast.error("Товар не добавлен", &e.to_string());
                }
            }
        });
    };

    let handle_remove = move |product_id: i64| {
        let token = auth_state.get_untracked().token;
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                model::remove_stock(&client, product_id).await
            }
            .await;

            match result {
                Ok(()) => {
                    toast.success("Готово", "Товар снят с учёта");
                    fetch();
                }
                Err(e) => {
                    log::error!("Stock remove failed: {}", e);
                    toast.error("Товар не снят с учёта", &e.to_string());
                }
            }
        });
    };

    // В форму добавления попадают только товары, которых ещё нет на складе
    let addable_options = Signal::derive(move || {
        let stocked: Vec<i64> = stock.get().iter().map(|r| r.product).collect();
        std::iter::once((String::new(), "Выберите товар".to_string()))
            .chain(
                products
                    .get()
                    .into_iter()
                    .filter(|p| !stocked.contains(&p.id))
                    .map(|p| (p.id.to_string(), p.name)),
            )
            .collect::<Vec<_>>()
    });

    let new_product_value = Signal::derive(move || {
        new_product_id
            .get()
            .map(|id| id.to_string())
            .unwrap_or_default()
    });

    fetch();

    view! {
        <div class="list-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"На складе"</h1>
                </div>
                <div class="header__actions">
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

            <div class="warehouse-add form--inline">
                <Select
                    value=new_product_value
                    options=addable_options
                    on_change=Callback::new(move |v: String| {
                        set_new_product_id.set(v.parse::<i64>().ok());
                    })
                />
                <QuantitySelector
                    value=new_quantity
                    max=Signal::derive(|| STOCK_CEILING)
                    on_value_change=Callback::new(move |v| set_new_quantity.set(v))
                />
                <Button
                    disabled=Signal::derive(move || new_product_id.get().is_none())
                    on_click=Callback::new(handle_add)
                >
                    {icon("plus")}
                    "Добавить на склад"
                </Button>
            </div>

            <Show when={move || pending.get() > 0}>
                <div class="list-page__loading"><Spinner /></div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Товар"</th>
                            <th class="table__header-cell">"Количество"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || stock.get().into_iter().map(|record| {
                            let product_id = record.product;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{product_name(product_id)}</td>
                                    <td class="table__cell">
                                        <QuantitySelector
                                            value=Signal::derive(move || {
                                                stock
                                                    .get()
                                                    .iter()
                                                    .find(|r| r.product == product_id)
                                                    .map(|r| r.quantity)
                                                    .unwrap_or(0)
                                            })
                                            max=Signal::derive(|| STOCK_CEILING)
                                            on_value_change=Callback::new(move |v| set_count(product_id, v))
                                        />
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| handle_remove(product_id)
                                        >
                                            {icon("delete")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
