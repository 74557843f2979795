pub mod state;

use contracts::domain::category::Category;
use contracts::domain::product::Product;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_category::model as category_model;
use crate::domain::a002_product::model;
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::api_client::ApiClient;
use crate::shared::format::{format_money, format_weight};
use crate::shared::icons::icon;
use crate::shared::list_utils::{create_sort_toggle, filter_list, get_sort_indicator, sort_list};
use crate::shared::toast::use_toast;
use crate::system::auth::use_auth;

use state::ProductRow;

/// Таблица товаров завода: поиск, сортировка, создание и правка.
#[component]
pub fn ProductList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let toast = use_toast();

    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (categories, set_categories) = signal::<Vec<Category>>(Vec::new());
    let (pending, set_pending) = signal(0u32);
    let (filter, set_filter) = signal(String::new());
    let (sort_field, set_sort_field) = signal("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let (show_details, set_show_details) = signal(false);
    let (editing, set_editing) = signal::<Option<Product>>(None);

    // Товары и категории загружаются независимо; упавшая загрузка
    // категорий не блокирует таблицу, имена просто останутся пустыми.
    let fetch = move || {
        let token = auth_state.get_untracked().token;

        set_pending.update(|n| *n += 1);
        let token_for_products = token.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token_for_products)?;
                model::fetch_products(&client).await
            }
            .await;

            set_pending.update(|n| *n -= 1);
            match result {
                Ok(list) => set_products.set(list),
                Err(e) => {
                    log::error!("Product fetch failed: {}", e);
                    toast.error("Товары не загружены", &e.to_string());
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

    let rows = Signal::derive(move || {
        let mut rows: Vec<ProductRow> = {
            let categories = categories.get();
            products
                .get()
                .into_iter()
                .map(|p| ProductRow::build(p, &categories))
                .collect()
        };
        rows = filter_list(rows, &filter.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    });

    let handle_delete = move |id: i64| {
        let token = auth_state.get_untracked().token;
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                model::delete_product(&client, id).await
            }
            .await;

            match result {
                Ok(()) => {
                    toast.success("Готово", "Товар удалён");
                    fetch();
                }
                Err(e) => {
                    log::error!("Product delete failed: {}", e);
                    toast.error("Товар не удалён", &e.to_string());
                }
            }
        });
    };

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
                    <h1 class="header__title">"Товары"</h1>
                </div>
                <div class="header__actions">
                    <input
                        class="form__input list-page__filter"
                        type="text"
                        placeholder="Поиск..."
                        prop:value=move || filter.get()
                        on:input=move |ev| set_filter.set(event_target_value(&ev))
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_details.set(true);
                        }
                    >
                        {icon("plus")}
                        "Новый товар"
                    </button>
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
                            {header("name", "Название")}
                            {header("price", "Цена")}
                            {header("weight", "Вес")}
                            {header("category", "Категория")}
                            <th class="table__header-cell">"Описание"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let id = row.id;
                            let for_edit = row.product.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.name}</td>
                                    <td class="table__cell table__cell--number">{format_money(row.price)}</td>
                                    <td class="table__cell table__cell--number">{format_weight(row.weight)}</td>
                                    <td class="table__cell">{row.category_name}</td>
                                    <td class="table__cell">{row.description}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| {
                                                set_editing.set(Some(for_edit.clone()));
                                                set_show_details.set(true);
                                            }
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| handle_delete(id)
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

            <Show when=move || show_details.get()>
                <ProductDetails
                    product=editing.get_untracked()
                    categories=categories.get_untracked()
                    on_saved=Callback::new(move |_| {
                        set_show_details.set(false);
                        toast.success("Готово", "Товар сохранён");
                        fetch();
                    })
                    on_close=Callback::new(move |_| set_show_details.set(false))
                />
            </Show>
        </div>
    }
}
