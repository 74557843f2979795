use contracts::domain::category::Category;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_category::model;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::api_client::ApiClient;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use crate::system::auth::use_auth;

/// Таблица категорий товаров с созданием, изменением и удалением.
#[component]
pub fn CategoryList() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let toast = use_toast();

    let (items, set_items) = signal::<Vec<Category>>(Vec::new());
    let (is_loading, set_is_loading) = signal(false);
    let (show_details, set_show_details) = signal(false);
    let (editing, set_editing) = signal::<Option<Category>>(None);

    let fetch = move || {
        let token = auth_state.get_untracked().token;
        set_is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                model::fetch_categories(&client).await
            }
            .await;

            set_is_loading.set(false);
            match result {
                Ok(list) => set_items.set(list),
                Err(e) => {
                    log::error!("Category fetch failed: {}", e);
                    toast.error("Категории не загружены", &e.to_string());
                }
            }
        });
    };

    let handle_create = move |_| {
        set_editing.set(None);
        set_show_details.set(true);
    };

    let handle_edit = move |category: Category| {
        set_editing.set(Some(category));
        set_show_details.set(true);
    };

    let handle_delete = move |id: i64| {
        let token = auth_state.get_untracked().token;
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                model::delete_category(&client, id).await
            }
            .await;

            match result {
                Ok(()) => {
                    toast.success("Готово", "Категория удалена");
                    fetch();
                }
                Err(e) => {
                    log::error!("Category delete failed: {}", e);
                    toast.error("Категория не удалена", &e.to_string());
                }
            }
        });
    };

    fetch();

    view! {
        <div class="list-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Категории товаров"</h1>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "Новая категория"
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || is_loading.get()
                        on:click=move |_| fetch()
                    >
                        {icon("refresh")}
                        "Обновить"
                    </button>
                </div>
            </div>

            <Show when=move || is_loading.get()>
                <div class="list-page__loading"><Spinner /></div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Название"</th>
                            <th class="table__header-cell">"Описание"</th>
                            <th class="table__header-cell table__header-cell--actions"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|category| {
                            let for_edit = category.clone();
                            let id = category.id;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{category.name}</td>
                                    <td class="table__cell">
                                        {category.description.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| handle_edit(for_edit.clone())
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
                <CategoryDetails
                    category=editing.get_untracked()
                    on_saved=Callback::new(move |_| {
                        set_show_details.set(false);
                        toast.success("Готово", "Категория сохранена");
                        fetch();
                    })
                    on_close=Callback::new(move |_| set_show_details.set(false))
                />
            </Show>
        </div>
    }
}
