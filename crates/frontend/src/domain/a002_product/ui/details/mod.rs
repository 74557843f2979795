pub mod view_model;

use contracts::domain::category::Category;
use contracts::domain::product::Product;
use leptos::prelude::*;

use crate::domain::a002_product::model;
use crate::shared::api_client::ApiClient;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Input, Select};
use crate::shared::toast::use_toast;
use crate::system::auth::use_auth;

use view_model::ProductFormModel;

/// Форма товара в модальном окне: создание и редактирование.
#[component]
pub fn ProductDetails(
    /// Существующий товар; `None` — создание нового
    product: Option<Product>,
    /// Справочник категорий для выпадающего списка
    categories: Vec<Category>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let toast = use_toast();

    let editing_id = product.as_ref().map(|p| p.id);
    let form = ProductFormModel::new(product.as_ref());
    let (is_saving, set_is_saving) = signal(false);

    // Пустое значение — товар без категории
    let category_options: Vec<(String, String)> = std::iter::once((String::new(), "Без категории".to_string()))
        .chain(categories.iter().map(|c| (c.id.to_string(), c.name.clone())))
        .collect();

    let category_value = Signal::derive(move || {
        form.category_id
            .get()
            .map(|id| id.to_string())
            .unwrap_or_default()
    });

    let save = move |_| {
        if is_saving.get() {
            return;
        }

        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(message) => {
                form.error.set(Some(message));
                return;
            }
        };
        form.error.set(None);

        set_is_saving.set(true);
        let token = auth_state.get_untracked().token;
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                match editing_id {
                    Some(id) => model::update_product(&client, id, &draft).await.map(|_| ()),
                    None => model::create_product(&client, &draft).await.map(|_| ()),
                }
            }
            .await;

            set_is_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Product save failed: {}", e);
                    toast.error("Товар не сохранён", &e.to_string());
                }
            }
        });
    };

    let title = if editing_id.is_some() {
        "Редактирование товара"
    } else {
        "Новый товар"
    };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form class="form" on:submit=|ev| ev.prevent_default()>
                {move || form.error.get().map(|message| view! {
                    <div class="error-message">{message}</div>
                })}
                <Input
                    label="Название".to_string()
                    value=form.name.read_only()
                    on_input=Callback::new(move |v| form.name.set(v))
                    required=true
                />
                <Input
                    label="Цена".to_string()
                    value=form.price_text.read_only()
                    on_input=Callback::new(move |v| form.price_text.set(v))
                    required=true
                />
                <Input
                    label="Вес, кг".to_string()
                    value=form.weight_text.read_only()
                    on_input=Callback::new(move |v| form.weight_text.set(v))
                    required=true
                />
                <Select
                    label="Категория".to_string()
                    value=category_value
                    options=category_options
                    on_change=Callback::new(move |v: String| {
                        form.category_id.set(v.parse::<i64>().ok());
                    })
                />
                <Input
                    label="Описание".to_string()
                    value=form.description.read_only()
                    on_input=Callback::new(move |v| form.description.set(v))
                />
                <div class="form__actions">
                    <Button
                        disabled=Signal::derive(move || is_saving.get())
                        on_click=Callback::new(save)
                    >
                        {move || if is_saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </Button>
                    <Button
                        variant="secondary".to_string()
                        on_click=Callback::new(move |_| on_close.run(()))
                    >
                        "Отмена"
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
