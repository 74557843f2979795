use contracts::domain::category::{Category, CategoryDraft};
use leptos::prelude::*;

use crate::domain::a001_category::model;
use crate::shared::api_client::ApiClient;
use crate::shared::components::modal::Modal;
use crate::shared::components::ui::{Button, Input};
use crate::shared::toast::use_toast;
use crate::system::auth::use_auth;

/// Форма категории в модальном окне: создание и редактирование.
#[component]
pub fn CategoryDetails(
    /// Существующая категория; `None` — создание новой
    category: Option<Category>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let toast = use_toast();

    let editing_id = category.as_ref().map(|c| c.id);
    let (name, set_name) = signal(category.as_ref().map(|c| c.name.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        category
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let (is_saving, set_is_saving) = signal(false);

    let is_valid = move || !name.get().trim().is_empty();

    let save = move |_| {
        if !is_valid() || is_saving.get() {
            return;
        }

        let draft = CategoryDraft {
            name: name.get().trim().to_string(),
            description: {
                let d = description.get().trim().to_string();
                if d.is_empty() { None } else { Some(d) }
            },
        };

        set_is_saving.set(true);
        let token = auth_state.get_untracked().token;
        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let client = ApiClient::new(token)?;
                match editing_id {
                    Some(id) => model::update_category(&client, id, &draft).await.map(|_| ()),
                    None => model::create_category(&client, &draft).await.map(|_| ()),
                }
            }
            .await;

            set_is_saving.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Category save failed: {}", e);
                    toast.error("Категория не сохранена", &e.to_string());
                }
            }
        });
    };

    let title = if editing_id.is_some() {
        "Редактирование категории"
    } else {
        "Новая категория"
    };

    view! {
        <Modal title=title.to_string() on_close=on_close>
            <form class="form" on:submit=|ev| ev.prevent_default()>
                <Input
                    label="Название".to_string()
                    value=name
                    on_input=Callback::new(move |v| set_name.set(v))
                    required=true
                />
                <Input
                    label="Описание".to_string()
                    value=description
                    on_input=Callback::new(move |v| set_description.set(v))
                />
                <div class="form__actions">
                    <Button
                        disabled=Signal::derive(move || !is_valid() || is_saving.get())
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
