use leptos::prelude::*;

/// Поле ввода с подписью
#[component]
pub fn Input(
    /// Подпись поля (необязательная)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Значение поля
    #[prop(into)]
    value: Signal<String>,
    /// Обработчик ввода
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Тип поля: "text" (по умолчанию), "password" и т.д.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Неактивное состояние
    #[prop(optional)]
    disabled: bool,
    /// Обязательное поле
    #[prop(optional)]
    required: bool,
    /// ID элемента
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Дополнительные CSS-классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || format!("form__input {}", additional_class())
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                disabled=disabled
                required=required
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
