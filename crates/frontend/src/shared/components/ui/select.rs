use leptos::prelude::*;

/// Выпадающий список с подписью; варианты задаются парами (значение, подпись)
#[component]
pub fn Select(
    /// Подпись поля (необязательная)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Текущее значение
    #[prop(into)]
    value: Signal<String>,
    /// Обработчик смены значения
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Варианты выбора
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Неактивное состояние
    #[prop(optional)]
    disabled: bool,
    /// ID элемента
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Дополнительные CSS-классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class=move || format!("form__select {}", additional_class())
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
