use leptos::prelude::*;

/// Флажок с необязательной подписью
#[component]
pub fn Checkbox(
    /// Подпись рядом с флажком
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Состояние флажка
    #[prop(into)]
    checked: Signal<bool>,
    /// Обработчик переключения
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Неактивное состояние
    #[prop(optional)]
    disabled: bool,
    /// ID элемента
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class = if disabled {
        "form__checkbox-wrapper form__checkbox-wrapper--disabled"
    } else {
        "form__checkbox-wrapper"
    };

    view! {
        <div class=wrapper_class>
            <input
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            {move || label.get().map(|l| view! {
                <label class="form__checkbox-label" for=checkbox_id>
                    {l}
                </label>
            })}
        </div>
    }
}
