use leptos::prelude::*;

/// Кнопка с вариантами (primary, secondary, danger) и размером sm
#[component]
pub fn Button(
    /// Вариант: "primary" (по умолчанию), "secondary" или "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Размер: "md" (по умолчанию) или "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Дополнительные CSS-классы
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Атрибут type кнопки
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Неактивное состояние (реактивное)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Обработчик клика
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "secondary" => "button--secondary",
        "danger" => "button--danger",
        _ => "button--primary",
    };

    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {} {}", variant_class(), size_class(), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
