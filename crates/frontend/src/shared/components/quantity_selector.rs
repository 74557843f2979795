//! Счётчик количества с кнопками "+"/"−", прямым вводом и колесом мыши.
//! Значение всегда остаётся в диапазоне [min, max].

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::WheelEvent;

/// Приводит значение к диапазону [min, max].
pub fn clamp_value(value: i64, min: u32, max: u32) -> u32 {
    if value < min as i64 {
        min
    } else if value > max as i64 {
        max
    } else {
        value as u32
    }
}

/// Разбирает текст из поля ввода. Нечисловой ввод возвращает текущее
/// значение, числовой приводится к диапазону.
pub fn parse_entry(text: &str, current: u32, min: u32, max: u32) -> u32 {
    match text.trim().parse::<i64>() {
        Ok(value) => clamp_value(value, min, max),
        Err(_) => current,
    }
}

#[component]
pub fn QuantitySelector(
    /// Текущее значение
    #[prop(into)]
    value: Signal<u32>,
    /// Нижняя граница
    #[prop(optional, into)]
    min: MaybeProp<u32>,
    /// Верхняя граница (доступный остаток)
    #[prop(into)]
    max: Signal<u32>,
    /// Вызывается с новым значением после любого изменения
    on_value_change: Callback<u32>,
) -> impl IntoView {
    let lower = move || min.get().unwrap_or(0);

    // Текст в поле ввода живёт отдельно от значения: пока пользователь
    // печатает, мы не вмешиваемся, приведение происходит на blur.
    let (entry, set_entry) = signal(None::<String>);

    let shown = move || match entry.get() {
        Some(text) => text,
        None => value.get().to_string(),
    };

    let commit = move |text: String| {
        let next = parse_entry(&text, value.get(), lower(), max.get());
        set_entry.set(None);
        if next != value.get() {
            on_value_change.run(next);
        }
    };

    let step_by = move |step: i64| {
        let next = clamp_value(value.get() as i64 + step, lower(), max.get());
        set_entry.set(None);
        if next != value.get() {
            on_value_change.run(next);
        }
    };

    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        step_by(if ev.delta_y() < 0.0 { 1 } else { -1 });
    };

    view! {
        <div class="quantity-selector">
            <button
                class="button button--icon quantity-selector__button"
                disabled=move || value.get() <= lower()
                on:click=move |_| step_by(-1)
            >
                {icon("minus")}
            </button>
            <input
                class="quantity-selector__input"
                type="text"
                inputmode="numeric"
                prop:value=shown
                on:input=move |ev| set_entry.set(Some(event_target_value(&ev)))
                on:blur=move |ev| commit(event_target_value(&ev))
                on:wheel=on_wheel
            />
            <button
                class="button button--icon quantity-selector__button"
                disabled=move || value.get() >= max.get()
                on:click=move |_| step_by(1)
            >
                {icon("plus")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limits_both_ends() {
        assert_eq!(clamp_value(-5, 0, 10), 0);
        assert_eq!(clamp_value(0, 0, 10), 0);
        assert_eq!(clamp_value(7, 0, 10), 7);
        assert_eq!(clamp_value(10, 0, 10), 10);
        assert_eq!(clamp_value(11, 0, 10), 10);
    }

    #[test]
    fn clamp_respects_nonzero_min() {
        assert_eq!(clamp_value(0, 1, 10), 1);
        assert_eq!(clamp_value(5, 1, 10), 5);
    }

    #[test]
    fn entry_above_max_is_clamped() {
        assert_eq!(parse_entry("999", 3, 0, 10), 10);
    }

    #[test]
    fn negative_entry_becomes_min() {
        assert_eq!(parse_entry("-2", 3, 0, 10), 0);
    }

    #[test]
    fn garbage_entry_reverts_to_current() {
        assert_eq!(parse_entry("abc", 3, 0, 10), 3);
        assert_eq!(parse_entry("", 3, 0, 10), 3);
        assert_eq!(parse_entry("2.5", 3, 0, 10), 3);
    }

    #[test]
    fn valid_entry_passes_through() {
        assert_eq!(parse_entry(" 4 ", 3, 0, 10), 4);
    }

    #[test]
    fn zero_max_pins_value_to_zero() {
        assert_eq!(clamp_value(1, 0, 0), 0);
        assert_eq!(parse_entry("5", 0, 0, 0), 0);
    }

    // Любая последовательность операций не выводит значение из диапазона
    #[test]
    fn operation_sequences_stay_in_bounds() {
        let mut value = 5u32;
        let ops: [i64; 7] = [1, 1, -3, 10, -20, 2, 1];
        for step in ops {
            value = clamp_value(value as i64 + step, 0, 8);
            assert!(value <= 8);
        }
    }
}
