/// Универсальные утилиты для работы со списками (поиск, сортировка)
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу (пустой запрос пропускает всё)
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Создать обработчик переключения сортировки
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: Signal<String>,
    set_sort_field: WriteSignal<String>,
    set_sort_ascending: WriteSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field.to_string());
            set_sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        qty: u32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.name.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "qty" => self.qty.cmp(&other.qty),
                _ => self.name.cmp(&other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Кирпич".into(), qty: 5 },
            Row { name: "Блок".into(), qty: 12 },
            Row { name: "Плита".into(), qty: 1 },
        ]
    }

    #[test]
    fn empty_filter_keeps_everything() {
        assert_eq!(filter_list(rows(), "  ").len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let filtered = filter_list(rows(), "кирпич");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Кирпич");
    }

    #[test]
    fn sort_descending_reverses_order() {
        let mut items = rows();
        sort_list(&mut items, "qty", false);
        let qtys: Vec<u32> = items.iter().map(|r| r.qty).collect();
        assert_eq!(qtys, vec![12, 5, 1]);
    }

    #[test]
    fn sort_indicator_reflects_active_field() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "qty", true), " ⇅");
    }
}
