//! ViewModel формы товара.
//!
//! Цена и вес редактируются как текст; разбор и проверка выполняются
//! при сохранении, чтобы промежуточный ввод не дёргал пользователя.

use contracts::domain::product::{Product, ProductDraft};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ProductFormModel {
    pub name: RwSignal<String>,
    pub price_text: RwSignal<String>,
    pub weight_text: RwSignal<String>,
    pub category_id: RwSignal<Option<i64>>,
    pub description: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl ProductFormModel {
    pub fn new(existing: Option<&Product>) -> Self {
        Self {
            name: RwSignal::new(existing.map(|p| p.name.clone()).unwrap_or_default()),
            price_text: RwSignal::new(
                existing.map(|p| p.price.to_string()).unwrap_or_default(),
            ),
            weight_text: RwSignal::new(
                existing.map(|p| p.weight.to_string()).unwrap_or_default(),
            ),
            category_id: RwSignal::new(existing.and_then(|p| p.category_id)),
            description: RwSignal::new(
                existing
                    .and_then(|p| p.description.clone())
                    .unwrap_or_default(),
            ),
            error: RwSignal::new(None),
        }
    }

    /// Собирает черновик из текущего состояния формы.
    pub fn to_draft(&self) -> Result<ProductDraft, String> {
        build_draft(
            &self.name.get_untracked(),
            &self.price_text.get_untracked(),
            &self.weight_text.get_untracked(),
            self.category_id.get_untracked(),
            &self.description.get_untracked(),
        )
    }
}

/// Разбор и проверка полей формы; чистая функция для тестируемости.
pub fn build_draft(
    name: &str,
    price_text: &str,
    weight_text: &str,
    category_id: Option<i64>,
    description: &str,
) -> Result<ProductDraft, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Название обязательно для заполнения".to_string());
    }

    let price: f64 = price_text
        .trim()
        .parse()
        .map_err(|_| "Цена должна быть числом".to_string())?;
    let weight: f64 = weight_text
        .trim()
        .parse()
        .map_err(|_| "Вес должен быть числом".to_string())?;

    let draft = ProductDraft {
        name: name.to_string(),
        price,
        weight,
        category_id,
        description: {
            let d = description.trim();
            if d.is_empty() {
                None
            } else {
                Some(d.to_string())
            }
        },
    };
    draft.validate().map_err(|e| e.to_string())?;
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_valid_draft() {
        let draft = build_draft("Кирпич", "12.5", "3.2", Some(1), " облицовочный ").unwrap();
        assert_eq!(draft.name, "Кирпич");
        assert_eq!(draft.price, 12.5);
        assert_eq!(draft.weight, 3.2);
        assert_eq!(draft.category_id, Some(1));
        assert_eq!(draft.description.as_deref(), Some("облицовочный"));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(build_draft("  ", "10", "1", None, "").is_err());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = build_draft("Кирпич", "дорого", "1", None, "").unwrap_err();
        assert!(err.contains("Цена"));
    }

    #[test]
    fn negative_price_is_rejected() {
        assert!(build_draft("Кирпич", "-1", "1", None, "").is_err());
    }

    #[test]
    fn zero_weight_is_rejected() {
        assert!(build_draft("Кирпич", "10", "0", None, "").is_err());
    }

    #[test]
    fn empty_description_becomes_none() {
        let draft = build_draft("Кирпич", "10", "1", None, "   ").unwrap();
        assert_eq!(draft.description, None);
    }
}
