use serde::{Deserialize, Serialize};

/// Товар. Цена и вес приходят десятичными числами,
/// категория может отсутствовать (SET_NULL на бэкенде).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub weight: f64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Черновик товара для создания/редактирования.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub category_id: Option<i64>,
    pub description: Option<String>,
}

impl ProductDraft {
    /// Клиентская валидация перед отправкой формы.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Название обязательно для заполнения");
        }
        if self.price < 0.0 {
            return Err("Цена не может быть отрицательной");
        }
        if self.weight <= 0.0 {
            return Err("Вес должен быть больше нуля");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Кирпич".to_string(),
            price: 12.5,
            weight: 3.2,
            category_id: Some(1),
            description: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn negative_price_rejected() {
        let mut d = draft();
        d.price = -1.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn zero_weight_rejected() {
        let mut d = draft();
        d.weight = 0.0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn product_without_category_deserializes() {
        let json = r#"{"id":7,"name":"Плита","price":100.0,"weight":2.0}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.category_id, None);
        assert_eq!(p.description, None);
    }
}
