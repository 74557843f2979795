//! Строка таблицы товаров: товар, обогащённый именем категории.

use std::cmp::Ordering;

use contracts::domain::category::Category;
use contracts::domain::product::Product;

use crate::shared::list_utils::{Searchable, Sortable};

#[derive(Clone, Debug)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub category_name: String,
    pub description: String,
    /// Исходный товар, нужен для открытия формы правки.
    pub product: Product,
}

impl ProductRow {
    pub fn build(product: Product, categories: &[Category]) -> Self {
        let category_name = product
            .category_id
            .and_then(|id| categories.iter().find(|c| c.id == id))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "-".to_string());

        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            weight: product.weight,
            category_name,
            description: product.description.clone().unwrap_or_default(),
            product,
        }
    }
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.name.to_lowercase().contains(&filter)
            || self.category_name.to_lowercase().contains(&filter)
            || self.description.to_lowercase().contains(&filter)
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            "weight" => self
                .weight
                .partial_cmp(&other.weight)
                .unwrap_or(Ordering::Equal),
            "category" => self.category_name.cmp(&other.category_name),
            _ => self.name.cmp(&other.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list};

    fn product(id: i64, name: &str, price: f64, category_id: Option<i64>) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            weight: 1.0,
            category_id,
            description: None,
        }
    }

    fn categories() -> Vec<Category> {
        vec![Category {
            id: 1,
            name: "Стройматериалы".to_string(),
            description: None,
        }]
    }

    #[test]
    fn joins_category_name() {
        let row = ProductRow::build(product(1, "Кирпич", 10.0, Some(1)), &categories());
        assert_eq!(row.category_name, "Стройматериалы");
    }

    #[test]
    fn missing_category_renders_dash() {
        let row = ProductRow::build(product(1, "Кирпич", 10.0, Some(99)), &categories());
        assert_eq!(row.category_name, "-");
        let row = ProductRow::build(product(2, "Блок", 10.0, None), &categories());
        assert_eq!(row.category_name, "-");
    }

    #[test]
    fn filter_matches_category_name() {
        let rows = vec![
            ProductRow::build(product(1, "Кирпич", 10.0, Some(1)), &categories()),
            ProductRow::build(product(2, "Блок", 5.0, None), &categories()),
        ];
        let filtered = filter_list(rows, "стройм");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn sorts_by_price() {
        let mut rows = vec![
            ProductRow::build(product(1, "Кирпич", 10.0, None), &[]),
            ProductRow::build(product(2, "Блок", 5.0, None), &[]),
        ];
        sort_list(&mut rows, "price", true);
        assert_eq!(rows[0].id, 2);
    }
}
