//! Строка таблицы заказов: заказ, обогащённый справочными данными.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use contracts::domain::factory::Factory;
use contracts::domain::order::{Order, OrderStatus};
use contracts::domain::product::Product;
use contracts::domain::sale_point::SalePoint;

use crate::shared::list_utils::{Searchable, Sortable};

#[derive(Clone, Debug)]
pub struct OrderRow {
    pub id: i64,
    pub product_name: String,
    pub quantity: u32,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub factory_name: String,
    pub sale_point_name: String,
}

impl OrderRow {
    /// Имена из справочников; недогруженный справочник даёт "#id",
    /// строка при этом остаётся в таблице.
    pub fn build(
        order: Order,
        products: &[Product],
        factories: &[Factory],
        sale_points: &[SalePoint],
    ) -> Self {
        let product_name = products
            .iter()
            .find(|p| p.id == order.product_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Товар #{}", order.product_id));
        let factory_name = factories
            .iter()
            .find(|f| f.id == order.factory_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| format!("Завод #{}", order.factory_id));
        let sale_point_name = sale_points
            .iter()
            .find(|s| s.id == order.sale_point_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("Точка #{}", order.sale_point_id));

        Self {
            id: order.id,
            product_name,
            quantity: order.quantity,
            order_date: order.order_date,
            status: order.status,
            factory_name,
            sale_point_name,
        }
    }
}

impl Searchable for OrderRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.product_name.to_lowercase().contains(&filter)
            || self.factory_name.to_lowercase().contains(&filter)
            || self.sale_point_name.to_lowercase().contains(&filter)
            || self
                .status
                .display_name()
                .to_lowercase()
                .contains(&filter)
    }
}

impl Sortable for OrderRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "product" => self.product_name.cmp(&other.product_name),
            "quantity" => self.quantity.cmp(&other.quantity),
            "status" => self
                .status
                .display_name()
                .cmp(other.status.display_name()),
            "factory" => self.factory_name.cmp(&other.factory_name),
            "sale_point" => self.sale_point_name.cmp(&other.sale_point_name),
            _ => self.order_date.cmp(&other.order_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list};
    use chrono::TimeZone;

    fn order(id: i64, product_id: i64, status: OrderStatus, day: u32) -> Order {
        Order {
            id,
            product_id,
            quantity: 1,
            order_date: Utc.with_ymd_and_hms(2024, 11, day, 0, 0, 0).unwrap(),
            status,
            factory_id: 1,
            sale_point_id: 1,
        }
    }

    fn refs() -> (Vec<Product>, Vec<Factory>, Vec<SalePoint>) {
        (
            vec![Product {
                id: 1,
                name: "Кирпич".to_string(),
                price: 10.0,
                weight: 1.0,
                category_id: None,
                description: None,
            }],
            vec![Factory {
                id: 1,
                name: "Завод №1".to_string(),
                address: String::new(),
            }],
            vec![SalePoint {
                id: 1,
                name: "Точка на Ленина".to_string(),
                address: String::new(),
            }],
        )
    }

    #[test]
    fn joins_reference_names() {
        let (products, factories, sale_points) = refs();
        let row = OrderRow::build(
            order(1, 1, OrderStatus::InProcessing, 2),
            &products,
            &factories,
            &sale_points,
        );
        assert_eq!(row.product_name, "Кирпич");
        assert_eq!(row.factory_name, "Завод №1");
        assert_eq!(row.sale_point_name, "Точка на Ленина");
    }

    #[test]
    fn missing_reference_falls_back_to_id() {
        let row = OrderRow::build(order(1, 99, OrderStatus::InProcessing, 2), &[], &[], &[]);
        assert_eq!(row.product_name, "Товар #99");
        assert_eq!(row.factory_name, "Завод #1");
    }

    #[test]
    fn filter_matches_status_label() {
        let (products, factories, sale_points) = refs();
        let rows = vec![
            OrderRow::build(
                order(1, 1, OrderStatus::InProcessing, 2),
                &products,
                &factories,
                &sale_points,
            ),
            OrderRow::build(
                order(2, 1, OrderStatus::Delivered, 3),
                &products,
                &factories,
                &sale_points,
            ),
        ];
        let filtered = filter_list(rows, "доставлен");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    #[test]
    fn sorts_by_date_by_default() {
        let (products, factories, sale_points) = refs();
        let mut rows = vec![
            OrderRow::build(
                order(1, 1, OrderStatus::InProcessing, 20),
                &products,
                &factories,
                &sale_points,
            ),
            OrderRow::build(
                order(2, 1, OrderStatus::InProcessing, 2),
                &products,
                &factories,
                &sale_points,
            ),
        ];
        sort_list(&mut rows, "date", true);
        assert_eq!(rows[0].id, 2);
    }
}
