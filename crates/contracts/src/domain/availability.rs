use serde::{Deserialize, Serialize};

use super::product::Product;

/// Строка фида доступности: товар, предлагаемый торговой точке,
/// с остатком на складе. `quantity` — клиентский потолок заказа,
/// сервер перепроверяет остаток при создании заказа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub product: Product,
    pub factory_id: i64,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_row_deserializes() {
        let json = r#"{
            "product": {"id":1,"name":"Блок","price":100.0,"weight":2.0,"category_id":3,"description":"газобетон"},
            "factory_id": 5,
            "quantity": 10
        }"#;
        let entry: AvailabilityEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.product.id, 1);
        assert_eq!(entry.factory_id, 5);
        assert_eq!(entry.quantity, 10);
    }
}
