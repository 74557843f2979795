use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Статус заказа. Линейная прогрессия, UI инициирует только переходы
/// вперёд; легальность перехода окончательно решает бэкенд.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    InProcessing,
    Delivery,
    Delivered,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::InProcessing => "В обработке",
            OrderStatus::Delivery => "Доставляется",
            OrderStatus::Delivered => "Доставлен",
        }
    }

    /// Следующий статус по жизненному циклу, если он есть.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::InProcessing => Some(OrderStatus::Delivery),
            OrderStatus::Delivery => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn all() -> [OrderStatus; 3] {
        [
            OrderStatus::InProcessing,
            OrderStatus::Delivery,
            OrderStatus::Delivered,
        ]
    }

    /// Имя статуса на проводе; совпадает с serde-представлением.
    pub fn wire_name(&self) -> &'static str {
        match self {
            OrderStatus::InProcessing => "in_processing",
            OrderStatus::Delivery => "delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn from_wire(value: &str) -> Option<OrderStatus> {
        OrderStatus::all().into_iter().find(|s| s.wire_name() == value)
    }
}

/// Заказ, как его отдаёт бэкенд.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub product_id: i64,
    pub quantity: u32,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub factory_id: i64,
    pub sale_point_id: i64,
}

/// Строка заказа при создании: что и сколько.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: i64,
    pub quantity: u32,
}

/// Элемент массового обновления статусов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: i64,
    pub status: OrderStatus,
}

/// Ответ эндпоинта массового обновления статусов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkStatusResponse {
    pub updated_orders: u32,
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_progression_is_linear() {
        assert_eq!(
            OrderStatus::InProcessing.next(),
            Some(OrderStatus::Delivery)
        );
        assert_eq!(OrderStatus::Delivery.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
    }

    #[test]
    fn status_wire_names_match_backend_choices() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProcessing).unwrap(),
            r#""in_processing""#
        );
        let s: OrderStatus = serde_json::from_str(r#""delivery""#).unwrap();
        assert_eq!(s, OrderStatus::Delivery);
    }

    #[test]
    fn wire_names_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_wire(status.wire_name()), Some(status));
        }
        assert_eq!(OrderStatus::from_wire("shipped"), None);
    }

    #[test]
    fn order_deserializes_with_iso_date() {
        let json = r#"{
            "id": 42,
            "product_id": 1,
            "quantity": 3,
            "order_date": "2024-11-02T10:15:00Z",
            "status": "in_processing",
            "factory_id": 2,
            "sale_point_id": 7
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::InProcessing);
        assert_eq!(order.order_date.to_rfc3339(), "2024-11-02T10:15:00+00:00");
    }
}
