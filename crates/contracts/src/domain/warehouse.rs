use serde::{Deserialize, Serialize};

/// Складская запись: количество товара на складе производства.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub product: i64,
    pub quantity: u32,
}
