use serde::{Deserialize, Serialize};

/// Торговая точка, размещающая заказы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePoint {
    pub id: i64,
    pub name: String,
    pub address: String,
}
