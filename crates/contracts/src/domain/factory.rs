use serde::{Deserialize, Serialize};

/// Производство (завод), владелец склада.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factory {
    pub id: i64,
    pub name: String,
    pub address: String,
}
