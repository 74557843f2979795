//! Заказы: чтение списка и массовая смена статусов.

use contracts::api::{ApiError, Paginated};
use contracts::domain::order::{BulkStatusResponse, Order, OrderStatus, StatusUpdate};

use crate::shared::api_client::ApiClient;

pub async fn fetch_orders(client: &ApiClient) -> Result<Vec<Order>, ApiError> {
    let page: Paginated<Order> = client.get("/product_order/").await?;
    Ok(page.results)
}

/// Переводит перечисленные заказы в указанный статус одним запросом.
pub async fn bulk_update_status(
    client: &ApiClient,
    ids: &[i64],
    status: OrderStatus,
) -> Result<BulkStatusResponse, ApiError> {
    let updates: Vec<StatusUpdate> = ids.iter().map(|&id| StatusUpdate { id, status }).collect();
    client
        .patch("/product_order/bulk-update-status/", &updates)
        .await
}
