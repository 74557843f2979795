//! Складские остатки завода.
//!
//! Эндпоинт принимает списки записей: добавление — POST, изменение —
//! PUT, удаление — DELETE с идентификатором товара в теле.

use contracts::api::ApiError;
use contracts::domain::warehouse::StockRecord;
use serde::Serialize;

use crate::shared::api_client::ApiClient;

const COUNTS_PATH: &str = "/factory_warehouse/product_counts/";

#[derive(Serialize)]
struct RemoveBody {
    product: i64,
}

pub async fn fetch_stock(client: &ApiClient) -> Result<Vec<StockRecord>, ApiError> {
    client.get(COUNTS_PATH).await
}

pub async fn add_stock(
    client: &ApiClient,
    records: &[StockRecord],
) -> Result<Vec<StockRecord>, ApiError> {
    client.post(COUNTS_PATH, &records).await
}

pub async fn update_stock(
    client: &ApiClient,
    records: &[StockRecord],
) -> Result<Vec<StockRecord>, ApiError> {
    client.put(COUNTS_PATH, &records).await
}

pub async fn remove_stock(client: &ApiClient, product_id: i64) -> Result<(), ApiError> {
    client
        .delete_with_body(COUNTS_PATH, &RemoveBody { product: product_id })
        .await
}
